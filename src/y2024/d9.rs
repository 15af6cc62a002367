use {
    crate::*,
    nom::{
        character::complete::{line_ending, satisfy},
        combinator::{map, opt},
        error::Error,
        multi::many1,
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 9: Disk Fragmenter ---

A disk map of alternating file and free-space run lengths, expanded into per-position file ids.
Question 1 compacts one block at a time: the last file block moves into the first free position.
Question 2 moves whole files instead, by descending file id, into the first free run to the left
that fits; files that don't fit stay put. The answer is the checksum, the sum of position times
file id over the final layout. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u8>);

impl Solution {
    /// Expands the run-length disk map into one entry per block: `Some(file_id)` or `None` for
    /// free space.
    fn expand(&self) -> Vec<Option<u32>> {
        let mut blocks: Vec<Option<u32>> =
            Vec::with_capacity(self.0.iter().map(|&run_len| run_len as usize).sum());

        for (run_index, &run_len) in self.0.iter().enumerate() {
            let block: Option<u32> = (run_index % 2_usize == 0_usize).then(|| run_index as u32 / 2_u32);

            for _ in 0_u8..run_len {
                blocks.push(block);
            }
        }

        blocks
    }

    fn checksum(blocks: &[Option<u32>]) -> u64 {
        blocks
            .iter()
            .enumerate()
            .map(|(position, block)| position as u64 * block.unwrap_or_default() as u64)
            .sum()
    }

    fn block_compacted_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<u32>> = self.expand();
        let mut front: usize = 0_usize;
        let mut back: usize = blocks.len();

        while front < back {
            if blocks[front].is_some() {
                front += 1_usize;
            } else {
                back -= 1_usize;

                if blocks[back].is_some() {
                    blocks.swap(front, back);
                    front += 1_usize;
                }
            }
        }

        Self::checksum(&blocks)
    }

    /// First free run of at least `file_len` blocks strictly left of `file_start`, if any.
    fn find_free_run(blocks: &[Option<u32>], file_start: usize, file_len: usize) -> Option<usize> {
        let mut run_start: usize = 0_usize;
        let mut run_len: usize = 0_usize;

        for (position, block) in blocks[..file_start].iter().enumerate() {
            if block.is_none() {
                if run_len == 0_usize {
                    run_start = position;
                }

                run_len += 1_usize;

                if run_len == file_len {
                    return Some(run_start);
                }
            } else {
                run_len = 0_usize;
            }
        }

        None
    }

    fn file_compacted_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<u32>> = self.expand();
        let max_file_id: u32 = (self.0.len() as u32 - 1_u32) / 2_u32;

        for file_id in (1_u32..=max_file_id).rev() {
            let file_id: Option<u32> = Some(file_id);

            // The expansion is ordered by file id, so this is the file's one contiguous span.
            let file_start: usize = blocks
                .iter()
                .position(|&block| block == file_id)
                .unwrap_or(blocks.len());
            let file_len: usize = blocks[file_start..]
                .iter()
                .take_while(|&&block| block == file_id)
                .count();

            if let Some(run_start) = Self::find_free_run(&blocks, file_start, file_len) {
                for offset in 0_usize..file_len {
                    blocks[run_start + offset] = file_id;
                    blocks[file_start + offset] = None;
                }
            }
        }

        Self::checksum(&blocks)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        terminated(
            map(
                many1(map(satisfy(|c| c.is_ascii_digit()), |c| c as u8 - ZERO_OFFSET)),
                Self,
            ),
            opt(line_ending),
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.block_compacted_checksum()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.file_compacted_checksum()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
