use {crate::*, glam::IVec2, std::char::TryFromCharError};

/* --- Day 4: Ceres Search ---

A letter grid word search. Question 1 counts every occurrence of "XMAS" along any of the 8
directions, overlaps included. Question 2 counts 'A' cells whose two diagonals each spell "MAS"
forwards or backwards, forming an X of "MAS". */

const WORD: &[u8] = b"XMAS";

const WORD_DELTAS: [IVec2; 8_usize] = [
    IVec2::new(1_i32, 0_i32),
    IVec2::new(1_i32, 1_i32),
    IVec2::new(0_i32, 1_i32),
    IVec2::new(-1_i32, 1_i32),
    IVec2::new(-1_i32, 0_i32),
    IVec2::new(-1_i32, -1_i32),
    IVec2::new(0_i32, -1_i32),
    IVec2::new(1_i32, -1_i32),
];

const DIAGONAL_DELTAS: [IVec2; 2_usize] = [IVec2::new(1_i32, 1_i32), IVec2::new(1_i32, -1_i32)];

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<u8>);

impl Solution {
    fn word_matches_at(&self, pos: IVec2, delta: IVec2) -> bool {
        WORD.iter().enumerate().all(|(offset, letter)| {
            self.0.get(pos + delta * offset as i32) == Some(letter)
        })
    }

    fn word_count(&self) -> u64 {
        self.0
            .iter_positions()
            .map(|pos| {
                WORD_DELTAS
                    .into_iter()
                    .filter(|&delta| self.word_matches_at(pos, delta))
                    .count() as u64
            })
            .sum()
    }

    fn is_cross_center(&self, pos: IVec2) -> bool {
        self.0.get(pos) == Some(&b'A')
            && DIAGONAL_DELTAS.into_iter().all(|delta| {
                matches!(
                    (self.0.get(pos + delta), self.0.get(pos - delta)),
                    (Some(&b'M'), Some(&b'S')) | (Some(&b'S'), Some(&b'M'))
                )
            })
    }

    fn cross_count(&self) -> u64 {
        self.0
            .iter_positions()
            .filter(|&pos| self.is_cross_center(pos))
            .count() as u64
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.word_count()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.cross_count()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = GridParseError<'i, TryFromCharError>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self(Grid2D::try_from(input)?))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &str = "\
        MMMSXXMASM\n\
        MSAMXMSMSA\n\
        AMXSXMAAMM\n\
        MSAMASMSMX\n\
        XMASAMXAMM\n\
        XXAMMXXAMA\n\
        SMSMSASXSS\n\
        SAXAMASAAA\n\
        MAMMMXMMMM\n\
        MXMXAXMASX\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.0.dimensions(), IVec2::new(10_i32, 10_i32));
        assert_eq!(solution.0.get(IVec2::ZERO), Some(&b'M'));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(solution().word_count(), 18_u64);
    }

    #[test]
    fn test_cross_count() {
        assert_eq!(solution().cross_count(), 9_u64);
    }
}
