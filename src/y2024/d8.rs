use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    std::{char::TryFromCharError, collections::HashMap},
};

/* --- Day 8: Resonant Collinearity ---

Antennas on a grid, keyed by frequency character. Question 1: every same-frequency pair projects
an antinode at the mirrored offset beyond each antenna; count the distinct in-bounds antinodes.
Question 2: resonant harmonics put an antinode at every in-bounds collinear multiple of the pair's
offset, the antennas themselves included. */

const OPEN: u8 = b'.';

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<u8>);

impl Solution {
    fn antennas_by_frequency(&self) -> HashMap<u8, Vec<IVec2>> {
        let mut antennas: HashMap<u8, Vec<IVec2>> = HashMap::new();

        for (index, &frequency) in self.0.cells().iter().enumerate() {
            if frequency != OPEN {
                antennas
                    .entry(frequency)
                    .or_default()
                    .push(self.0.pos_from_index(index));
            }
        }

        antennas
    }

    fn antinode_count(&self, resonant_harmonics: bool) -> u64 {
        let mut antinodes: BitVec = bitvec![0; self.0.cells().len()];

        for positions in self.antennas_by_frequency().into_values() {
            for (index, &antenna_a) in positions.iter().enumerate() {
                for &antenna_b in &positions[index + 1_usize..] {
                    let offset: IVec2 = antenna_b - antenna_a;

                    if resonant_harmonics {
                        let mut pos: IVec2 = antenna_a;

                        while let Some(index) = self.0.try_index_from_pos(pos) {
                            antinodes.set(index, true);
                            pos -= offset;
                        }

                        pos = antenna_b;

                        while let Some(index) = self.0.try_index_from_pos(pos) {
                            antinodes.set(index, true);
                            pos += offset;
                        }
                    } else {
                        for pos in [antenna_a - offset, antenna_b + offset] {
                            if let Some(index) = self.0.try_index_from_pos(pos) {
                                antinodes.set(index, true);
                            }
                        }
                    }
                }
            }
        }

        antinodes.count_ones() as u64
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.antinode_count(false)
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.antinode_count(true)
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
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_antennas_by_frequency() {
        let antennas: HashMap<u8, Vec<IVec2>> = solution().antennas_by_frequency();

        assert_eq!(antennas.len(), 2_usize);
        assert_eq!(
            antennas[&b'0'],
            vec![
                IVec2::new(8_i32, 1_i32),
                IVec2::new(5_i32, 2_i32),
                IVec2::new(7_i32, 3_i32),
                IVec2::new(4_i32, 4_i32),
            ]
        );
        assert_eq!(antennas[&b'A'].len(), 3_usize);
    }

    #[test]
    fn test_antinode_count() {
        assert_eq!(solution().antinode_count(false), 14_u64);
        assert_eq!(solution().antinode_count(true), 34_u64);
    }
}
