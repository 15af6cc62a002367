use {crate::*, bitvec::prelude::*, glam::IVec2, strum::IntoEnumIterator};

/* --- Day 10: Hoof It ---

A topographic digit grid. A trail climbs from a 0 trailhead to a 9 peak in 4-connected steps that
each increase the height by exactly one. Question 1 sums each trailhead's score, its count of
distinct reachable peaks. Question 2 sums each trailhead's rating, its count of distinct climbing
paths. The walk uses an explicit stack, so grid size is not bounded by call-stack depth. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Height(u8);

impl TryFrom<char> for Height {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10_u32)
            .map(|digit| Self(digit as u8))
            .ok_or(value)
    }
}

const TRAILHEAD: u8 = 0_u8;
const PEAK: u8 = 9_u8;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Height>);

impl Solution {
    /// Walks all strictly-increasing trails from `trailhead`, returning the score (distinct
    /// reachable peaks) and rating (distinct paths). A cell is pushed once per distinct path
    /// through it; the peak set deduplicates endpoints for the score.
    fn trailhead_score_and_rating(&self, trailhead: IVec2) -> (u64, u64) {
        let mut peaks: BitVec = bitvec![0; self.0.cells().len()];
        let mut rating: u64 = 0_u64;
        let mut frontier: Vec<IVec2> = vec![trailhead];

        while let Some(pos) = frontier.pop() {
            let height: u8 = self.0.get(pos).unwrap().0;

            if height == PEAK {
                peaks.set(self.0.index_from_pos(pos), true);
                rating += 1_u64;

                continue;
            }

            for dir in Direction::iter() {
                let next_pos: IVec2 = pos + dir.vec();

                if self
                    .0
                    .get(next_pos)
                    .map_or(false, |next_height| next_height.0 == height + 1_u8)
                {
                    frontier.push(next_pos);
                }
            }
        }

        (peaks.count_ones() as u64, rating)
    }

    fn iter_trailheads(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.0
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, height)| height.0 == TRAILHEAD)
            .map(|(index, _)| self.0.pos_from_index(index))
    }

    fn total_score(&self) -> u64 {
        self.iter_trailheads()
            .map(|trailhead| self.trailhead_score_and_rating(trailhead).0)
            .sum()
    }

    fn total_rating(&self) -> u64 {
        self.iter_trailheads()
            .map(|trailhead| self.trailhead_score_and_rating(trailhead).1)
            .sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.total_score()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.total_rating()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = GridParseError<'i, char>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self(Grid2D::try_from(input)?))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &str = "\
        89010123\n\
        78121874\n\
        87430965\n\
        96549874\n\
        45678903\n\
        32019012\n\
        01329801\n\
        10456732\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_iter_trailheads() {
        assert_eq!(solution().iter_trailheads().count(), 9_usize);
    }

    #[test]
    fn test_trailhead_score_and_rating() {
        assert_eq!(
            solution().trailhead_score_and_rating(IVec2::new(2_i32, 0_i32)),
            (5_u64, 20_u64)
        );
    }

    #[test]
    fn test_total_score() {
        assert_eq!(solution().total_score(), 36_u64);
    }

    #[test]
    fn test_total_rating() {
        assert_eq!(solution().total_rating(), 81_u64);
    }
}
