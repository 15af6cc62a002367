use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 1: Historian Hysteria ---

Two columns of location ids. Question 1 asks for the total distance between the columns once each
is sorted: the sum of absolute differences between paired elements. Question 2 asks for a
similarity score: each left id multiplied by the number of times it appears in the right column,
summed. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl Solution {
    fn sorted_columns(&self) -> (Vec<u32>, Vec<u32>) {
        let mut left: Vec<u32> = self.left.clone();
        let mut right: Vec<u32> = self.right.clone();

        left.sort_unstable();
        right.sort_unstable();

        (left, right)
    }

    fn total_distance(&self) -> u64 {
        let (left, right): (Vec<u32>, Vec<u32>) = self.sorted_columns();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| left.abs_diff(right) as u64)
            .sum()
    }

    fn right_occurrence_counts(&self) -> HashMap<u32, u64> {
        let mut counts: HashMap<u32, u64> = HashMap::with_capacity(self.right.len());

        for &right in &self.right {
            *counts.entry(right).or_default() += 1_u64;
        }

        counts
    }

    fn similarity_score(&self) -> u64 {
        let counts: HashMap<u32, u64> = self.right_occurrence_counts();

        self.left
            .iter()
            .map(|&left| left as u64 * counts.get(&left).copied().unwrap_or_default())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                separated_pair(parse_integer::<u32>, space1, parse_integer::<u32>),
                opt(line_ending),
            )),
            |pairs| {
                let (left, right): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();

                Self { left, right }
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.total_distance()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.similarity_score()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &str = "\
        3   4\n\
        4   3\n\
        2   5\n\
        1   3\n\
        3   9\n\
        3   3\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution {
            left: vec![3_u32, 4_u32, 2_u32, 1_u32, 3_u32, 3_u32],
            right: vec![4_u32, 3_u32, 5_u32, 3_u32, 9_u32, 3_u32],
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_total_distance() {
        assert_eq!(solution().total_distance(), 11_u64);
    }

    #[test]
    fn test_similarity_score() {
        assert_eq!(solution().similarity_score(), 31_u64);
    }
}
