use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

/* --- Day 7: Bridge Repair ---

Each line is a test value and operands. Operators are applied strictly left to right, no
precedence: `+` and `*` for question 1, plus decimal concatenation `||` for question 2. A line
counts if some operator assignment reaches the test value; the answer is the sum of counting test
values. The set of partial results is carried forward one operand at a time rather than
re-evaluating full operator strings. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

fn concatenate(left: u64, right: u64) -> u64 {
    left * 10_u64.pow(right.checked_ilog10().unwrap_or_default() + 1_u32) + right
}

impl Equation {
    fn is_solvable(&self, with_concatenation: bool) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };

        let mut partial_results: Vec<u64> = vec![first];
        let mut next_partial_results: Vec<u64> = Vec::new();

        for &operand in rest {
            next_partial_results.clear();

            for &partial_result in &partial_results {
                // All operands are positive, so partial results never shrink: anything past the
                // test value is dead.
                next_partial_results.extend(
                    [
                        Some(partial_result + operand),
                        Some(partial_result * operand),
                        with_concatenation.then(|| concatenate(partial_result, operand)),
                    ]
                    .into_iter()
                    .flatten()
                    .filter(|&next_partial_result| next_partial_result <= self.test_value),
                );
            }

            std::mem::swap(&mut partial_results, &mut next_partial_results);
        }

        partial_results.contains(&self.test_value)
    }
}

impl Parse for Equation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                tag(": "),
                separated_list1(space1, parse_integer),
            ),
            |(test_value, operands)| Self {
                test_value,
                operands,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn solvable_test_value_sum(&self, with_concatenation: bool) -> u64 {
        self.0
            .iter()
            .filter(|equation| equation.is_solvable(with_concatenation))
            .map(|equation| equation.test_value)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Equation::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.solvable_test_value_sum(false)
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.solvable_test_value_sum(true)
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
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18\n\
        292: 11 6 16 20\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.0.len(), 9_usize);
        assert_eq!(
            solution.0[0_usize],
            Equation {
                test_value: 190_u64,
                operands: vec![10_u64, 19_u64],
            }
        );
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(concatenate(15_u64, 6_u64), 156_u64);
        assert_eq!(concatenate(6_u64, 15_u64), 615_u64);
        assert_eq!(concatenate(48_u64, 0_u64), 480_u64);
    }

    #[test]
    fn test_is_solvable() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(|equation| equation.is_solvable(false))
                .collect::<Vec<bool>>(),
            vec![true, true, false, false, false, false, false, false, true]
        );
        assert_eq!(
            solution()
                .0
                .iter()
                .map(|equation| equation.is_solvable(true))
                .collect::<Vec<bool>>(),
            vec![true, true, false, true, true, false, true, false, true]
        );
    }

    #[test]
    fn test_solvable_test_value_sum() {
        assert_eq!(solution().solvable_test_value_sum(false), 3749_u64);
        assert_eq!(solution().solvable_test_value_sum(true), 11387_u64);
    }
}
