use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{anychar, digit1},
        combinator::{map, map_res, value},
        error::Error,
        multi::many0,
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

/* --- Day 3: Mull It Over ---

Corrupted program memory. Real instructions are `mul(a,b)`, `do()`, and `don't()`; everything else
is noise to be skipped one character at a time. Question 1 sums all products. Question 2 only sums
products while multiplication is enabled; `don't()` disables and `do()` re-enables it, and it
starts enabled. */

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

/// Unsigned-only operand parser. A minus sign inside `mul(...)` makes the whole token noise, so a
/// sign-accepting integer parser would be wrong here.
fn parse_operand<'i>(input: &'i str) -> IResult<&'i str, u32> {
    map_res(digit1, str::parse)(input)
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(parse_operand, tag(","), parse_operand),
                    tag(")"),
                ),
                |(multiplicand, multiplier)| Self::Mul(multiplicand, multiplier),
            ),
            value(Self::Do, tag("do()")),
            value(Self::Dont, tag("don't()")),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn unconditional_product_sum(&self) -> u64 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(multiplicand, multiplier) => {
                    *multiplicand as u64 * *multiplier as u64
                }
                _ => 0_u64,
            })
            .sum()
    }

    fn enabled_product_sum(&self) -> u64 {
        let mut enabled: bool = true;

        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(multiplicand, multiplier) if enabled => {
                    *multiplicand as u64 * *multiplier as u64
                }
                Instruction::Do => {
                    enabled = true;

                    0_u64
                }
                Instruction::Dont => {
                    enabled = false;

                    0_u64
                }
                _ => 0_u64,
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        // Skipping a single character on failure re-tries the scan at every offset, mirroring a
        // regex search over the corrupted memory.
        map(
            many0(alt((
                map(Instruction::parse, Some),
                value(None, anychar),
            ))),
            |instructions| Self(instructions.into_iter().flatten().collect()),
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.unconditional_product_sum()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.enabled_product_sum()
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
    use super::*;

    const SOLUTION_STRS: &[&str] = &[
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    ];

    #[test]
    fn test_try_from_str() {
        use Instruction::*;

        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize]),
            Ok(Solution(vec![
                Mul(2_u32, 4_u32),
                Mul(5_u32, 5_u32),
                Mul(11_u32, 8_u32),
                Mul(8_u32, 5_u32),
            ]))
        );
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[1_usize]),
            Ok(Solution(vec![
                Mul(2_u32, 4_u32),
                Dont,
                Mul(5_u32, 5_u32),
                Mul(11_u32, 8_u32),
                Do,
                Mul(8_u32, 5_u32),
            ]))
        );
    }

    #[test]
    fn test_signed_operands_are_noise() {
        use Instruction::*;

        assert_eq!(
            Solution::try_from("xmul(-1,2)ymul(3,-4)zmul(3,4)"),
            Ok(Solution(vec![Mul(3_u32, 4_u32)]))
        );
    }

    #[test]
    fn test_unconditional_product_sum() {
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[0_usize])
                .unwrap()
                .unconditional_product_sum(),
            161_u64
        );
    }

    #[test]
    fn test_enabled_product_sum() {
        assert_eq!(
            Solution::try_from(SOLUTION_STRS[1_usize])
                .unwrap()
                .enabled_product_sum(),
            48_u64
        );
    }
}
