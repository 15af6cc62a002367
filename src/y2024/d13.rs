use {
    crate::*,
    glam::I64Vec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::map,
        error::Error,
        multi::many0,
        sequence::{preceded, separated_pair, terminated, tuple},
        Err, IResult,
    },
};

/* --- Day 13: Claw Contraption ---

Each claw machine has two buttons moving the claw by fixed (X, Y) steps and a prize position.
Pressing A costs 3 tokens, B costs 1. The machine is a 2x2 integer linear system: find
non-negative integer press counts landing exactly on the prize, or deem it unreachable. Question 2
shifts every prize by 10^13 on both axes, far past anything floating point or brute force can
handle, so the system is solved exactly by Cramer's rule over `i128` with divisibility and sign
checks. */

const A_TOKEN_COST: i128 = 3_i128;
const B_TOKEN_COST: i128 = 1_i128;
const Q2_PRIZE_OFFSET: i64 = 10_000_000_000_000_i64;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ClawMachine {
    button_a: I64Vec2,
    button_b: I64Vec2,
    prize: I64Vec2,
}

impl ClawMachine {
    fn with_prize_offset(&self, offset: i64) -> Self {
        Self {
            button_a: self.button_a,
            button_b: self.button_b,
            prize: self.prize + I64Vec2::splat(offset),
        }
    }

    /// Tokens to win the prize, or 0 if it's unreachable. The solution, when the buttons aren't
    /// parallel, is unique; it only counts if both press counts are non-negative integers.
    fn token_cost(&self) -> u64 {
        let determinant: i128 =
            self.button_a.x as i128 * self.button_b.y as i128
                - self.button_a.y as i128 * self.button_b.x as i128;

        if determinant == 0_i128 {
            // Parallel buttons don't occur in real machine descriptions.
            return 0_u64;
        }

        let a_numerator: i128 = self.prize.x as i128 * self.button_b.y as i128
            - self.prize.y as i128 * self.button_b.x as i128;
        let b_numerator: i128 = self.button_a.x as i128 * self.prize.y as i128
            - self.button_a.y as i128 * self.prize.x as i128;

        if a_numerator % determinant != 0_i128 || b_numerator % determinant != 0_i128 {
            return 0_u64;
        }

        let a_presses: i128 = a_numerator / determinant;
        let b_presses: i128 = b_numerator / determinant;

        if a_presses < 0_i128 || b_presses < 0_i128 {
            0_u64
        } else {
            (A_TOKEN_COST * a_presses + B_TOKEN_COST * b_presses) as u64
        }
    }
}

fn parse_button<'i>(label: &'static str) -> impl FnMut(&'i str) -> IResult<&'i str, I64Vec2> {
    map(
        tuple((
            tag("Button "),
            tag(label),
            tag(": X+"),
            parse_integer::<i64>,
            tag(", Y+"),
            parse_integer::<i64>,
        )),
        |(_, _, _, x, _, y)| I64Vec2::new(x, y),
    )
}

impl Parse for ClawMachine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(parse_button("A"), line_ending),
                terminated(parse_button("B"), line_ending),
                preceded(
                    tag("Prize: X="),
                    separated_pair(parse_integer::<i64>, tag(", Y="), parse_integer::<i64>),
                ),
            )),
            |(button_a, button_b, (prize_x, prize_y))| Self {
                button_a,
                button_b,
                prize: I64Vec2::new(prize_x, prize_y),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ClawMachine>);

impl Solution {
    fn total_token_cost(&self) -> u64 {
        self.0.iter().map(ClawMachine::token_cost).sum()
    }

    fn total_offset_token_cost(&self) -> u64 {
        self.0
            .iter()
            .map(|claw_machine| claw_machine.with_prize_offset(Q2_PRIZE_OFFSET).token_cost())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(ClawMachine::parse, many0(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.total_token_cost()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.total_offset_token_cost()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
