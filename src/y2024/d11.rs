use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::separated_list1,
        sequence::terminated,
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 11: Plutonian Pebbles ---

A line of engraved stones changes with each blink: 0 becomes 1, an even-digit number splits into
its two halves, anything else is multiplied by 2024. Only the count matters, so each stone is
counted independently with a memo keyed by (engraving, blinks remaining); the stones' order never
influences the result. Question 1 blinks 25 times, question 2 blinks 75. */

const Q1_BLINKS: u8 = 25_u8;
const Q2_BLINKS: u8 = 75_u8;

/// Applies one blink to a single stone, yielding one or two stones.
fn blink_stone(stone: u64) -> (u64, Option<u64>) {
    if stone == 0_u64 {
        (1_u64, None)
    } else {
        let digits: u32 = stone.ilog10() + 1_u32;

        if digits % 2_u32 == 0_u32 {
            let half_pow: u64 = 10_u64.pow(digits / 2_u32);

            (stone / half_pow, Some(stone % half_pow))
        } else {
            (stone * 2024_u64, None)
        }
    }
}

type StoneCountMemo = HashMap<(u64, u8), u64>;

fn count_stones_after_blinks(stone: u64, blinks: u8, memo: &mut StoneCountMemo) -> u64 {
    if blinks == 0_u8 {
        1_u64
    } else if let Some(&count) = memo.get(&(stone, blinks)) {
        count
    } else {
        let (first, second): (u64, Option<u64>) = blink_stone(stone);

        let count: u64 = count_stones_after_blinks(first, blinks - 1_u8, memo)
            + second.map_or(0_u64, |second| {
                count_stones_after_blinks(second, blinks - 1_u8, memo)
            });

        memo.insert((stone, blinks), count);

        count
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    fn stone_count_after_blinks(&self, blinks: u8) -> u64 {
        let mut memo: StoneCountMemo = StoneCountMemo::new();

        self.0
            .iter()
            .map(|&stone| count_stones_after_blinks(stone, blinks, &mut memo))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            terminated(separated_list1(space1, parse_integer), opt(line_ending)),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.stone_count_after_blinks(Q1_BLINKS)
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.stone_count_after_blinks(Q2_BLINKS)
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
