use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 2: Red-Nosed Reports ---

Each line is a reactor report, a list of levels. A report is safe iff the levels are strictly
monotonic with adjacent steps of magnitude 1 to 3. Question 2 adds the Problem Dampener: a report
also counts as safe if removing a single level makes it safe. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Report(Vec<i32>);

impl Report {
    fn is_safe_slice(levels: &[i32]) -> bool {
        const SAFE_STEPS: std::ops::RangeInclusive<i32> = 1_i32..=3_i32;

        levels
            .windows(2_usize)
            .all(|pair| SAFE_STEPS.contains(&(pair[1_usize] - pair[0_usize])))
            || levels
                .windows(2_usize)
                .all(|pair| SAFE_STEPS.contains(&(pair[0_usize] - pair[1_usize])))
    }

    fn is_safe(&self) -> bool {
        Self::is_safe_slice(&self.0)
    }

    fn is_safe_with_dampener(&self) -> bool {
        self.is_safe()
            || (0_usize..self.0.len()).any(|skip| {
                let mut dampened: Vec<i32> = self.0.clone();

                dampened.remove(skip);

                Self::is_safe_slice(&dampened)
            })
    }
}

impl Parse for Report {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(space1, parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl Solution {
    fn safe_report_count(&self) -> u64 {
        self.0.iter().filter(|report| report.is_safe()).count() as u64
    }

    fn dampened_safe_report_count(&self) -> u64 {
        self.0
            .iter()
            .filter(|report| report.is_safe_with_dampener())
            .count() as u64
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Report::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.safe_report_count()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.dampened_safe_report_count()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
