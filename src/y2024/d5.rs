use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::{cmp::Ordering, collections::HashSet},
};

/* --- Day 5: Print Queue ---

A block of `a|b` rules (page a must print before page b when both appear) followed by update lines
of comma-separated pages. Question 1 sums the middle page of each update that already respects
every applicable rule. Question 2 reorders the offending updates by the rule relation and sums
their middle pages instead. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Solution {
    fn rule_set(&self) -> HashSet<(u32, u32)> {
        self.rules.iter().copied().collect()
    }

    fn is_ordered(rule_set: &HashSet<(u32, u32)>, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(index, &earlier)| {
            update[index + 1_usize..]
                .iter()
                .all(|&later| !rule_set.contains(&(later, earlier)))
        })
    }

    fn reorder(rule_set: &HashSet<(u32, u32)>, update: &[u32]) -> Vec<u32> {
        let mut reordered: Vec<u32> = update.to_vec();

        reordered.sort_by(|&a, &b| {
            if rule_set.contains(&(a, b)) {
                Ordering::Less
            } else if rule_set.contains(&(b, a)) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        reordered
    }

    fn middle_page(update: &[u32]) -> u64 {
        update[update.len() / 2_usize] as u64
    }

    fn ordered_middle_page_sum(&self) -> u64 {
        let rule_set: HashSet<(u32, u32)> = self.rule_set();

        self.updates
            .iter()
            .filter(|update| Self::is_ordered(&rule_set, update))
            .map(|update| Self::middle_page(update))
            .sum()
    }

    fn reordered_middle_page_sum(&self) -> u64 {
        let rule_set: HashSet<(u32, u32)> = self.rule_set();

        self.updates
            .iter()
            .filter(|update| !Self::is_ordered(&rule_set, update))
            .map(|update| Self::middle_page(&Self::reorder(&rule_set, update)))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                many0(terminated(
                    separated_pair(parse_integer, tag("|"), parse_integer),
                    line_ending,
                )),
                line_ending,
                many0(terminated(
                    separated_list1(tag(","), parse_integer),
                    opt(line_ending),
                )),
            ),
            |(rules, updates)| Self { rules, updates },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.ordered_middle_page_sum()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.reordered_middle_page_sum()
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
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.rules.len(), 21_usize);
        assert_eq!(solution.rules[0_usize], (47_u32, 53_u32));
        assert_eq!(
            solution.updates,
            vec![
                vec![75_u32, 47_u32, 61_u32, 53_u32, 29_u32],
                vec![97_u32, 61_u32, 53_u32, 29_u32, 13_u32],
                vec![75_u32, 29_u32, 13_u32],
                vec![75_u32, 97_u32, 47_u32, 61_u32, 53_u32],
                vec![61_u32, 13_u32, 29_u32],
                vec![97_u32, 13_u32, 75_u32, 29_u32, 47_u32],
            ]
        );
    }

    #[test]
    fn test_is_ordered() {
        let solution: &Solution = solution();
        let rule_set: HashSet<(u32, u32)> = solution.rule_set();

        assert_eq!(
            solution
                .updates
                .iter()
                .map(|update| Solution::is_ordered(&rule_set, update))
                .collect::<Vec<bool>>(),
            vec![true, true, true, false, false, false]
        );
    }

    #[test]
    fn test_reorder() {
        let solution: &Solution = solution();
        let rule_set: HashSet<(u32, u32)> = solution.rule_set();

        assert_eq!(
            Solution::reorder(&rule_set, &solution.updates[3_usize]),
            vec![97_u32, 75_u32, 47_u32, 61_u32, 53_u32]
        );
        assert_eq!(
            Solution::reorder(&rule_set, &solution.updates[4_usize]),
            vec![61_u32, 29_u32, 13_u32]
        );
        assert_eq!(
            Solution::reorder(&rule_set, &solution.updates[5_usize]),
            vec![97_u32, 75_u32, 47_u32, 29_u32, 13_u32]
        );
    }

    #[test]
    fn test_ordered_middle_page_sum() {
        assert_eq!(solution().ordered_middle_page_sum(), 143_u64);
    }

    #[test]
    fn test_reordered_middle_page_sum() {
        assert_eq!(solution().reordered_middle_page_sum(), 123_u64);
    }
}
