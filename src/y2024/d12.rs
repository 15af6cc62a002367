use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    std::{char::TryFromCharError, collections::HashMap},
    strum::IntoEnumIterator,
};

/* --- Day 12: Garden Groups ---

A grid of plant labels, partitioned into maximal 4-connected same-label regions by flood fill with
an explicit frontier. Question 1 prices each region at area times perimeter, where the perimeter
counts edges leaving the region. Question 2 prices at area times side count, where a side is a
maximal straight run of boundary edges sharing an orientation and grid line. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<u8>);

impl Solution {
    /// Flood-fills the region containing `start`, marking it in `visited` and returning its cell
    /// mask.
    fn region_mask(&self, start: IVec2, visited: &mut BitVec) -> BitVec {
        let mut mask: BitVec = bitvec![0; self.0.cells().len()];
        let label: u8 = *self.0.get(start).unwrap();
        let start_index: usize = self.0.index_from_pos(start);
        let mut frontier: Vec<IVec2> = vec![start];

        mask.set(start_index, true);
        visited.set(start_index, true);

        while let Some(pos) = frontier.pop() {
            for dir in Direction::iter() {
                let next_pos: IVec2 = pos + dir.vec();

                if let Some(next_index) = self.0.try_index_from_pos(next_pos) {
                    if self.0.cells()[next_index] == label && !mask[next_index] {
                        mask.set(next_index, true);
                        visited.set(next_index, true);
                        frontier.push(next_pos);
                    }
                }
            }
        }

        mask
    }

    fn iter_region_masks(&self) -> impl Iterator<Item = BitVec> + '_ {
        let mut visited: BitVec = bitvec![0; self.0.cells().len()];

        (0_usize..self.0.cells().len()).filter_map(move |index| {
            (!visited[index]).then(|| self.region_mask(self.0.pos_from_index(index), &mut visited))
        })
    }

    fn iter_boundary_edges<'a>(
        &'a self,
        mask: &'a BitSlice,
    ) -> impl Iterator<Item = (IVec2, Direction)> + 'a {
        mask.iter_ones().flat_map(move |index| {
            let pos: IVec2 = self.0.pos_from_index(index);

            Direction::iter().filter_map(move |dir| {
                self.0
                    .try_index_from_pos(pos + dir.vec())
                    .map_or(true, |neighbor_index| !mask[neighbor_index])
                    .then_some((pos, dir))
            })
        })
    }

    fn perimeter(&self, mask: &BitSlice) -> u64 {
        self.iter_boundary_edges(mask).count() as u64
    }

    /// Groups the boundary edges by facing and grid line, then counts maximal runs of consecutive
    /// offsets within each group; each run is one straight side.
    fn side_count(&self, mask: &BitSlice) -> u64 {
        let mut edge_offsets: HashMap<(Direction, i32), Vec<i32>> = HashMap::new();

        for (pos, dir) in self.iter_boundary_edges(mask) {
            let (line, offset): (i32, i32) = if dir.is_north_or_south() {
                (pos.y, pos.x)
            } else {
                (pos.x, pos.y)
            };

            edge_offsets.entry((dir, line)).or_default().push(offset);
        }

        edge_offsets
            .into_values()
            .map(|mut offsets| {
                offsets.sort_unstable();

                offsets
                    .windows(2_usize)
                    .filter(|pair| pair[1_usize] != pair[0_usize] + 1_i32)
                    .count() as u64
                    + 1_u64
            })
            .sum()
    }

    fn perimeter_price(&self) -> u64 {
        self.iter_region_masks()
            .map(|mask| mask.count_ones() as u64 * self.perimeter(&mask))
            .sum()
    }

    fn side_price(&self) -> u64 {
        self.iter_region_masks()
            .map(|mask| mask.count_ones() as u64 * self.side_count(&mask))
            .sum()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.perimeter_price()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.side_price()
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

    const SMALL_SOLUTION_STR: &str = "\
        AAAA\n\
        BBCD\n\
        BBCC\n\
        EEEC\n";

    const SOLUTION_STR: &str = "\
        RRRRIICCFF\n\
        RRRRIICCCF\n\
        VVRRRCCFFF\n\
        VVRCCCJFFF\n\
        VVVVCJJCFE\n\
        VVIVCCJJEE\n\
        VVIIICJJEE\n\
        MIIIIIJJEE\n\
        MIIISIJEEE\n\
        MMMISSJEEE\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_iter_region_masks() {
        let small_solution: Solution = Solution::try_from(SMALL_SOLUTION_STR).unwrap();

        assert_eq!(
            small_solution
                .iter_region_masks()
                .map(|mask| mask.count_ones())
                .collect::<Vec<usize>>(),
            vec![4_usize, 4_usize, 4_usize, 1_usize, 3_usize]
        );
        assert_eq!(solution().iter_region_masks().count(), 11_usize);
    }

    #[test]
    fn test_perimeter() {
        let small_solution: Solution = Solution::try_from(SMALL_SOLUTION_STR).unwrap();

        assert_eq!(
            small_solution
                .iter_region_masks()
                .map(|mask| small_solution.perimeter(&mask))
                .collect::<Vec<u64>>(),
            vec![10_u64, 8_u64, 10_u64, 4_u64, 8_u64]
        );
    }

    #[test]
    fn test_side_count() {
        let small_solution: Solution = Solution::try_from(SMALL_SOLUTION_STR).unwrap();

        assert_eq!(
            small_solution
                .iter_region_masks()
                .map(|mask| small_solution.side_count(&mask))
                .collect::<Vec<u64>>(),
            vec![4_u64, 4_u64, 8_u64, 4_u64, 4_u64]
        );
    }

    #[test]
    fn test_perimeter_price() {
        assert_eq!(
            Solution::try_from(SMALL_SOLUTION_STR).unwrap().perimeter_price(),
            140_u64
        );
        assert_eq!(solution().perimeter_price(), 1930_u64);
    }

    #[test]
    fn test_side_price() {
        assert_eq!(
            Solution::try_from(SMALL_SOLUTION_STR).unwrap().side_price(),
            80_u64
        );
        assert_eq!(solution().side_price(), 1206_u64);
    }
}
