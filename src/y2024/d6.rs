use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    rayon::prelude::*,
    strum::EnumCount,
};

/* --- Day 6: Guard Gallivant ---

A guard walks a mapped lab: forward until the next cell is an obstruction, then turn clockwise,
until walking off the map. Question 1 counts the distinct cells visited. Question 2 counts the
open cells (other than the start) where a single new obstruction traps the guard in a loop, where
a loop means revisiting an identical position-and-facing state. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum Cell {
        #[default]
        Open = OPEN = b'.',
        Obstruction = OBSTRUCTION = b'#',
        GuardNorth = GUARD_NORTH = b'^',
        GuardEast = GUARD_EAST = b'>',
        GuardSouth = GUARD_SOUTH = b'v',
        GuardWest = GUARD_WEST = b'<',
    }
}

impl Cell {
    fn try_guard_dir(self) -> Option<Direction> {
        match self {
            Self::GuardNorth => Some(Direction::North),
            Self::GuardEast => Some(Direction::East),
            Self::GuardSouth => Some(Direction::South),
            Self::GuardWest => Some(Direction::West),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SolutionParseError<'s> {
    GridParse(GridParseError<'s, ()>),
    NoGuard,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    start_pos: IVec2,
    start_dir: Direction,
}

impl Solution {
    fn visited_cells(&self) -> BitVec {
        let mut visited: BitVec = bitvec![0; self.grid.cells().len()];
        let mut pos: IVec2 = self.start_pos;
        let mut dir: Direction = self.start_dir;

        loop {
            visited.set(self.grid.index_from_pos(pos), true);

            let next_pos: IVec2 = pos + dir.vec();

            match self.grid.get(next_pos) {
                None => break,
                Some(Cell::Obstruction) => dir = dir.next(),
                Some(_) => pos = next_pos,
            }
        }

        visited
    }

    fn visited_cell_count(&self) -> u64 {
        self.visited_cells().count_ones() as u64
    }

    /// Re-runs the patrol with one extra obstruction, reporting whether the guard ever repeats a
    /// (position, facing) state.
    fn is_stuck_with_obstruction(&self, obstruction: IVec2) -> bool {
        let mut seen_states: BitVec = bitvec![0; self.grid.cells().len() * Direction::COUNT];
        let mut pos: IVec2 = self.start_pos;
        let mut dir: Direction = self.start_dir;

        loop {
            let state: usize = self.grid.index_from_pos(pos) * Direction::COUNT + dir as usize;

            if seen_states[state] {
                return true;
            }

            seen_states.set(state, true);

            let next_pos: IVec2 = pos + dir.vec();

            if next_pos == obstruction {
                dir = dir.next();

                continue;
            }

            match self.grid.get(next_pos) {
                None => return false,
                Some(Cell::Obstruction) => dir = dir.next(),
                Some(_) => pos = next_pos,
            }
        }
    }

    /// Only cells on the unobstructed patrol path can change the guard's route, so those are the
    /// only candidates worth re-simulating.
    fn stuck_obstruction_count(&self) -> u64 {
        self.visited_cells()
            .iter_ones()
            .map(|index| self.grid.pos_from_index(index))
            .filter(|&pos| pos != self.start_pos)
            .collect::<Vec<IVec2>>()
            .into_par_iter()
            .filter(|&obstruction| self.is_stuck_with_obstruction(obstruction))
            .count() as u64
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.visited_cell_count()
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) -> u64 {
        self.stuck_obstruction_count()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = SolutionParseError<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        let grid: Grid2D<Cell> = input.try_into().map_err(SolutionParseError::GridParse)?;

        let (start_pos, start_dir): (IVec2, Direction) = grid
            .cells()
            .iter()
            .enumerate()
            .find_map(|(index, cell)| {
                cell.try_guard_dir()
                    .map(|dir| (grid.pos_from_index(index), dir))
            })
            .ok_or(SolutionParseError::NoGuard)?;

        Ok(Self {
            grid,
            start_pos,
            start_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &str = "\
        ....#.....\n\
        .........#\n\
        ..........\n\
        ..#.......\n\
        .......#..\n\
        ..........\n\
        .#..^.....\n\
        ........#.\n\
        #.........\n\
        ......#...\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::try_from(SOLUTION_STR).unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.start_pos, IVec2::new(4_i32, 6_i32));
        assert_eq!(solution.start_dir, Direction::North);
        assert_eq!(
            solution.grid.get(IVec2::new(4_i32, 0_i32)),
            Some(&Cell::Obstruction)
        );
    }

    #[test]
    fn test_visited_cell_count() {
        assert_eq!(solution().visited_cell_count(), 41_u64);
    }

    #[test]
    fn test_is_stuck_with_obstruction() {
        // The six loop-inducing obstructions from the worked example.
        for (x, y) in [
            (3_i32, 6_i32),
            (6_i32, 7_i32),
            (7_i32, 7_i32),
            (1_i32, 8_i32),
            (3_i32, 8_i32),
            (7_i32, 9_i32),
        ] {
            assert!(solution().is_stuck_with_obstruction(IVec2::new(x, y)));
        }

        assert!(!solution().is_stuck_with_obstruction(IVec2::new(0_i32, 0_i32)));
    }

    #[test]
    fn test_stuck_obstruction_count() {
        assert_eq!(solution().stuck_obstruction_count(), 6_u64);
    }
}
