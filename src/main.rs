use aoc2024::*;

fn main() {
    solutions().run(&Args::parse());
}
