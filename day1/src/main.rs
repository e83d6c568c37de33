use anyhow::Result;
use day1::{parse_input, solve_puzzle_part1, solve_puzzle_part2, START_POSITION};

fn main() -> Result<()> {
    let path = puzzle_input::input_path("input/day1.txt");
    let text = puzzle_input::read_input(&path)?;
    let rotations = parse_input(&text)?;
    let part1 = solve_puzzle_part1(&rotations, START_POSITION);
    let part2 = solve_puzzle_part2(&rotations, START_POSITION);
    println!("Part 1: {part1}");
    println!("Part 2: {part2}");
    Ok(())
}
