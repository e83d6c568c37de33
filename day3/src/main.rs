use day3::{parse_input, solve_puzzle_part1, solve_puzzle_part2};
use puzzle_input::{input_path, read_input};

fn main() -> anyhow::Result<()> {
    let path = input_path("input/day3.txt");
    let puzzle = read_input(&path)?;
    let lines = parse_input(&puzzle)?;
    let part1 = solve_puzzle_part1(&lines);
    let part2 = solve_puzzle_part2(&lines);
    println!("Part 1: {part1}");
    println!("Part 2: {part2}");
    Ok(())
}
