use puzzle_input::non_blank_lines;
use thiserror::Error;

/// Number of positions on the dial, labelled 0-99.
pub const DIAL_POSITIONS: i64 = 100;
/// The dial points at 50 before the first rotation.
pub const START_POSITION: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Rotation {
    Left(#[cfg_attr(test, proptest(strategy = "0u32..350"))] u32),
    Right(#[cfg_attr(test, proptest(strategy = "0u32..350"))] u32),
}

impl Rotation {
    fn delta(self) -> i64 {
        match self {
            Rotation::Left(clicks) => -i64::from(clicks),
            Rotation::Right(clicks) => i64::from(clicks),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '(L|R)<clicks>', got {0:?}")]
    UnknownDirection(String),
    #[error("invalid click count in {0:?}")]
    InvalidClicks(String),
}

pub fn parse_input(puzzle: &str) -> Result<Vec<Rotation>, ParseError> {
    non_blank_lines(puzzle)
        .map(|line| {
            let mut chars = line.chars();
            let direction = chars.next();
            let clicks = chars
                .as_str()
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidClicks(line.to_string()));
            match direction {
                Some('L') => Ok(Rotation::Left(clicks?)),
                Some('R') => Ok(Rotation::Right(clicks?)),
                _ => Err(ParseError::UnknownDirection(line.to_string())),
            }
        })
        .collect()
}

/// Count the rotations after which the dial rests exactly on 0.
pub fn solve_puzzle_part1(rotations: &[Rotation], start: i64) -> u32 {
    let mut position = start;
    let mut count = 0;
    for rotation in rotations {
        // rem_euclid, not `%`: left rotations drive the position negative
        position = (position + rotation.delta()).rem_euclid(DIAL_POSITIONS);
        if position == 0 {
            count += 1;
        }
    }
    count
}

/// Count every click that lands on 0, i.e. every multiple of 100 the dial
/// crosses or stops on. The position runs along the unbounded number line and
/// each rotation contributes a difference of floor divisions instead of being
/// stepped click by click.
pub fn solve_puzzle_part2(rotations: &[Rotation], start: i64) -> u64 {
    let mut position = start;
    let mut count = 0;
    for rotation in rotations {
        let crossings = match *rotation {
            Rotation::Right(clicks) => {
                let clicks = i64::from(clicks);
                (position + clicks).div_euclid(DIAL_POSITIONS)
                    - position.div_euclid(DIAL_POSITIONS)
            }
            Rotation::Left(clicks) => {
                let clicks = i64::from(clicks);
                (position - 1).div_euclid(DIAL_POSITIONS)
                    - (position - clicks - 1).div_euclid(DIAL_POSITIONS)
            }
        };
        // counts multiples of 100 inside the swept interval, never negative
        count += crossings as u64;
        position += rotation.delta();
    }
    count
}
