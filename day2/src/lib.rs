use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

/// Inclusive range of candidate IDs. Ranges may overlap and arrive unsorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRange {
    pub start: BigUint,
    pub end: BigUint,
}

impl IdRange {
    pub fn contains(&self, id: &BigUint) -> bool {
        self.start <= *id && *id <= self.end
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("range ends before it starts: {start}-{end}")]
pub struct InvalidRangeError {
    pub start: BigUint,
    pub end: BigUint,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("range token {0:?} is missing '-'")]
    MissingSeparator(String),
    #[error("invalid range bound {0:?}")]
    InvalidBound(String),
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
}

/// Parse the single comma-separated line of `start-end` range tokens.
/// Tokens are trimmed and empty tokens (a trailing comma) are skipped.
pub fn parse_input(puzzle: &str) -> Result<Vec<IdRange>, ParseError> {
    let mut ranges = Vec::new();
    for token in puzzle.trim().split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (start, end) = token
            .split_once('-')
            .ok_or_else(|| ParseError::MissingSeparator(token.to_string()))?;
        let start: BigUint = start
            .parse()
            .map_err(|_| ParseError::InvalidBound(start.to_string()))?;
        let end: BigUint = end
            .parse()
            .map_err(|_| ParseError::InvalidBound(end.to_string()))?;
        if end < start {
            return Err(InvalidRangeError { start, end }.into());
        }
        ranges.push(IdRange { start, end });
    }
    Ok(ranges)
}

/// Largest range end, the generation bound. Zero when there are no ranges.
pub fn highest_end(ranges: &[IdRange]) -> BigUint {
    ranges
        .iter()
        .map(|range| &range.end)
        .max()
        .cloned()
        .unwrap_or_else(BigUint::zero)
}

/// IDs formed by writing a base's digits exactly twice, in increasing order,
/// capped at `max_id`.
///
/// Appending the d digits of `base` to a numeral is `value * 10^d + base`,
/// which is exact-integer string concatenation. The loop keeps scanning to
/// the end of a digit-length class after the doubled value first overshoots
/// and stops at the first base with more digits than its predecessor.
pub fn doubled_ids(max_id: &BigUint) -> Vec<BigUint> {
    let mut ids = Vec::new();
    let mut base = BigUint::one();
    let mut prev_digits = 1; // str(0) also has one digit
    loop {
        let digits = base.to_string().len();
        let doubled = &base * BigUint::from(10u32).pow(digits as u32) + &base;
        if doubled <= *max_id {
            ids.push(doubled);
        } else if digits > prev_digits {
            return ids;
        }
        prev_digits = digits;
        base += 1u32;
    }
}

/// IDs formed by writing a base's digits two or more times, capped at
/// `max_id`, grouped by base. A base may reproduce a numeral another base
/// already produced (1111 repeats both "1" and "11"), so callers must
/// de-duplicate before summing.
pub fn repeated_ids(max_id: &BigUint) -> Vec<BigUint> {
    let mut ids = Vec::new();
    let mut base = BigUint::one();
    loop {
        let shift = BigUint::from(10u32).pow(base.to_string().len() as u32);
        let mut value = &base * &shift + &base;
        if value > *max_id {
            return ids;
        }
        while value <= *max_id {
            ids.push(value.clone());
            value = value * &shift + &base;
        }
        base += 1u32;
    }
}

/// Sum of the distinct candidates that fall inside any range, keyed by exact
/// value in a set before summing.
pub fn sum_invalid_ids<I>(ranges: &[IdRange], candidates: I) -> BigUint
where
    I: IntoIterator<Item = BigUint>,
{
    let mut found: HashSet<BigUint> = HashSet::new();
    for id in candidates {
        if ranges.iter().any(|range| range.contains(&id)) {
            found.insert(id);
        }
    }
    found.into_iter().sum()
}

pub fn solve_puzzle_part1(ranges: &[IdRange]) -> BigUint {
    sum_invalid_ids(ranges, doubled_ids(&highest_end(ranges)))
}

pub fn solve_puzzle_part2(ranges: &[IdRange]) -> BigUint {
    sum_invalid_ids(ranges, repeated_ids(&highest_end(ranges)))
}
