use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

pub const PART1_DIGITS: usize = 2;
pub const PART2_DIGITS: usize = 12;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {found:?} is not a decimal digit")]
pub struct InvalidDigitError {
    pub line: usize,
    pub found: char,
}

/// Parse one digit string per line into digit values, skipping blank lines.
/// Any non-digit character fails the whole parse; `line` in the error is
/// 1-based and counts blank lines too.
pub fn parse_input(puzzle: &str) -> Result<Vec<Vec<u8>>, InvalidDigitError> {
    let mut lines = Vec::new();
    for (number, line) in puzzle.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut digits = Vec::with_capacity(line.len());
        for ch in line.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or(InvalidDigitError { line: number + 1, found: ch })?;
            digits.push(digit as u8);
        }
        lines.push(digits);
    }
    Ok(lines)
}

/// Largest `k`-digit number reachable by deleting digits without reordering,
/// as the chosen digits.
///
/// Greedy over a shrinking window: pick `i` may sit anywhere in
/// `[lo, len - (k - i)]`, leaving enough digits for the remaining picks.
/// A line shorter than `k` yields `k` zero digits instead of failing;
/// callers that need a real selection must length-check first.
pub fn select_max_subsequence(digits: &[u8], k: usize) -> Vec<u8> {
    if digits.len() < k {
        return vec![0; k];
    }
    let mut picks = Vec::with_capacity(k);
    let mut lo = 0;
    for i in 0..k {
        let hi = digits.len() - (k - i);
        let mut best = lo;
        for index in lo + 1..=hi {
            // strict comparison keeps the leftmost of equal digits
            if digits[index] > digits[best] {
                best = index;
            }
        }
        picks.push(digits[best]);
        lo = best + 1;
    }
    picks
}

/// The numeral a digit sequence spells, most significant digit first.
pub fn selection_value(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |value, &digit| value * 10u32 + u32::from(digit))
}

pub fn sum_of_selections(lines: &[Vec<u8>], k: usize) -> BigUint {
    lines
        .iter()
        .map(|digits| selection_value(&select_max_subsequence(digits, k)))
        .sum()
}

pub fn solve_puzzle_part1(lines: &[Vec<u8>]) -> BigUint {
    sum_of_selections(lines, PART1_DIGITS)
}

pub fn solve_puzzle_part2(lines: &[Vec<u8>]) -> BigUint {
    sum_of_selections(lines, PART2_DIGITS)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    fn line(text: &str) -> Vec<u8> {
        parse_input(text).unwrap().remove(0)
    }

    fn selected(text: &str, k: usize) -> String {
        select_max_subsequence(&line(text), k)
            .iter()
            .map(|&digit| char::from(b'0' + digit))
            .collect()
    }

    #[test]
    fn parses_digit_lines_and_skips_blanks() {
        let lines = parse_input("12\n\n 305 \n").unwrap();
        assert_eq!(lines, vec![vec![1, 2], vec![3, 0, 5]]);
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        let err = parse_input("12a4").unwrap_err();
        assert_eq!(err, InvalidDigitError { line: 1, found: 'a' });
    }

    #[test]
    fn error_line_numbers_count_blank_lines() {
        let err = parse_input("123\n\n9x9").unwrap_err();
        assert_eq!(err, InvalidDigitError { line: 3, found: 'x' });
    }

    #[test]
    fn keeps_the_whole_line_when_k_is_its_length() {
        assert_eq!(selected("1234", 4), "1234");
    }

    #[test]
    fn late_large_digits_beat_early_small_ones() {
        assert_eq!(selected("1234", 2), "34");
    }

    #[test]
    fn equal_digits_resolve_to_the_leftmost() {
        // picking the second 9 first would leave only "3" for the next pick
        assert_eq!(selected("9393", 2), "99");
    }

    #[test]
    fn a_later_nine_outranks_a_nearer_eight() {
        assert_eq!(selected("92873965", 3), "996");
    }

    #[test]
    fn short_lines_zero_pad() {
        assert_eq!(selected("12", 5), "00000");
    }

    #[test]
    fn selecting_zero_digits_yields_nothing() {
        assert!(select_max_subsequence(&line("123"), 0).is_empty());
    }

    #[test]
    fn digit_values_spell_the_numeral() {
        assert_eq!(selection_value(&[0, 4, 2]), BigUint::from(42u32));
        assert_eq!(selection_value(&[]), BigUint::zero());
    }

    #[test]
    fn example_sum_of_pairs() {
        let lines = parse_input(EXAMPLE).unwrap();
        assert_eq!(solve_puzzle_part1(&lines), BigUint::from(357u32));
    }

    #[test]
    fn example_sum_of_twelve_digit_selections() {
        let lines = parse_input(EXAMPLE).unwrap();
        assert_eq!(
            solve_puzzle_part2(&lines),
            BigUint::from(3_121_910_778_619u64)
        );
    }

    #[test]
    fn example_twelve_digit_selections_per_line() {
        let picks: Vec<String> = EXAMPLE
            .lines()
            .map(|text| selected(text, 12))
            .collect();
        assert_eq!(
            picks,
            vec![
                "987654321111",
                "811111111119",
                "434234234278",
                "888911112111",
            ]
        );
    }

    #[test]
    fn sums_exceed_native_integer_range() {
        let lines = parse_input("99999999999999999999\n99999999999999999999").unwrap();
        let total = sum_of_selections(&lines, 20);
        assert_eq!(total.to_string(), "199999999999999999998");
    }

    proptest! {
        #[test]
        fn greedy_selection_is_the_maximum_subsequence(
            digits in prop::collection::vec(0u8..10, 0..12),
            k in 0usize..6,
        ) {
            let picked = select_max_subsequence(&digits, k);
            prop_assert_eq!(picked.len(), k);
            if k > digits.len() {
                prop_assert_eq!(picked, vec![0u8; k]);
            } else {
                // candidates share length k, so lexicographic max is numeric max
                let best = (0u32..1 << digits.len())
                    .filter(|mask| mask.count_ones() as usize == k)
                    .map(|mask| {
                        (0..digits.len())
                            .filter(|index| (mask >> index) & 1 == 1)
                            .map(|index| digits[index])
                            .collect::<Vec<u8>>()
                    })
                    .max()
                    .unwrap_or_default();
                prop_assert_eq!(picked, best);
            }
        }
    }
}
