//! Digit reduction: repeated digit sums down to a single digit.

use soulchart_common::error::ChartError;
use soulchart_common::model::trail::DigitTrail;
use tracing::warn;

/// Sum of the decimal digits of `n` (one step).
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// `n` followed by its successive digit sums, stopping once a sum repeats the last value.
pub fn reduce_trail(n: u64) -> DigitTrail {
    let mut values: Vec<u64> = vec![n];
    let mut current = n;
    loop {
        let next = digit_sum(current);
        if next == current {
            break;
        }
        values.push(next);
        current = next;
    }
    DigitTrail::new(values)
}

pub fn reduce_to_digit(n: u64) -> u64 {
    reduce_trail(n).reduced()
}

/// Trail of the digit sum of an arbitrarily long decimal string.
///
/// The string itself never becomes an integer, so inputs longer than `u64` are fine.
pub fn life_password(number: &str) -> Result<DigitTrail, ChartError> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        warn!("Rejected number input: {number:?}");
        return Err(ChartError::InvalidNumber(number.to_string()));
    }

    let sum: u64 = number.bytes().map(|b| u64::from(b - b'0')).sum();
    Ok(reduce_trail(sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_its_own_trail() {
        assert_eq!(reduce_trail(0).values(), &[0]);
        assert_eq!(reduce_to_digit(0), 0);
    }

    #[test]
    fn multi_step_reduction() {
        assert_eq!(reduce_trail(38).values(), &[38, 11, 2]);
        assert_eq!(reduce_to_digit(38), 2);
        assert_eq!(reduce_trail(19).to_string(), "19/10/1");
        assert_eq!(reduce_trail(999_999_999_999).values(), &[999_999_999_999, 108, 9]);
    }

    #[test]
    fn digit_sum_is_one_step() {
        assert_eq!(digit_sum(29), 11);
        assert_eq!(digit_sum(2024), 8);
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn life_password_sums_the_digits_first() {
        assert_eq!(life_password("38").unwrap().to_string(), "11/2");
        assert_eq!(life_password("0").unwrap().to_string(), "0");
        let long = "9".repeat(40);
        assert_eq!(life_password(&long).unwrap().to_string(), "360/9");
    }

    #[test]
    fn life_password_rejects_non_digits() {
        for input in ["", "12a", " 12", "-3", "１２"] {
            assert_eq!(
                life_password(input),
                Err(ChartError::InvalidNumber(input.to_string()))
            );
        }
    }

    proptest! {
        #[test]
        fn prop_trail_ends_on_a_fixed_point(n in any::<u64>()) {
            let trail = reduce_trail(n);
            prop_assert_eq!(trail.origin(), n);
            prop_assert!(trail.reduced() <= 9);
            let again = reduce_trail(trail.reduced());
            prop_assert_eq!(again.values(), &[trail.reduced()]);
        }

        #[test]
        fn prop_each_step_is_a_digit_sum(n in any::<u64>()) {
            let trail = reduce_trail(n);
            for pair in trail.values().windows(2) {
                prop_assert_eq!(pair[1], digit_sum(pair[0]));
            }
        }
    }
}
