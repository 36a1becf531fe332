//! Letter-to-number mapping for names.

use std::collections::HashMap;
use std::sync::OnceLock;

use soulchart_common::model::trail::DigitTrail;

use crate::reduce::reduce_trail;

/// Letters grouped by the value they contribute.
pub const LETTER_BUCKETS: [(u64, &str); 9] = [
    (1, "aijqy"),
    (2, "bkr"),
    (3, "gl"),
    (4, "dm"),
    (5, "hn"),
    (6, "suvw"),
    (7, "oxez"),
    (8, "cpf"),
    (9, "t"),
];

static LETTER_VALUES: OnceLock<HashMap<char, u64>> = OnceLock::new();

/// Reverse lookup of [`LETTER_BUCKETS`], built on first use.
fn letter_values() -> &'static HashMap<char, u64> {
    LETTER_VALUES.get_or_init(|| {
        LETTER_BUCKETS
            .iter()
            .flat_map(|&(value, letters)| letters.chars().map(move |c| (c, value)))
            .collect()
    })
}

/// Value of one character; anything outside the table counts as 0.
pub fn letter_value(c: char) -> u64 {
    letter_values().get(&c).copied().unwrap_or(0)
}

/// Sums the letter values of `name` (case-insensitive) and reduces the total.
pub fn name_to_number(name: &str) -> DigitTrail {
    let sum: u64 = name.to_lowercase().chars().map(letter_value).sum();
    reduce_trail(sum)
}
