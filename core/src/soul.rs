//! # Soul Degree
//!
//! Scores a stage label against the digits of the birth date. The first layer of the
//! label earns one point per present digit; the deeper layers can then lift the score.
//!
//! Single-layer labels and the second layer of two-layer labels are looked up as a whole
//! key, so a multi-digit layer never matches there. Only the three-layer branch checks
//! layers digit by digit.

use soulchart_common::model::digits::DigitMultiset;
use soulchart_common::model::stage::{SoulDegree, StageLabel};

const LOWEST: u8 = 1;
const HIGHEST: u8 = 7;
/// What [`HIGHEST`] becomes when some birth digit occurs more than twice.
const CROWDED_HIGHEST: u8 = 6;

/// 1 or 2 gain 3, 3 jumps to the top, anything higher stays.
fn lift(value: u8) -> u8 {
    match value {
        1 | 2 => value + 3,
        3 => HIGHEST,
        _ => value,
    }
}

fn first_layer_score(layer: &str, digits: &DigitMultiset) -> u8 {
    let present = layer.chars().filter(|&c| digits.contains_digit(c)).count();
    LOWEST.saturating_add(u8::try_from(present).unwrap_or(u8::MAX))
}

/// Degree of one label before the crowded-digits downgrade.
pub fn soul_degree(label: &StageLabel, digits: &DigitMultiset) -> SoulDegree {
    let layers = label.layers();

    let value = match layers.as_slice() {
        [] => LOWEST,
        [only] => {
            if digits.contains_key(only) {
                HIGHEST
            } else {
                LOWEST
            }
        }
        [first, second] => {
            let score = first_layer_score(first, digits);
            if digits.contains_key(second) {
                lift(score)
            } else {
                score
            }
        }
        [first, second, third, ..] => {
            let score = first_layer_score(first, digits);
            let all_present = second
                .chars()
                .chain(third.chars())
                .all(|c| digits.contains_digit(c));
            if all_present { lift(score) } else { score }
        }
    };

    SoulDegree::clamped(value)
}

/// Degrees for all five stages of a chart.
///
/// A top degree drops one step when `more_than_two` is set.
pub fn soul_degrees(
    labels: &[StageLabel; 5],
    digits: &DigitMultiset,
    more_than_two: bool,
) -> [SoulDegree; 5] {
    labels.each_ref().map(|label| {
        let found = soul_degree(label, digits);
        if more_than_two && found.value() == HIGHEST {
            SoulDegree::clamped(CROWDED_HIGHEST)
        } else {
            found
        }
    })
}
