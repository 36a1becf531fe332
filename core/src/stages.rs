//! Signed stage accumulator: cumulative prefix sums of five inputs, one label per prefix.

use soulchart_common::model::chart::SumData;
use soulchart_common::model::stage::{Sign, StageLabel};
use soulchart_common::model::time::ChartTime;

use crate::reduce::{digit_sum, reduce_trail};

/// `[year, month, day, hour, minute]`: reduced date digits plus one-step clock digit sums.
pub fn stage_inputs(time: &ChartTime, sums: &SumData) -> [u64; 5] {
    [
        sums.year,
        sums.month,
        sums.day,
        digit_sum(u64::from(time.hour)),
        digit_sum(u64::from(time.minute)),
    ]
}

/// Label `i` is `sign` followed by the trail of `inputs[0] + ... + inputs[i]`.
pub fn stage_labels(sign: Sign, inputs: [u64; 5]) -> [StageLabel; 5] {
    let mut running = 0;
    inputs.map(|input| {
        running += input;
        StageLabel::new(sign, reduce_trail(running))
    })
}
