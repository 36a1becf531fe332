use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Successive digit sums of a number, ending at the first repeated value.
///
/// The first element is the original number and the last one is always a single digit.
/// Rendered as the slash-joined sequence, e.g. `38/11/2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitTrail(Vec<u64>);

impl DigitTrail {
    /// Wraps an already reduced sequence. Callers build it through the reduction primitive.
    pub fn new(values: Vec<u64>) -> Self {
        debug_assert!(!values.is_empty(), "a digit trail is never empty");
        Self(values)
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    /// The original number the trail started from.
    pub fn origin(&self) -> u64 {
        self.0.first().copied().unwrap_or_default()
    }

    /// The single digit the trail settled on.
    pub fn reduced(&self) -> u64 {
        self.0.last().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Each element rendered in decimal, in trail order.
    pub fn layers(&self) -> Vec<String> {
        self.0.iter().map(u64::to_string).collect()
    }
}

impl fmt::Display for DigitTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: String = self.layers().join("/");
        f.write_str(&joined)
    }
}

impl FromStr for DigitTrail {
    type Err = String;

    /// Parses the slash-joined form. Only the shape is checked, not the digit-sum chain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<u64> = s
            .split('/')
            .map(|layer| {
                if layer.is_empty() || !layer.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("invalid trail layer '{layer}' in '{s}'"));
                }
                layer
                    .parse::<u64>()
                    .map_err(|e| format!("invalid trail layer '{layer}': {e}"))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(values))
    }
}

impl Serialize for DigitTrail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
