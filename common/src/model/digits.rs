use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Occurrence counts of the decimal digits found in a set of numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitMultiset {
    counts: [u32; 10],
}

impl DigitMultiset {
    /// Pools every decimal digit of every number.
    pub fn from_numbers<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut multiset = Self::default();
        for number in numbers {
            multiset.add_number(number);
        }
        multiset
    }

    fn add_number(&mut self, number: u64) {
        for digit in number.to_string().bytes() {
            self.counts[usize::from(digit - b'0')] += 1;
        }
    }

    pub fn count(&self, digit: u8) -> u32 {
        self.counts.get(usize::from(digit)).copied().unwrap_or(0)
    }

    /// Looks up a digit character.
    pub fn contains_digit(&self, c: char) -> bool {
        c.to_digit(10)
            .is_some_and(|d| self.counts[d as usize] > 0)
    }

    /// Looks up a whole string as one key.
    ///
    /// Keys are single digit characters, so anything longer never matches.
    pub fn contains_key(&self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.contains_digit(c),
            _ => false,
        }
    }

    /// True when some digit occurs more than twice.
    pub fn more_than_two(&self) -> bool {
        self.counts.iter().any(|&count| count > 2)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Present digits with their counts, in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0u8..10)
            .map(|d| (d, self.counts[usize::from(d)]))
            .filter(|&(_, count)| count > 0)
    }
}

impl Serialize for DigitMultiset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (digit, count) in self.iter() {
            map.serialize_entry(&digit.to_string(), &count)?;
        }
        map.end()
    }
}
