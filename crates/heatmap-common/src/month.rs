//! Zero-indexed calendar months.

use std::fmt;

use crate::error::{HeatmapError, HeatmapResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, stored zero-indexed (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    /// Build from a zero-indexed month number.
    pub fn from_index(index: i64) -> HeatmapResult<Self> {
        if (0..12).contains(&index) {
            Ok(Month(index as u8))
        } else {
            Err(HeatmapError::InvalidMonth(index))
        }
    }

    /// Build from a one-indexed month number as found in the source data.
    pub fn from_number(number: i64) -> HeatmapResult<Self> {
        Self::from_index(number - 1)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Full English month name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Month::from_index(0).unwrap().name(), "January");
        assert_eq!(Month::from_index(11).unwrap().name(), "December");
        assert_eq!(Month::from_number(3).unwrap().to_string(), "March");
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(Month::from_index(12).is_err());
        assert!(Month::from_index(-1).is_err());
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
    }
}
