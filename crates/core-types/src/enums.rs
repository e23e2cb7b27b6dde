use serde::{Deserialize, Serialize};
use std::fmt;

/// The meteorological season a title was released in.
///
/// Variants are declared in calendar order, so sorting by `Season` puts
/// Winter first and Fall last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Maps a calendar month (1-12) to its season.
    ///
    /// December, January and February are Winter; March to May are Spring;
    /// June to August are Summer. Everything else is Fall, which matches the
    /// original dashboard's fall-through for out-of-range months.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a title grossed more than the mean of the full, unfiltered corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuccessLevel {
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

impl SuccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessLevel::AboveAverage => "Above Average",
            SuccessLevel::BelowAverage => "Below Average",
        }
    }
}

impl fmt::Display for SuccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
