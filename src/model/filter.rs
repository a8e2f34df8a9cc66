use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Earliest year in the supported span.
pub const YEAR_MIN: i32 = 2016;
/// Latest year in the supported span.
pub const YEAR_MAX: i32 = 2025;

/// Exam sitting filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    #[default]
    All,
    March,
    Summer,
    Winter,
}

impl Session {
    /// The single-letter token used in paths, or None for `All`.
    pub fn letter(self) -> Option<char> {
        match self {
            Session::All => None,
            Session::March => Some('m'),
            Session::Summer => Some('s'),
            Session::Winter => Some('w'),
        }
    }

    /// Map a path token letter back to a session (case-insensitive).
    pub fn from_letter(c: char) -> Option<Session> {
        match c.to_ascii_lowercase() {
            'm' => Some(Session::March),
            's' => Some(Session::Summer),
            'w' => Some(Session::Winter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Session::All => "All",
            Session::March => "March",
            Session::Summer => "Summer",
            Session::Winter => "Winter",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Session {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Session::All),
            "m" | "march" => Ok(Session::March),
            "s" | "summer" => Ok(Session::Summer),
            "w" | "winter" => Ok(Session::Winter),
            other => Err(format!(
                "unknown session '{}' (expected all, m/march, s/summer, w/winter)",
                other
            )),
        }
    }
}

/// Session and year-range filter applied to files in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub session: Session,
    pub year_min: i32,
    pub year_max: i32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            session: Session::All,
            year_min: YEAR_MIN,
            year_max: YEAR_MAX,
        }
    }
}

impl FilterState {
    /// True for the identity filter, which the view engine skips entirely.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        (self.year_min..=self.year_max).contains(&year)
    }
}
