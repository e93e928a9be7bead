use super::tier::{MAX_LEVEL, tier_name};
use std::fmt;

/// A solved.ac difficulty level, guaranteed to index the tier catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    /// Accepts any integer the API may send, rejecting values outside 0..=31.
    pub fn parse(raw: i64) -> Result<Self, i64> {
        match u8::try_from(raw) {
            Ok(level) if level <= MAX_LEVEL => Ok(Self(level)),
            _ => Err(raw),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The tier label, e.g. "Gold III". This is the only source of a problem's difficulty.
    pub fn difficulty(self) -> &'static str {
        // In range by construction.
        tier_name(self.0).unwrap_or("Unknown")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
