//! Lookup keys with their sentinel forms

use crate::error::{BeeError, Result};
use crate::puzzle::{DAY_FORMAT, parse_day};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A puzzle day, or the newest day in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PuzzleKey {
    #[default]
    Latest,
    Day(NaiveDate),
}

impl FromStr for PuzzleKey {
    type Err = BeeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("latest") {
            return Ok(Self::Latest);
        }
        parse_day(s)
            .map(Self::Day)
            .map_err(|_| BeeError::unknown_key("puzzle", s))
    }
}

impl fmt::Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Day(day) => write!(f, "{}", day.format(DAY_FORMAT)),
        }
    }
}

/// A session id, or whichever session the store marks as primary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionKey {
    #[default]
    Primary,
    Id(Uuid),
}

impl FromStr for SessionKey {
    type Err = BeeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("primary") {
            return Ok(Self::Primary);
        }
        Uuid::parse_str(s.trim())
            .map(Self::Id)
            .map_err(|_| BeeError::unknown_key("session", s))
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_key_parse() {
        assert_eq!("latest".parse::<PuzzleKey>().unwrap(), PuzzleKey::Latest);
        assert_eq!("LATEST".parse::<PuzzleKey>().unwrap(), PuzzleKey::Latest);
        assert_eq!(
            "2022-01-16".parse::<PuzzleKey>().unwrap(),
            PuzzleKey::Day(NaiveDate::from_ymd_opt(2022, 1, 16).unwrap())
        );
        assert!(matches!(
            "yesterday".parse::<PuzzleKey>(),
            Err(BeeError::UnknownStoreKey { kind: "puzzle", .. })
        ));
    }

    #[test]
    fn session_key_parse() {
        assert_eq!("primary".parse::<SessionKey>().unwrap(), SessionKey::Primary);
        let id = Uuid::new_v4();
        assert_eq!(id.to_string().parse::<SessionKey>().unwrap(), SessionKey::Id(id));
        assert!("not-a-uuid".parse::<SessionKey>().is_err());
    }

    #[test]
    fn keys_display() {
        assert_eq!(PuzzleKey::Latest.to_string(), "latest");
        assert_eq!("2022-01-16".parse::<PuzzleKey>().unwrap().to_string(), "2022-01-16");
        assert_eq!(SessionKey::Primary.to_string(), "primary");
    }
}
