//! Graduation cohort: a bare year or a `YYYY-YYYY` range.
//!
//! # Purpose
//! Older records store the cohort as a plain year number, newer ones as a
//! `"2019-2023"` range string. This type accepts both on the wire and always
//! serializes back as a string.
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cohort {
    Year(u16),
    Range { start: u16, end: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a year or a YYYY-YYYY range, got {input:?}")]
pub struct CohortParseError {
    pub input: String,
}

impl Cohort {
    /// First year of the cohort; the year itself for bare-year cohorts.
    pub fn start(&self) -> u16 {
        match self {
            Cohort::Year(year) => *year,
            Cohort::Range { start, .. } => *start,
        }
    }

    /// Last year of the cohort; the year itself for bare-year cohorts.
    pub fn end(&self) -> u16 {
        match self {
            Cohort::Year(year) => *year,
            Cohort::Range { end, .. } => *end,
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cohort::Year(year) => write!(f, "{year}"),
            Cohort::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

fn four_digits(part: &str) -> Option<u16> {
    if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Cohort {
    type Err = CohortParseError;

    // Format only: range ordering and year bounds are the form validator's
    // concern, not the parser's.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let err = || CohortParseError {
            input: input.to_string(),
        };
        if let Some((left, right)) = trimmed.split_once('-') {
            let start = four_digits(left).ok_or_else(err)?;
            let end = four_digits(right).ok_or_else(err)?;
            return Ok(Cohort::Range { start, end });
        }
        trimmed.parse().map(Cohort::Year).map_err(|_| err())
    }
}

impl Serialize for Cohort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct CohortVisitor;

impl Visitor<'_> for CohortVisitor {
    type Value = Cohort;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a year number or a YYYY-YYYY string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Cohort, E> {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Cohort, E> {
        u16::try_from(value)
            .map(Cohort::Year)
            .map_err(|_| de::Error::custom("year out of range"))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Cohort, E> {
        u16::try_from(value)
            .map(Cohort::Year)
            .map_err(|_| de::Error::custom("year out of range"))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Cohort, E> {
        if value.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&value) {
            Ok(Cohort::Year(value as u16))
        } else {
            Err(de::Error::custom("year out of range"))
        }
    }
}

impl<'de> Deserialize<'de> for Cohort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CohortVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_year_and_range() {
        assert_eq!("2023".parse::<Cohort>().unwrap(), Cohort::Year(2023));
        assert_eq!(
            "2019-2023".parse::<Cohort>().unwrap(),
            Cohort::Range {
                start: 2019,
                end: 2023
            }
        );
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!("19-2023".parse::<Cohort>().is_err());
        assert!("2019-23".parse::<Cohort>().is_err());
        assert!("2019/2023".parse::<Cohort>().is_err());
        assert!("abcd-efgh".parse::<Cohort>().is_err());
    }

    #[test]
    fn parser_does_not_enforce_ordering() {
        // Range ordering is a validation rule, not a format rule.
        assert_eq!(
            "2023-2019".parse::<Cohort>().unwrap(),
            Cohort::Range {
                start: 2023,
                end: 2019
            }
        );
    }

    #[test]
    fn wire_round_trip_is_a_string() {
        let cohort: Cohort = serde_json::from_str("\"2019-2023\"").unwrap();
        assert_eq!(serde_json::to_string(&cohort).unwrap(), "\"2019-2023\"");
    }

    #[test]
    fn accepts_legacy_year_numbers() {
        let cohort: Cohort = serde_json::from_str("2021").unwrap();
        assert_eq!(cohort, Cohort::Year(2021));
        assert_eq!(serde_json::to_string(&cohort).unwrap(), "\"2021\"");
    }
}
