//! Lenient scalar decoders.
//!
//! The feed is loose about scalar formatting: numbers arrive empty or
//! wrapped in doubled quotes, booleans use several spellings and dates
//! come in three layouts with `01/01/1900` standing in for "not set".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::ScalarError;

/// Integer that accepts empty and quoted values.
///
/// Empty input decodes to `0`. Doubled quotes (`""`) are stripped and
/// `0x`, `0o` and `0b` prefixes select the radix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SanitizedInt(pub i64);

impl SanitizedInt {
    /// Parses a raw feed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an integer in any accepted notation.
    pub fn parse(raw: &str) -> Result<Self, ScalarError> {
        let cleaned = raw.replace("\"\"", "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Ok(Self(0));
        }

        let invalid = || ScalarError::InvalidInt(raw.to_string());

        let (negative, unsigned) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned)),
        };

        let (radix, digits) = split_radix(unsigned);
        if digits.is_empty() || digits.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let magnitude = i64::from_str_radix(digits, radix).map_err(|_| invalid())?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Formats the value with thousands separators (`1250000` -> `1,250,000`).
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

fn split_radix(value: &str) -> (u32, &str) {
    let lower = value.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &value[2..]),
        Some("0o") => (8, &value[2..]),
        Some("0b") => (2, &value[2..]),
        _ => (10, value),
    }
}

impl fmt::Display for SanitizedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SanitizedInt {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for SanitizedInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Reads a plain integer field with [`SanitizedInt`] rules, so an empty
/// element decodes to zero.
pub(crate) fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    let value = SanitizedInt::deserialize(deserializer)?;
    T::try_from(value.get()).map_err(serde::de::Error::custom)
}

/// Boolean that accepts the spellings the feed uses.
///
/// Empty input decodes to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SanitizedBool(pub bool);

impl SanitizedBool {
    /// Parses a raw feed value.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `1/t/true` or `0/f/false`
    /// (in lower, upper or title case).
    pub fn parse(raw: &str) -> Result<Self, ScalarError> {
        match raw.trim() {
            "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(Self(false)),
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(Self(true)),
            _ => Err(ScalarError::InvalidBool(raw.to_string())),
        }
    }

    /// Returns the boolean value.
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for SanitizedBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Decimal number that accepts empty values.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SanitizedFloat(pub f64);

impl SanitizedFloat {
    /// Parses a raw feed value. Empty input decodes to `0.0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a decimal number.
    pub fn parse(raw: &str) -> Result<Self, ScalarError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self(0.0));
        }
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| ScalarError::InvalidFloat(raw.to_string()))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for SanitizedFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

const DATETIME_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_LAYOUTS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Date or date-time in any of the feed's layouts.
///
/// Empty, unparsable and sentinel values (anything before
/// `1970-01-01 00:00:01`) decode to "no date".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeedDate(Option<NaiveDateTime>);

impl FeedDate {
    /// A date that is not set.
    pub const NONE: Self = Self(None);

    /// Parses a raw feed value. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::NONE;
        }

        let parsed = DATETIME_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
            .or_else(|| {
                DATE_LAYOUTS.iter().find_map(|layout| {
                    NaiveDate::parse_from_str(trimmed, layout)
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
            });

        Self::from_value(parsed)
    }

    /// Wraps a value, dropping sentinel dates.
    #[must_use]
    pub fn from_value(value: Option<NaiveDateTime>) -> Self {
        Self(value.filter(|dt| *dt > NaiveDateTime::UNIX_EPOCH))
    }

    /// Returns the date-time, if set.
    #[must_use]
    pub const fn value(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// Returns the calendar date, if set.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.0.map(|dt| dt.date())
    }

    /// Returns true if a real date was supplied.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl<'de> Deserialize<'de> for FeedDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_int_empty_is_zero() {
        assert_eq!(SanitizedInt::parse("").unwrap(), SanitizedInt(0));
        assert_eq!(SanitizedInt::parse("  ").unwrap(), SanitizedInt(0));
    }

    #[test]
    fn test_int_strips_doubled_quotes() {
        assert_eq!(SanitizedInt::parse("\"\"42\"\"").unwrap(), SanitizedInt(42));
    }

    #[test]
    fn test_int_radix_prefixes() {
        assert_eq!(SanitizedInt::parse("0x1F").unwrap(), SanitizedInt(31));
        assert_eq!(SanitizedInt::parse("0o17").unwrap(), SanitizedInt(15));
        assert_eq!(SanitizedInt::parse("0b101").unwrap(), SanitizedInt(5));
        assert_eq!(SanitizedInt::parse("-12").unwrap(), SanitizedInt(-12));
        assert_eq!(SanitizedInt::parse("+7").unwrap(), SanitizedInt(7));
    }

    #[test]
    fn test_int_rejects_garbage() {
        assert!(SanitizedInt::parse("12a").is_err());
        assert!(SanitizedInt::parse("--3").is_err());
        assert!(SanitizedInt::parse("0x").is_err());
    }

    #[test]
    fn test_int_grouped() {
        assert_eq!(SanitizedInt(0).grouped(), "0");
        assert_eq!(SanitizedInt(999).grouped(), "999");
        assert_eq!(SanitizedInt(1000).grouped(), "1,000");
        assert_eq!(SanitizedInt(1_250_000).grouped(), "1,250,000");
        assert_eq!(SanitizedInt(-45_000).grouped(), "-45,000");
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["", "0", "f", "F", "false", "FALSE", "False"] {
            assert!(!SanitizedBool::parse(raw).unwrap().get(), "{raw:?}");
        }
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(SanitizedBool::parse(raw).unwrap().get(), "{raw:?}");
        }
        assert!(SanitizedBool::parse("yes").is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(SanitizedFloat::parse("").unwrap().get(), 0.0);
        assert!((SanitizedFloat::parse("-0.1276").unwrap().get() + 0.1276).abs() < 1e-9);
        assert!(SanitizedFloat::parse("north").is_err());
    }

    #[test]
    fn test_date_layouts() {
        let uk = FeedDate::parse("21/03/2017").date().unwrap();
        assert_eq!((uk.year(), uk.month(), uk.day()), (2017, 3, 21));

        let iso = FeedDate::parse("2016-05-31").date().unwrap();
        assert_eq!((iso.year(), iso.month(), iso.day()), (2016, 5, 31));

        let full = FeedDate::parse("2017-03-21T13:39:33").value().unwrap();
        assert_eq!((full.hour(), full.minute(), full.second()), (13, 39, 33));

        let uk_full = FeedDate::parse("21/03/2017 13:39:33").value().unwrap();
        assert_eq!(uk_full, full);
    }

    #[test]
    fn test_date_sentinels_and_garbage() {
        assert!(!FeedDate::parse("").is_set());
        assert!(!FeedDate::parse("01/01/1900").is_set());
        assert!(!FeedDate::parse("1970-01-01").is_set());
        assert!(!FeedDate::parse("soon").is_set());
        assert!(FeedDate::parse("1970-01-02").is_set());
    }
}
