use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimestampError;

const FRACTION_DIGITS: usize = 6;
const MAX_MICROS: u32 = 999_999;

/// Message timestamp as issued by the platform, e.g. `"1588291200.000100"`.
///
/// The value is stored decoded as whole seconds plus microseconds and always re-encoded
/// as `"<seconds>.<6-digit zero-padded microseconds>"`. Ordering is numeric, which agrees
/// with lexicographic ordering of the encoded strings whenever the seconds fields have
/// the same width (every timestamp between 2001 and 2286).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlackTs {
    seconds: i64,
    micros: u32,
}

impl SlackTs {
    /// Build a timestamp from its decoded parts
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::MalformedTimestamp`] for negative seconds or a
    /// microsecond part above 999999.
    pub fn new(seconds: i64, micros: u32) -> Result<Self, TimestampError> {
        if seconds < 0 || micros > MAX_MICROS {
            return Err(TimestampError::MalformedTimestamp(format!("{}.{}", seconds, micros)));
        }
        Ok(Self { seconds, micros })
    }

    /// Parse the platform text encoding
    ///
    /// The text is split on the decimal point; both halves must be plain unsigned
    /// integers. The fraction is read as a decimal fraction of a second, so `"1.5"` is
    /// one and a half seconds. Fractions finer than a microsecond are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use slack_sweeper::timestamps::SlackTs;
    ///
    /// let ts = SlackTs::parse("1588291200.000100")?;
    /// assert_eq!(ts.seconds(), 1588291200);
    /// assert_eq!(ts.micros(), 100);
    /// assert_eq!(ts.to_string(), "1588291200.000100");
    /// # Ok::<(), slack_sweeper::timestamps::TimestampError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let malformed = || TimestampError::MalformedTimestamp(text.to_string());

        let (whole, fraction) = text.split_once('.').ok_or_else(malformed)?;
        if !is_unsigned_integer(whole)
            || !is_unsigned_integer(fraction)
            || fraction.len() > FRACTION_DIGITS
        {
            return Err(malformed());
        }

        let seconds: i64 = whole.parse().map_err(|_| malformed())?;
        let scale = 10u32.pow((FRACTION_DIGITS - fraction.len()) as u32);
        let micros = fraction.parse::<u32>().map_err(|_| malformed())? * scale;

        Self::new(seconds, micros)
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn micros(&self) -> u32 {
        self.micros
    }

    /// Convert to a point in time, exact to the microsecond
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimestampError> {
        DateTime::from_timestamp(self.seconds, self.micros * 1_000)
            .ok_or_else(|| TimestampError::OutOfRange(self.to_string()))
    }

    /// Encode a point in time; sub-microsecond precision is truncated
    pub fn from_datetime(instant: &DateTime<Utc>) -> Result<Self, TimestampError> {
        if instant.timestamp() < 0 {
            return Err(TimestampError::OutOfRange(instant.to_rfc3339()));
        }
        Self::new(instant.timestamp(), instant.timestamp_subsec_micros().min(MAX_MICROS))
    }

    /// Numeric comparison of two timestamps
    pub fn compare(&self, other: &SlackTs) -> Ordering {
        self.cmp(other)
    }
}

fn is_unsigned_integer(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for SlackTs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds, self.micros)
    }
}

impl FromStr for SlackTs {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SlackTs {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SlackTs> for String {
    fn from(ts: SlackTs) -> Self {
        ts.to_string()
    }
}
