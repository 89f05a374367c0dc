use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::{SlackTs, TimestampError};

/// Accepted format of the `--before` argument, interpreted as UTC
pub const CUTOFF_FORMAT: &str = "%Y%m%d-%H%M";

/// The instant before which content is eligible for deletion
///
/// Both encodings are derived from one parsed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    pub ts: SlackTs,
    pub instant: DateTime<Utc>,
}

impl Cutoff {
    pub fn from_datetime(instant: DateTime<Utc>) -> Result<Self, TimestampError> {
        Ok(Self { ts: SlackTs::from_datetime(&instant)?, instant })
    }

    /// Parse a `YYYYMMDD-HHMM` argument
    ///
    /// # Examples
    ///
    /// ```
    /// use slack_sweeper::timestamps::Cutoff;
    ///
    /// let cutoff = Cutoff::parse("20200501-0000")?;
    /// assert_eq!(cutoff.ts.to_string(), "1588291200.000000");
    /// # Ok::<(), slack_sweeper::timestamps::TimestampError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let naive = NaiveDateTime::parse_from_str(text.trim(), CUTOFF_FORMAT)
            .map_err(|_| TimestampError::MalformedCutoff(text.to_string()))?;
        Self::from_datetime(naive.and_utc())
    }
}

impl FromStr for Cutoff {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
