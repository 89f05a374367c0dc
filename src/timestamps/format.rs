use chrono::{DateTime, SecondsFormat, Utc};

use super::SlackTs;

/// Format an instant for reports: RFC3339 in UTC, whole seconds
pub fn pretty_date(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a message timestamp for reports, falling back to the raw encoding
pub fn pretty_ts(ts: &SlackTs) -> String {
    match ts.to_datetime() {
        Ok(instant) => pretty_date(&instant),
        Err(_) => ts.to_string(),
    }
}
