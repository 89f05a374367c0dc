use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for Unix creation times sent as integer seconds or numeric strings
pub fn deserialize_unix_seconds<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let seconds = match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?,
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::custom(format!("invalid timestamp string: {}", e)))?,
        _ => return Err(Error::custom("timestamp must be a number or string")),
    };

    DateTime::from_timestamp(seconds, 0).ok_or_else(|| Error::custom("timestamp out of range"))
}
