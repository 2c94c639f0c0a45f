//! Timestamp formatting utilities
//!
//! Provides standardized, configurable timestamp formats for rendered log
//! output. Supports ISO 8601, RFC 3339, Unix timestamps, and custom formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// Compatible with the formats commonly expected by log aggregation tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    ///
    /// This is the default format.
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use log_pipeline::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Resolve a named format from a pattern option string.
    ///
    /// Recognized names are matched case-insensitively; any other non-empty
    /// string is treated as a custom strftime format.
    pub fn from_option(option: &str) -> Self {
        match option.to_ascii_uppercase().as_str() {
            "" | "ISO8601" => TimestampFormat::Iso8601,
            "ISO8601_MICROS" => TimestampFormat::Iso8601Micros,
            "RFC3339" => TimestampFormat::Rfc3339,
            "UNIX" => TimestampFormat::Unix,
            "UNIX_MILLIS" => TimestampFormat::UnixMillis,
            "UNIX_MICROS" => TimestampFormat::UnixMicros,
            _ => TimestampFormat::Custom(option.to_string()),
        }
    }

    /// Whether this format can render a timestamp.
    ///
    /// Named formats always can; a custom strftime string is probed against a
    /// fixed timestamp, since chrono only surfaces bad specifiers at render
    /// time.
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(format_str) => {
                use std::fmt::Write as _;
                let mut probe = String::new();
                write!(probe, "{}", DateTime::<Utc>::UNIX_EPOCH.format(format_str)).is_ok()
            }
            _ => true,
        }
    }

    /// Format a `DateTime<Utc>` according to this format
    ///
    /// An invalid custom format string falls back to the ISO 8601 rendering
    /// instead of failing.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                use std::fmt::Write as _;
                let mut rendered = String::new();
                if write!(rendered, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
                }
                rendered
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso8601_format() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        assert_eq!(TimestampFormat::Iso8601.format(&dt), "2025-01-08T10:30:45.000Z");
    }

    #[test]
    fn test_unix_formats() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        assert_eq!(TimestampFormat::Unix.format(&dt), "1736332245");
        assert_eq!(TimestampFormat::UnixMillis.format(&dt), "1736332245000");
    }

    #[test]
    fn test_invalid_custom_format_falls_back() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let format = TimestampFormat::Custom("%q".to_string());
        assert!(!format.is_valid());
        assert_eq!(format.format(&dt), "2025-01-08T10:30:45.000Z");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(TimestampFormat::from_option(""), TimestampFormat::Iso8601);
        assert_eq!(TimestampFormat::from_option("rfc3339"), TimestampFormat::Rfc3339);
        assert_eq!(TimestampFormat::from_option("UNIX"), TimestampFormat::Unix);
        assert_eq!(
            TimestampFormat::from_option("%Y-%m-%d"),
            TimestampFormat::Custom("%Y-%m-%d".to_string())
        );
    }
}
