//! Filter based on exact severity level matching

use super::{Filter, FilterDecision};
use crate::core::{diagnostics, LogEvent, LogLevel, OptionHandler};

/// Admits or rejects events whose level equals the configured one.
///
/// Supported options | Supported values       | Default value
/// ----------------- | ---------------------- | -------------
/// `LevelToMatch`    | `TRACE`..`FATAL`       | unset
/// `AcceptOnMatch`   | `True`, `False`        | `True`
///
/// With no `LevelToMatch` configured the filter is always neutral.
pub struct LevelMatchFilter {
    level_to_match: Option<LogLevel>,
    accept_on_match: bool,
}

impl LevelMatchFilter {
    pub fn new() -> Self {
        Self {
            level_to_match: None,
            accept_on_match: true,
        }
    }

    pub fn set_level_to_match(&mut self, level: LogLevel) {
        self.level_to_match = Some(level);
    }

    pub fn level_to_match(&self) -> Option<LogLevel> {
        self.level_to_match
    }

    pub fn set_accept_on_match(&mut self, accept_on_match: bool) {
        self.accept_on_match = accept_on_match;
    }
}

impl Default for LevelMatchFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionHandler for LevelMatchFilter {
    fn set_option(&mut self, key: &str, value: &str) {
        if key.eq_ignore_ascii_case("LevelToMatch") {
            match value.trim().parse::<LogLevel>() {
                Ok(level) => self.level_to_match = Some(level),
                Err(message) => diagnostics::warn(&format!(
                    "{}. Keeping previous LevelToMatch value.",
                    message
                )),
            }
        } else if key.eq_ignore_ascii_case("AcceptOnMatch") {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" => self.accept_on_match = true,
                "false" => self.accept_on_match = false,
                other => diagnostics::warn(&format!(
                    "[{}] is not a valid AcceptOnMatch value, expected True or False. \
                     Keeping previous value.",
                    other
                )),
            }
        }
    }

    fn activate_options(&mut self) {}
}

impl Filter for LevelMatchFilter {
    fn decide(&self, event: &LogEvent) -> FilterDecision {
        match self.level_to_match {
            Some(level) if level == event.level => {
                if self.accept_on_match {
                    FilterDecision::Accept
                } else {
                    FilterDecision::Deny
                }
            }
            _ => FilterDecision::Neutral,
        }
    }

    fn name(&self) -> &str {
        "LevelMatchFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_is_neutral() {
        let filter = LevelMatchFilter::new();
        let event = LogEvent::new("app", LogLevel::Error, "x");
        assert_eq!(filter.decide(&event), FilterDecision::Neutral);
    }

    #[test]
    fn test_exact_match_only() {
        let mut filter = LevelMatchFilter::new();
        filter.set_option("LevelToMatch", "warn");

        let warn = LogEvent::new("app", LogLevel::Warn, "x");
        let error = LogEvent::new("app", LogLevel::Error, "x");
        assert_eq!(filter.decide(&warn), FilterDecision::Accept);
        assert_eq!(filter.decide(&error), FilterDecision::Neutral);
    }

    #[test]
    fn test_deny_polarity() {
        let mut filter = LevelMatchFilter::new();
        filter.set_option("LevelToMatch", "DEBUG");
        filter.set_option("AcceptOnMatch", "False");

        let debug = LogEvent::new("app", LogLevel::Debug, "x");
        assert_eq!(filter.decide(&debug), FilterDecision::Deny);
    }

    #[test]
    fn test_invalid_level_keeps_previous() {
        let mut filter = LevelMatchFilter::new();
        filter.set_option("LevelToMatch", "INFO");
        filter.set_option("LevelToMatch", "loud");
        assert_eq!(filter.level_to_match(), Some(LogLevel::Info));
    }
}
