//! Filter based on logger name matching

use super::{Filter, FilterDecision};
use crate::core::{diagnostics, LogEvent, OptionHandler};

/// Admits or rejects events by exact logger name match.
///
/// Supported options | Supported values | Default value
/// ----------------- | ---------------- | -------------
/// `LoggerToMatch`   | any string       | `root`
/// `AcceptOnMatch`   | `True`, `False`  | `True`
///
/// A `LoggerToMatch` of `root` matches both the hierarchy's root logger and a
/// logger literally named `root`. When the event matches, the decision is
/// [`FilterDecision::Accept`] if `AcceptOnMatch` is true and
/// [`FilterDecision::Deny`] otherwise; when it does not match, or when
/// `LoggerToMatch` is unset, the filter stays neutral.
pub struct LoggerMatchFilter {
    logger_to_match: String,
    accept_on_match: bool,
}

impl LoggerMatchFilter {
    pub fn new() -> Self {
        Self {
            logger_to_match: "root".to_string(),
            accept_on_match: true,
        }
    }

    pub fn set_logger_to_match(&mut self, logger: impl Into<String>) {
        self.logger_to_match = logger.into();
    }

    pub fn logger_to_match(&self) -> &str {
        &self.logger_to_match
    }

    pub fn set_accept_on_match(&mut self, accept_on_match: bool) {
        self.accept_on_match = accept_on_match;
    }

    pub fn accept_on_match(&self) -> bool {
        self.accept_on_match
    }

    fn matches(&self, event: &LogEvent) -> bool {
        event.logger == self.logger_to_match
            || (self.logger_to_match == "root" && event.is_root_logger())
    }
}

impl Default for LoggerMatchFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionHandler for LoggerMatchFilter {
    fn set_option(&mut self, key: &str, value: &str) {
        if key.eq_ignore_ascii_case("LoggerToMatch") {
            self.logger_to_match = value.to_string();
        } else if key.eq_ignore_ascii_case("AcceptOnMatch") {
            match parse_bool(value) {
                Some(accept) => self.accept_on_match = accept,
                None => diagnostics::warn(&format!(
                    "[{}] is not a valid AcceptOnMatch value, expected True or False. \
                     Keeping previous value.",
                    value
                )),
            }
        }
    }

    fn activate_options(&mut self) {}
}

impl Filter for LoggerMatchFilter {
    fn decide(&self, event: &LogEvent) -> FilterDecision {
        if self.logger_to_match.is_empty() || !self.matches(event) {
            return FilterDecision::Neutral;
        }
        if self.accept_on_match {
            FilterDecision::Accept
        } else {
            FilterDecision::Deny
        }
    }

    fn name(&self) -> &str {
        "LoggerMatchFilter"
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.trim().eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.trim().eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    fn event_from(logger: &str) -> LogEvent {
        LogEvent::new(logger, LogLevel::Info, "x")
    }

    #[test]
    fn test_default_configuration() {
        let filter = LoggerMatchFilter::new();
        assert_eq!(filter.logger_to_match(), "root");
        assert!(filter.accept_on_match());
    }

    #[test]
    fn test_root_alias_matches_named_and_true_root() {
        let filter = LoggerMatchFilter::new();
        assert_eq!(filter.decide(&event_from("root")), FilterDecision::Accept);
        assert_eq!(filter.decide(&event_from("")), FilterDecision::Accept);
        assert_eq!(filter.decide(&event_from("child")), FilterDecision::Neutral);
    }

    #[test]
    fn test_exact_match_with_deny_polarity() {
        let mut filter = LoggerMatchFilter::new();
        filter.set_option("LoggerToMatch", "app.db");
        filter.set_option("AcceptOnMatch", "False");

        assert_eq!(filter.decide(&event_from("app.db")), FilterDecision::Deny);
        assert_eq!(filter.decide(&event_from("app")), FilterDecision::Neutral);
    }

    #[test]
    fn test_option_keys_are_case_insensitive() {
        let mut filter = LoggerMatchFilter::new();
        filter.set_option("loggertomatch", "svc");
        filter.set_option("ACCEPTONMATCH", "false");

        assert_eq!(filter.logger_to_match(), "svc");
        assert!(!filter.accept_on_match());
    }

    #[test]
    fn test_invalid_accept_on_match_keeps_previous() {
        let mut filter = LoggerMatchFilter::new();
        filter.set_option("AcceptOnMatch", "maybe");
        assert!(filter.accept_on_match());
    }

    #[test]
    fn test_unset_logger_is_neutral() {
        let mut filter = LoggerMatchFilter::new();
        filter.set_option("LoggerToMatch", "");
        assert_eq!(filter.decide(&event_from("")), FilterDecision::Neutral);
        assert_eq!(filter.decide(&event_from("root")), FilterDecision::Neutral);
    }
}
