//! Filter registry: filter type name to constructor mapping
//!
//! Filters are instantiated by name from plain constructor functions, then
//! configured through `set_option` before being linked into a chain. The
//! registry is the external configuration loader's entry point for building
//! chains out of type names.

use super::{Filter, LevelMatchFilter, LoggerMatchFilter};
use std::collections::HashMap;

/// Constructor for an unconfigured filter.
pub type FilterFactory = fn() -> Box<dyn Filter>;

pub struct FilterRegistry {
    factories: HashMap<String, FilterFactory>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry populated with the built-in filter types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("LoggerMatchFilter", || Box::new(LoggerMatchFilter::new()));
        registry.register("LevelMatchFilter", || Box::new(LevelMatchFilter::new()));
        registry
    }

    /// Register a constructor under a filter type name, replacing any previous
    /// registration for that name.
    pub fn register(&mut self, name: impl Into<String>, factory: FilterFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Instantiate the filter registered under `name`, or `None` when the
    /// type name is unknown.
    pub fn new_instance(&self, name: &str) -> Option<Box<dyn Filter>> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel, OptionHandler};
    use crate::filters::FilterDecision;

    #[test]
    fn test_defaults() {
        let registry = FilterRegistry::with_defaults();
        assert!(registry.contains("LoggerMatchFilter"));
        assert!(registry.contains("LevelMatchFilter"));
        assert!(!registry.contains("RegexFilter"));
        assert!(registry.new_instance("RegexFilter").is_none());
    }

    #[test]
    fn test_instantiate_and_configure_by_name() {
        let registry = FilterRegistry::with_defaults();
        let mut filter = registry.new_instance("LoggerMatchFilter").unwrap();
        filter.set_option("LoggerToMatch", "app.net");
        filter.set_option("AcceptOnMatch", "False");
        filter.activate_options();

        let event = LogEvent::new("app.net", LogLevel::Info, "x");
        assert_eq!(filter.decide(&event), FilterDecision::Deny);
    }
}
