//! Converter registry: conversion specifier name to factory mapping
//!
//! Converters are registered as plain constructor functions keyed by their
//! specifier name. The pattern compiler looks specifiers up here, so new
//! converter types become available to every subsequently compiled pattern as
//! soon as they are registered. Factories for stateless converters hand out
//! process-wide shared instances rather than fresh allocations.

use super::converter::Converter;
use super::converters::{
    DateConverter, FileConverter, FullLocationConverter, LevelConverter, LineConverter,
    LineSeparatorConverter, LoggerConverter, MessageConverter, ThreadConverter,
    ThrowableInformationConverter,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Constructor for a converter, given the option values parsed from the
/// specifier token.
pub type ConverterFactory = fn(&[String]) -> Arc<dyn Converter>;

pub struct ConverterRegistry {
    factories: HashMap<String, ConverterFactory>,
}

impl ConverterRegistry {
    /// An empty registry with no specifiers.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry populated with the built-in converter family, each under its
    /// short specifier and its long alias.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("m", MessageConverter::new_instance);
        registry.register("message", MessageConverter::new_instance);
        registry.register("p", LevelConverter::new_instance);
        registry.register("level", LevelConverter::new_instance);
        registry.register("c", LoggerConverter::new_instance);
        registry.register("logger", LoggerConverter::new_instance);
        registry.register("d", DateConverter::new_instance);
        registry.register("date", DateConverter::new_instance);
        registry.register("t", ThreadConverter::new_instance);
        registry.register("thread", ThreadConverter::new_instance);
        registry.register("l", FullLocationConverter::new_instance);
        registry.register("fullLocation", FullLocationConverter::new_instance);
        registry.register("F", FileConverter::new_instance);
        registry.register("file", FileConverter::new_instance);
        registry.register("L", LineConverter::new_instance);
        registry.register("line", LineConverter::new_instance);
        registry.register("n", LineSeparatorConverter::new_instance);
        registry.register("throwable", ThrowableInformationConverter::new_instance);
        registry
    }

    /// Register a factory under a specifier name, replacing any previous
    /// registration for that name.
    pub fn register(&mut self, name: impl Into<String>, factory: ConverterFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Instantiate the converter registered under `name`, or `None` when the
    /// specifier is unknown.
    pub fn new_instance(&self, name: &str, options: &[String]) -> Option<Arc<dyn Converter>> {
        self.factories.get(name).map(|factory| factory(options))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// The process-wide registry, initialized with the built-in family.
    pub fn global() -> &'static RwLock<ConverterRegistry> {
        static GLOBAL: OnceLock<RwLock<ConverterRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| RwLock::new(ConverterRegistry::with_defaults()))
    }

    /// Register a factory in the process-wide registry.
    pub fn register_global(name: impl Into<String>, factory: ConverterFactory) {
        Self::global().write().register(name, factory);
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel};
    use crate::pattern::converters::LiteralConverter;

    #[test]
    fn test_defaults_cover_short_and_long_names() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.contains("m"));
        assert!(registry.contains("message"));
        assert!(registry.contains("fullLocation"));
        assert!(registry.contains("throwable"));
        assert!(!registry.contains("q"));
    }

    #[test]
    fn test_unknown_name_yields_none() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.new_instance("q", &[]).is_none());
    }

    #[test]
    fn test_stateless_instances_are_shared() {
        let registry = ConverterRegistry::with_defaults();
        let a = registry.new_instance("m", &[]).unwrap();
        let b = registry.new_instance("message", &[]).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_custom_registration() {
        fn bang(_options: &[String]) -> Arc<dyn Converter> {
            Arc::new(LiteralConverter::new("!"))
        }

        let mut registry = ConverterRegistry::with_defaults();
        registry.register("bang", bang);

        let conv = registry.new_instance("bang", &[]).unwrap();
        let event = LogEvent::new("app", LogLevel::Info, "x");
        let mut out = String::new();
        conv.format(&event, &mut out).unwrap();
        assert_eq!(out, "!");
    }
}
