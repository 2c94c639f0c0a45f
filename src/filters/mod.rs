//! Event filters and the filter chain evaluator

pub mod chain;
pub mod level_match;
pub mod logger_match;
pub mod registry;

pub use chain::FilterChain;
pub use level_match::LevelMatchFilter;
pub use logger_match::LoggerMatchFilter;
pub use registry::{FilterFactory, FilterRegistry};

use crate::core::{LogEvent, OptionHandler};

/// Tri-state outcome of a filter decision.
///
/// `Neutral` means "no opinion; ask the next filter" and is distinct from both
/// admitting and rejecting the event, which is why this is a real three-way
/// enum rather than an optional boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Accept,
    Deny,
    Neutral,
}

/// A decision unit in an appender's filter chain.
///
/// Filters are configured through `set_option` during the configuring phase
/// and only read afterwards, so concurrent `decide` calls need no additional
/// synchronization.
pub trait Filter: OptionHandler + Send + Sync {
    fn decide(&self, event: &LogEvent) -> FilterDecision;
    fn name(&self) -> &str;
}
