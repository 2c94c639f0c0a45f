//! # Log Pipeline
//!
//! A pluggable log-event formatting and routing pipeline: events are filtered
//! by a chain of admit/deny decisions, rendered into text by a composable set
//! of pattern converters, and written to a configurable output target.
//!
//! ## Features
//!
//! - **Pattern Layouts**: `%`-specifier pattern strings compiled once into
//!   reusable converter sequences
//! - **Pluggable**: Converters and filters are registered by name and
//!   instantiated through factories
//! - **Filter Chains**: Tri-state accept/deny/neutral decisions with
//!   first-decisive-result short-circuit
//! - **Two-Phase Configuration**: String options applied with `set_option`,
//!   resolved into bound resources by `activate_options`
//! - **Never Fails the Caller**: Configuration, pattern, render, and sink
//!   problems degrade gracefully and report through a diagnostic channel

pub mod appenders;
pub mod core;
pub mod filters;
pub mod pattern;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, Sink, StderrSink, StdoutSink, WriterAppender, WriterSink,
    };
    pub use crate::core::{
        ActivationState, Appender, DiagnosticSink, LogEvent, LogLevel, OptionHandler,
        PipelineError, Result, TimestampFormat,
    };
    pub use crate::filters::{
        Filter, FilterChain, FilterDecision, FilterRegistry, LevelMatchFilter, LoggerMatchFilter,
    };
    pub use crate::pattern::{Converter, ConverterRegistry, PatternLayout};
}

pub use appenders::{ConsoleAppender, WriterAppender};
pub use core::{
    ActivationState, Appender, DiagnosticSink, LogEvent, LogLevel, OptionHandler, PipelineError,
    Result, TimestampFormat,
};
pub use filters::{
    Filter, FilterChain, FilterDecision, FilterRegistry, LevelMatchFilter, LoggerMatchFilter,
};
pub use pattern::{Converter, ConverterRegistry, PatternLayout};
