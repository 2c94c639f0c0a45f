//! Core pipeline types and traits

pub mod appender;
pub mod diagnostics;
pub mod error;
pub mod log_event;
pub mod log_level;
pub mod timestamp;

pub use appender::{ActivationState, Appender, OptionHandler};
pub use diagnostics::DiagnosticSink;
pub use error::{PipelineError, Result};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use timestamp::TimestampFormat;
