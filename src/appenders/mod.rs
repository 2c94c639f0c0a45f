//! Appender implementations

pub mod console;
pub mod sink;
pub mod writer;

pub use console::ConsoleAppender;
pub use sink::{Sink, StderrSink, StdoutSink, WriterSink, SYSTEM_ERR, SYSTEM_OUT};
pub use writer::WriterAppender;

// Re-export traits for convenience
pub use crate::core::{Appender, OptionHandler};
