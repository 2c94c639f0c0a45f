//! Converter trait for pattern layout fragments

use crate::core::{LogEvent, Result};

/// A unit that renders one piece of a logging event as text.
///
/// Converters are created once at pattern-compile time and reused for every
/// subsequent render. They hold only configuration bound at construction and
/// never mutate it during `format`, which makes shared instances safe for
/// concurrent use from any number of threads.
pub trait Converter: Send + Sync {
    /// Append the rendered fragment for `event` to `out`.
    ///
    /// Must not fail for well-formed events; mutates only the buffer.
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()>;

    /// Human-readable converter name, used in diagnostics.
    fn name(&self) -> &str;

    /// Whether this converter takes responsibility for rendering the event's
    /// throwable information. When any converter in a layout returns true, the
    /// layout suppresses its generic throwable fallback.
    fn handles_throwable(&self) -> bool {
        false
    }
}
