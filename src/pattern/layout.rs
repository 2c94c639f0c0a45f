//! Pattern layout: a compiled, immutable converter sequence

use super::parser;
use super::registry::ConverterRegistry;
use crate::core::{diagnostics, LogEvent, Result};
use crate::pattern::converter::Converter;
use std::sync::Arc;

/// An ordered sequence of converters produced from a pattern string.
///
/// Compilation is a one-time cost; the resulting sequence is immutable and
/// reused for every render. Compile errors are reported through the
/// diagnostic channel and the offending segments render as literal
/// placeholders, so a partially broken pattern still produces output.
pub struct PatternLayout {
    pattern: String,
    converters: Vec<Arc<dyn Converter>>,
    handles_throwable: bool,
}

impl PatternLayout {
    /// Compile `pattern` against the process-wide converter registry.
    pub fn new(pattern: &str) -> Self {
        Self::with_registry(pattern, &ConverterRegistry::global().read())
    }

    /// Compile `pattern` against an explicit registry.
    pub fn with_registry(pattern: &str, registry: &ConverterRegistry) -> Self {
        let compiled = parser::compile(pattern, registry);
        for error in &compiled.errors {
            diagnostics::warn(&format!("in pattern \"{}\": {}", pattern, error));
        }
        let handles_throwable = compiled
            .converters
            .iter()
            .any(|converter| converter.handles_throwable());
        Self {
            pattern: pattern.to_string(),
            converters: compiled.converters,
            handles_throwable,
        }
    }

    /// Render `event` through the converter sequence.
    ///
    /// When the event carries throwable text and no converter in the sequence
    /// claims it, the text is auto-appended on its own line.
    pub fn format(&self, event: &LogEvent) -> Result<String> {
        let mut out = String::new();
        for converter in &self.converters {
            converter.format(event, &mut out)?;
        }
        if !self.handles_throwable {
            if let Some(throwable) = &event.throwable {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(throwable);
            }
        }
        Ok(out)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether any converter in the sequence claims throwable rendering.
    pub fn handles_throwable(&self) -> bool {
        self.handles_throwable
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
