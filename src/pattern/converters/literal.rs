//! Literal text converter

use crate::core::{LogEvent, Result};
use crate::pattern::converter::Converter;

/// Renders a fixed piece of text regardless of the event.
///
/// Also serves as the fallback the compiler substitutes for unknown or
/// malformed specifier tokens: the raw token text becomes the literal, so a
/// broken segment stays visible in output without disturbing the rest of the
/// pattern.
pub struct LiteralConverter {
    text: String,
}

impl LiteralConverter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Converter for LiteralConverter {
    fn format(&self, _event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(&self.text);
        Ok(())
    }

    fn name(&self) -> &str {
        "Literal"
    }
}
