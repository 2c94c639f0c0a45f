//! Converters for captured source location information

use crate::core::{LogEvent, Result};
use crate::pattern::converter::Converter;
use std::sync::{Arc, OnceLock};

/// Renders `<fileName>(<lineNumber>)`.
///
/// The file name is taken verbatim and may be empty when the event carries no
/// captured location; the line number is a plain decimal, `0` when unknown.
pub struct FullLocationConverter;

impl FullLocationConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<FullLocationConverter>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Arc::new(FullLocationConverter))
            .clone()
    }
}

impl Converter for FullLocationConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        if let Some(file) = &event.file {
            out.push_str(file);
        }
        out.push('(');
        out.push_str(&event.line.unwrap_or(0).to_string());
        out.push(')');
        Ok(())
    }

    fn name(&self) -> &str {
        "Full Location"
    }
}

/// Renders the source file name alone, empty when unknown.
pub struct FileConverter;

impl FileConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<FileConverter>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(FileConverter)).clone()
    }
}

impl Converter for FileConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        if let Some(file) = &event.file {
            out.push_str(file);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "File"
    }
}

/// Renders the source line number alone, `0` when unknown.
pub struct LineConverter;

impl LineConverter {
    pub fn new_instance(_options: &[String]) -> Arc<dyn Converter> {
        static INSTANCE: OnceLock<Arc<LineConverter>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(LineConverter)).clone()
    }
}

impl Converter for LineConverter {
    fn format(&self, event: &LogEvent, out: &mut String) -> Result<()> {
        out.push_str(&event.line.unwrap_or(0).to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "Line"
    }
}
