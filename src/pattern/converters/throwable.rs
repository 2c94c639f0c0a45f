//! Throwable-information converter

use crate::core::{LogEvent, Result};
use crate::pattern::converter::Converter;
use std::sync::{Arc, OnceLock};

/// Claims the event's throwable information without writing anything.
///
/// Exception rendering, if any, is delegated to the surrounding system; this
/// converter exists so a pattern can declare that throwable details are
/// handled, which stops the layout from auto-appending them through its
/// generic fallback.
///
/// Exactly two instances exist process-wide, selected by the factory: a short
/// report form when `options[0]` is the literal `short`, and the full form for
/// any other or absent option value.
pub struct ThrowableInformationConverter {
    short_report: bool,
}

impl ThrowableInformationConverter {
    pub fn new_instance(options: &[String]) -> Arc<dyn Converter> {
        // The option literal is matched case-sensitively.
        if options.first().map(String::as_str) == Some("short") {
            static SHORT: OnceLock<Arc<ThrowableInformationConverter>> = OnceLock::new();
            return SHORT
                .get_or_init(|| Arc::new(ThrowableInformationConverter { short_report: true }))
                .clone();
        }
        static FULL: OnceLock<Arc<ThrowableInformationConverter>> = OnceLock::new();
        FULL.get_or_init(|| Arc::new(ThrowableInformationConverter { short_report: false }))
            .clone()
    }

    pub fn is_short_report(&self) -> bool {
        self.short_report
    }
}

impl Converter for ThrowableInformationConverter {
    fn format(&self, _event: &LogEvent, _out: &mut String) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "Throwable"
    }

    /// This converter obviously handles throwables.
    fn handles_throwable(&self) -> bool {
        true
    }
}
