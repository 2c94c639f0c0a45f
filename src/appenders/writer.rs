//! Generic sink-backed appender

use super::sink::Sink;
use crate::core::{diagnostics, ActivationState, Appender, LogEvent, OptionHandler, Result};
use crate::filters::{Filter, FilterChain, FilterDecision};
use crate::pattern::PatternLayout;

/// Appender core that routes events through a filter chain, renders admitted
/// ones through a pattern layout, and writes the result to a bound sink.
///
/// Carries the two-phase configuration lifecycle: options accumulate through
/// `set_option`, and `activate_options` resolves them into a ready-to-emit
/// binding. Activation is refused while no layout or no sink is present, so
/// an activated appender always has both. Specialized appenders (console,
/// file, ...) wrap this core and contribute their own target resolution.
///
/// Base option set: `Pattern` (layout pattern string, compiled at activation)
/// and `Name`. Unrecognized keys are ignored.
pub struct WriterAppender {
    name: String,
    pending_pattern: Option<String>,
    layout: Option<PatternLayout>,
    filters: FilterChain,
    sink: Option<Box<dyn Sink>>,
    state: ActivationState,
}

impl WriterAppender {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending_pattern: None,
            layout: None,
            filters: FilterChain::new(),
            sink: None,
            state: ActivationState::Constructed,
        }
    }

    pub fn set_layout(&mut self, layout: PatternLayout) {
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<&PatternLayout> {
        self.layout.as_ref()
    }

    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.add(filter);
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    /// Bind a sink, releasing any previously bound one.
    pub fn set_sink(&mut self, sink: Box<dyn Sink>) {
        if self.state == ActivationState::Finalized {
            diagnostics::warn(&format!(
                "Appender [{}] is finalized; sink not bound.",
                self.name
            ));
            return;
        }
        self.release_sink();
        self.sink = Some(sink);
    }

    /// Descriptor of the currently bound sink, if any.
    pub fn sink_target(&self) -> Option<&str> {
        self.sink.as_deref().map(Sink::target)
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Record that an option was assigned, entering the configuring phase
    /// from a fresh construction. An activated appender keeps serving emits
    /// with its previous binding until the next `activate_options`.
    pub(crate) fn touch_option(&mut self) {
        if self.state == ActivationState::Constructed {
            self.state = ActivationState::Configuring;
        }
    }

    /// Flush and close the bound sink, then refuse all further writes.
    /// Idempotent; the first call wins.
    pub fn finalize(&mut self) {
        if self.state == ActivationState::Finalized {
            return;
        }
        self.release_sink();
        self.state = ActivationState::Finalized;
    }

    fn release_sink(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(e) = sink.flush() {
                diagnostics::error(&format!(
                    "Flush failed while releasing sink of appender [{}]: {}",
                    self.name, e
                ));
            }
            if let Err(e) = sink.close() {
                diagnostics::error(&format!(
                    "Close failed while releasing sink of appender [{}]: {}",
                    self.name, e
                ));
            }
        }
    }
}

impl OptionHandler for WriterAppender {
    fn set_option(&mut self, key: &str, value: &str) {
        self.touch_option();
        if key.eq_ignore_ascii_case("Pattern") {
            self.pending_pattern = Some(value.to_string());
        } else if key.eq_ignore_ascii_case("Name") {
            self.name = value.to_string();
        }
        // Unknown keys are ignored.
    }

    fn activate_options(&mut self) {
        if self.state == ActivationState::Finalized {
            diagnostics::warn(&format!(
                "Appender [{}] is finalized and cannot be reactivated.",
                self.name
            ));
            return;
        }
        if let Some(pattern) = self.pending_pattern.take() {
            self.layout = Some(PatternLayout::new(&pattern));
        }
        if self.layout.is_none() {
            diagnostics::error(&format!(
                "No layout set for appender [{}]; activation refused.",
                self.name
            ));
            return;
        }
        if self.sink.is_none() {
            diagnostics::error(&format!(
                "No sink bound for appender [{}]; activation refused.",
                self.name
            ));
            return;
        }
        self.state = ActivationState::Activated;
    }
}

impl Appender for WriterAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        match self.state {
            ActivationState::Activated => {}
            // Writes after finalization are dropped, not attempted.
            ActivationState::Finalized => return Ok(()),
            _ => {
                diagnostics::warn(&format!(
                    "Appender [{}] used before activation; event dropped.",
                    self.name
                ));
                return Ok(());
            }
        }

        if self.filters.decide(event) == FilterDecision::Deny {
            return Ok(());
        }

        // Activation guarantees both layout and sink are present.
        let (Some(layout), Some(sink)) = (self.layout.as_ref(), self.sink.as_mut()) else {
            return Ok(());
        };

        match layout.format(event) {
            Ok(mut text) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                if let Err(e) = sink.write_str(&text) {
                    // Stay activated; the next emit retries the sink.
                    diagnostics::error(&format!(
                        "Write failed on appender [{}]: {}",
                        self.name, e
                    ));
                }
            }
            Err(e) => {
                diagnostics::error(&format!(
                    "Render failed on appender [{}], event dropped: {}",
                    self.name, e
                ));
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for WriterAppender {
    fn drop(&mut self) {
        self.finalize();
    }
}
