//! Console appender implementation

use super::sink::{StderrSink, StdoutSink, SYSTEM_ERR, SYSTEM_OUT};
use super::writer::WriterAppender;
use crate::core::{
    diagnostics, ActivationState, Appender, LogEvent, OptionHandler, Result,
};
use crate::filters::Filter;
use crate::pattern::PatternLayout;

/// Appender writing to standard output or standard error.
///
/// The target is selected with the `Target` option, accepting `System.out`
/// and `System.err` case-insensitively after trimming surrounding whitespace.
/// Any other value is rejected with a warning and the previous target stays
/// in effect. The configured target is resolved to a concrete stream sink on
/// every `activate_options` call, which is the reconfiguration mechanism.
pub struct ConsoleAppender {
    core: WriterAppender,
    target: &'static str,
}

impl ConsoleAppender {
    /// A console appender targeting standard output by default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: WriterAppender::new(name),
            target: SYSTEM_OUT,
        }
    }

    /// A console appender with a layout, ready to activate.
    pub fn with_layout(name: impl Into<String>, layout: PatternLayout) -> Self {
        let mut appender = Self::new(name);
        appender.core.set_layout(layout);
        appender
    }

    pub fn set_layout(&mut self, layout: PatternLayout) {
        self.core.set_layout(layout);
    }

    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.core.add_filter(filter);
    }

    /// Select the output target. Unrecognized values warn and leave the
    /// previous target unchanged.
    pub fn set_target(&mut self, value: &str) {
        let v = value.trim();
        if v.eq_ignore_ascii_case(SYSTEM_OUT) {
            self.target = SYSTEM_OUT;
        } else if v.eq_ignore_ascii_case(SYSTEM_ERR) {
            self.target = SYSTEM_ERR;
        } else {
            self.target_warn(value);
        }
    }

    /// The configured target descriptor (canonical form).
    pub fn target(&self) -> &str {
        self.target
    }

    /// Descriptor of the sink currently bound by activation, if any.
    pub fn bound_target(&self) -> Option<&str> {
        self.core.sink_target()
    }

    pub fn state(&self) -> ActivationState {
        self.core.state()
    }

    pub fn finalize(&mut self) {
        self.core.finalize();
    }

    fn target_warn(&self, value: &str) {
        diagnostics::warn(&format!(
            "[{}] should be System.out or System.err.",
            value
        ));
        diagnostics::warn("Using previously set target, System.out by default.");
    }
}

impl OptionHandler for ConsoleAppender {
    fn set_option(&mut self, key: &str, value: &str) {
        if key.eq_ignore_ascii_case("Target") {
            self.core.touch_option();
            self.set_target(value);
        } else {
            self.core.set_option(key, value);
        }
    }

    fn activate_options(&mut self) {
        if self.core.state() == ActivationState::Finalized {
            diagnostics::warn(&format!(
                "Appender [{}] is finalized and cannot be reactivated.",
                self.core.name()
            ));
            return;
        }
        // The target is constrained to the two stream descriptors, so
        // resolution cannot leave the appender sinkless.
        if self.target == SYSTEM_OUT {
            self.core.set_sink(Box::new(StdoutSink::new()));
        } else {
            self.core.set_sink(Box::new(StderrSink::new()));
        }
        self.core.activate_options();
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        self.core.append(event)
    }

    fn flush(&mut self) -> Result<()> {
        self.core.flush()
    }

    fn name(&self) -> &str {
        self.core.name()
    }
}
