//! Appender and option-handling traits

use super::{error::Result, log_event::LogEvent};

/// Output destination for admitted, rendered events.
///
/// `append` must never propagate a per-event failure out to the logging
/// caller: implementations convert render and sink problems into diagnostic
/// reports and drop the event. The `Result` is reserved for callers that
/// compose appenders and want to observe hard faults in their own plumbing.
pub trait Appender: Send + Sync {
    fn append(&mut self, event: &LogEvent) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Two-phase configuration: repeated string option assignment followed by an
/// explicit activation that resolves the accumulated options into bound
/// resources.
///
/// `set_option` is order-independent for distinct keys and last-write-wins for
/// a repeated key. Keys are matched case-insensitively; genuinely unknown keys
/// are ignored. `activate_options` may be called again after further option
/// changes; each call re-resolves bound resources.
pub trait OptionHandler {
    fn set_option(&mut self, key: &str, value: &str);
    fn activate_options(&mut self);
}

/// Configuration lifecycle of an appender.
///
/// `Constructed -> Configuring` happens on the first `set_option`;
/// `Configuring -> Activated` on a successful `activate_options`;
/// `Activated -> Activated` reconfiguration is legal; `Finalized` is terminal
/// and reached exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Constructed,
    Configuring,
    Activated,
    Finalized,
}
