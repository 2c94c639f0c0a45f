//! Process-wide diagnostic channel for logging-about-logging
//!
//! The pipeline never lets a misconfigured appender or a broken pattern fail
//! the caller's logging statement. Configuration warnings, pattern compile
//! errors, render errors, and sink errors are instead reported here.
//!
//! The channel is a single process-wide slot holding an injectable
//! [`DiagnosticSink`]. It is initialized lazily, usable from any thread, and
//! has no teardown ordering dependency on the appenders that report through
//! it. When no sink has been installed, reports go to stderr.

use parking_lot::RwLock;
use std::sync::Arc;

/// Receiver for the pipeline's own warnings and errors.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: stderr, prefixed so pipeline output is distinguishable from
/// application log output.
struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("[PIPELINE WARN] {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("[PIPELINE ERROR] {}", message);
    }
}

static SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);

/// Install a diagnostic sink, replacing any previously installed one.
pub fn set_sink(sink: Arc<dyn DiagnosticSink>) {
    *SINK.write() = Some(sink);
}

/// Remove any installed sink, restoring the stderr default.
pub fn reset_sink() {
    *SINK.write() = None;
}

/// Report a recoverable problem (bad option value, unknown specifier).
pub fn warn(message: &str) {
    match &*SINK.read() {
        Some(sink) => sink.warn(message),
        None => StderrDiagnostics.warn(message),
    }
}

/// Report a failure that dropped output (render failure, sink write failure).
pub fn error(message: &str) {
    match &*SINK.read() {
        Some(sink) => sink.error(message),
        None => StderrDiagnostics.error(message),
    }
}
