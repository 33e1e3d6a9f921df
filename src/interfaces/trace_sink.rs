// ============================================================================
// Trace Sink Interface
// Receives calculation trace lines as quotes are produced
// ============================================================================

use crate::domain::{Severity, TraceLine};

/// Observer for quote trace lines.
/// Implementations can handle logging, audit capture, UI feeds, etc.
pub trait TraceSink: Send + Sync {
    fn on_line(&self, line: &TraceLine);

    /// Batch notification, one call per finished quote
    fn on_lines(&self, lines: &[TraceLine]) {
        for line in lines {
            self.on_line(line);
        }
    }
}

/// No-op sink for tests and batch runs
pub struct NoOpTraceSink;

impl TraceSink for NoOpTraceSink {
    fn on_line(&self, _line: &TraceLine) {}
}

/// Forwards trace lines to `tracing`; warnings at WARN, the rest at DEBUG
pub struct LoggingTraceSink;

impl TraceSink for LoggingTraceSink {
    fn on_line(&self, line: &TraceLine) {
        match line.severity {
            Severity::Info => tracing::debug!(process = %line.process, "{}", line.message),
            Severity::Warning => tracing::warn!(process = %line.process, "{}", line.message),
        }
    }
}
