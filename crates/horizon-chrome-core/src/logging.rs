//! Logging facilities for Horizon Chrome.
//!
//! Horizon Chrome uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_chrome=debug")
//!     .init();
//! ```
//!
//! Gesture start/end is logged at `trace`, state transitions at `debug`,
//! and degraded monitor resolution at `warn`.

/// Span names used throughout Horizon Chrome for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Pointer dispatch span.
    pub const POINTER: &str = "horizon_chrome::pointer";
    /// Window state transition span.
    pub const STATE: &str = "horizon_chrome::state";
    /// Idle task processing span.
    pub const TASK: &str = "horizon_chrome::task";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Hook signal target.
    pub const SIGNAL: &str = "horizon_chrome_core::signal";
    /// Idle task queue target.
    pub const TASK: &str = "horizon_chrome_core::task";
    /// Timing spans.
    pub const PERF: &str = "horizon_chrome::perf";
    /// Chrome facade target.
    pub const CHROME: &str = "horizon_chrome";
    /// Gesture (resize/move) target.
    pub const GESTURE: &str = "horizon_chrome::gesture";
    /// Window state coordinator target.
    pub const STATE: &str = "horizon_chrome::state";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a block of work such as draining the idle queue.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
