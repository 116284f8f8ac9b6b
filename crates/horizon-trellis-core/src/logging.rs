//! Logging facilities for Horizon Trellis.
//!
//! Horizon Trellis uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_trellis::layout=trace")
//!     .init();
//! ```
//!
//! Every event is emitted with one of the [`targets`] below so subsystems
//! can be filtered independently.

/// Span names used throughout Horizon Trellis.
pub mod span_names {
    /// One canvas frame tick.
    pub const TICK: &str = "horizon_trellis::tick";
    /// A full measure + arrange pass from the root.
    pub const FULL_LAYOUT: &str = "horizon_trellis::full_layout";
    /// Draining the deferred measure queue.
    pub const DEFERRED_MEASURE: &str = "horizon_trellis::deferred_measure";
    /// Draining the deferred delete queue.
    pub const DEFERRED_DELETE: &str = "horizon_trellis::deferred_delete";
    /// Render traversal.
    pub const RENDER: &str = "horizon_trellis::render";
}

/// Target names for log filtering.
pub mod targets {
    /// Tree structure: insertion, re-parenting, destruction.
    pub const TREE: &str = "horizon_trellis::tree";
    /// Measure and arrange passes.
    pub const LAYOUT: &str = "horizon_trellis::layout";
    /// Dirty propagation and deferred queues.
    pub const INVALIDATION: &str = "horizon_trellis::invalidation";
    /// Canvas frame driver.
    pub const CANVAS: &str = "horizon_trellis::canvas";
    /// Hit testing.
    pub const HIT_TEST: &str = "horizon_trellis::hit_test";
    /// Render traversal.
    pub const RENDER: &str = "horizon_trellis::render";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_trellis::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_trellis::perf";
}

/// A guard that keeps a performance span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span for `name` (one of [`span_names`]).
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_trellis::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
