//! Vendor-agnostic consolidation metrics via a pluggable sink.
//!
//! The library never talks to a metrics backend itself. Implement
//! [`MetricsSink`] and install it once with [`set_sink`]; every successful
//! consolidation run then reports a [`ConsolidationStats`].
//!
//! ```ignore
//! use policy_forge_core::metrics::{set_sink, ConsolidationStats, MetricsSink};
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! struct Narrowings(AtomicU64);
//!
//! impl MetricsSink for Narrowings {
//!     fn on_consolidation(&self, stats: &ConsolidationStats) {
//!         self.0.fetch_add(stats.narrowed_groups as u64, Ordering::Relaxed);
//!     }
//! }
//!
//! set_sink(Arc::new(Narrowings(AtomicU64::new(0))));
//! ```

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::warn;

/// Per-phase timings of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConsolidationPhases {
    pub normalize: Duration,
    pub merge: Duration,
    pub assemble: Duration,
}

impl ConsolidationPhases {
    pub fn total(&self) -> Duration {
        self.normalize + self.merge + self.assemble
    }
}

/// Summary of one consolidation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsolidationStats {
    /// Documents handed to the engine
    pub input_documents: usize,
    /// Statements across all input documents
    pub input_statements: usize,
    /// Groups (and therefore output documents) produced
    pub output_groups: usize,
    /// Groups whose resources were changed by the narrowing policy
    pub narrowed_groups: usize,
    pub phases: ConsolidationPhases,
}

/// Receives consolidation metrics. Called synchronously; keep it cheap.
pub trait MetricsSink: Send + Sync {
    fn on_consolidation(&self, stats: &ConsolidationStats);
}

static SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

/// Install the global metrics sink.
///
/// Only the first call wins; call it at startup before any consolidation.
/// Later calls are ignored with a warning.
pub fn set_sink(sink: Arc<dyn MetricsSink>) {
    if SINK.set(sink).is_err() {
        warn!(
            "Metrics sink was already initialized. Ignoring subsequent set_sink call. Set the sink before the first consolidation."
        );
    }
}

/// Runs are dropped silently until a sink is installed.
pub(crate) fn record_consolidation(stats: &ConsolidationStats) {
    if let Some(sink) = SINK.get() {
        sink.on_consolidation(stats);
    }
}
