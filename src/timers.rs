//! Per-phase timing for consolidation runs.

use std::time::Instant;

use strum::AsRefStr;
use tracing::trace;

use crate::metrics::ConsolidationPhases;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub(crate) enum Phase {
    Normalize,
    Merge,
    Assemble,
}

/// Charges the time until it is dropped to one phase of a run, including
/// when the phase bails out through `?`.
pub(crate) struct PhaseTimer<'a> {
    phase: Phase,
    start: Instant,
    phases: &'a mut ConsolidationPhases,
}

impl<'a> PhaseTimer<'a> {
    pub(crate) fn start(phases: &'a mut ConsolidationPhases, phase: Phase) -> Self {
        PhaseTimer {
            phase,
            start: Instant::now(),
            phases,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let slot = match self.phase {
            Phase::Normalize => &mut self.phases.normalize,
            Phase::Merge => &mut self.phases.merge,
            Phase::Assemble => &mut self.phases.assemble,
        };
        *slot += elapsed;
        trace!(
            event = "Consolidate",
            phase = self.phase.as_ref(),
            elapsed_us = elapsed.as_micros() as u64
        );
    }
}
