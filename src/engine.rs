use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::assemble::assemble;
use crate::error::ConsolidationError;
use crate::loader;
use crate::merge::StatementMerger;
use crate::metrics::{self, ConsolidationPhases, ConsolidationStats};
use crate::narrowing::{ResourceNarrowing, WILDCARD_RESOURCE, WildcardYieldsToConcrete};
use crate::timers::{Phase, PhaseTimer};
use crate::types::{CandidateDocument, PolicyDocument};

/// The consolidation engine. Cloneable, thread-safe, and stateless between runs.
///
/// Each call owns its own group map, so one `Consolidator` can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Consolidator {
    narrowing: Arc<dyn ResourceNarrowing>,
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Consolidator {
    /// An engine using [`WildcardYieldsToConcrete`].
    pub fn new() -> Self {
        Self::with_narrowing(Arc::new(WildcardYieldsToConcrete))
    }

    pub fn with_narrowing(narrowing: Arc<dyn ResourceNarrowing>) -> Self {
        Consolidator { narrowing }
    }

    pub fn narrowing(&self) -> &dyn ResourceNarrowing {
        self.narrowing.as_ref()
    }

    /// Normalize, merge and reassemble `documents`.
    ///
    /// Any malformed document or statement rejects the whole run. Empty
    /// input yields an empty result.
    pub fn consolidate(
        &self,
        documents: &[CandidateDocument],
    ) -> Result<Vec<PolicyDocument>, ConsolidationError> {
        self.consolidate_with_stats(documents)
            .map(|(documents, _)| documents)
    }

    pub fn consolidate_with_stats(
        &self,
        documents: &[CandidateDocument],
    ) -> Result<(Vec<PolicyDocument>, ConsolidationStats), ConsolidationError> {
        let mut phases = ConsolidationPhases::default();

        debug!(
            event = "Consolidate",
            phase = "Normalize",
            documents = documents.len()
        );
        let normalized = {
            let _timer = PhaseTimer::start(&mut phases, Phase::Normalize);
            normalize_all(documents)?
        };

        let (output, mut stats) = self.run(&normalized, &mut phases);
        stats.phases = phases;

        info!(
            event = "Consolidate",
            phase = "Done",
            documents = stats.input_documents,
            statements = stats.input_statements,
            groups = stats.output_groups,
            narrowed = stats.narrowed_groups,
            narrowing = self.narrowing.name()
        );
        metrics::record_consolidation(&stats);

        Ok((output, stats))
    }

    /// Consolidate documents that are already normalized, such as a
    /// previous run's output. This cannot fail.
    pub fn consolidate_normalized(&self, documents: &[PolicyDocument]) -> Vec<PolicyDocument> {
        let mut phases = ConsolidationPhases::default();
        self.run(documents, &mut phases).0
    }

    /// Parse producer JSON, consolidate, check the result and serialize it.
    pub fn consolidate_json(&self, text: &str) -> Result<String, ConsolidationError> {
        let candidates = loader::documents_from_str(text)?;
        let documents = self.consolidate(&candidates)?;
        self.validate(&documents)?;
        loader::documents_to_string(&documents)
    }

    /// Check output documents the way a downstream schema pass would.
    ///
    /// Besides per-statement checks, rejects `*` next to concrete resources
    /// unless the engine's narrowing policy allows it.
    pub fn validate(&self, documents: &[PolicyDocument]) -> Result<(), ConsolidationError> {
        for document in documents {
            document.validate()?;
            if self.narrowing.allows_mixed_wildcard() {
                continue;
            }
            for statement in document.statements() {
                let resources = statement.resources();
                if resources.len() > 1 && resources.iter().any(|r| r == WILDCARD_RESOURCE) {
                    return Err(ConsolidationError::InvalidOutput(format!(
                        "statement {:?} mixes '{WILDCARD_RESOURCE}' with concrete resources",
                        statement.sid()
                    )));
                }
            }
        }
        Ok(())
    }

    fn run(
        &self,
        documents: &[PolicyDocument],
        phases: &mut ConsolidationPhases,
    ) -> (Vec<PolicyDocument>, ConsolidationStats) {
        let merger = {
            let _timer = PhaseTimer::start(phases, Phase::Merge);
            let mut merger = StatementMerger::new();
            for document in documents {
                merger.absorb_document(document);
            }
            merger
        };
        debug!(event = "Consolidate", phase = "Merge", groups = merger.len());

        let assembled = {
            let _timer = PhaseTimer::start(phases, Phase::Assemble);
            assemble(merger.into_groups(), self.narrowing.as_ref())
        };

        let stats = ConsolidationStats {
            input_documents: documents.len(),
            input_statements: documents.iter().map(|d| d.statements().len()).sum(),
            output_groups: assembled.documents.len(),
            narrowed_groups: assembled.narrowed_groups,
            phases: ConsolidationPhases::default(),
        };
        (assembled.documents, stats)
    }
}

fn normalize_all(documents: &[CandidateDocument]) -> Result<Vec<PolicyDocument>, ConsolidationError> {
    documents
        .iter()
        .enumerate()
        .map(|(index, document)| document.clone().normalize(index))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| {
            warn!(
                event = "Consolidate",
                phase = "Normalize",
                error = err.to_string()
            );
        })
}

#[cfg(test)]
mod tests;
