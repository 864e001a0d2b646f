//! Rebuilding policy documents from merged groups.

use tracing::warn;

use crate::merge::MergedGroup;
use crate::narrowing::ResourceNarrowing;
use crate::types::{PolicyDocument, Statement};

/// Result of assembling: the documents and how many groups were narrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub documents: Vec<PolicyDocument>,
    pub narrowed_groups: usize,
}

/// Apply `narrowing` to each group, then wrap every group in its own
/// single-statement document, keeping group order.
pub fn assemble(groups: Vec<MergedGroup>, narrowing: &dyn ResourceNarrowing) -> Assembled {
    let mut narrowed_groups = 0;
    let mut documents = Vec::with_capacity(groups.len());

    for mut group in groups {
        if narrowing.narrow(group.resources_mut()) {
            narrowed_groups += 1;
            warn!(
                event = "Assemble",
                phase = "Narrowing",
                policy = narrowing.name(),
                key = group.key().to_string(),
                resources = ?group.resources().as_slice()
            );
        }

        let statement = Statement::from_parts(
            group.sid,
            group.key.effect(),
            group.actions.into_vec(),
            group.resources.into_vec(),
        );
        documents.push(PolicyDocument::from_parts(
            group.version,
            group.id,
            vec![statement],
        ));
    }

    Assembled {
        documents,
        narrowed_groups,
    }
}
