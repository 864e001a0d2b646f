// src/lib.rs
pub use assemble::{Assembled, assemble};
pub use engine::Consolidator;
pub use error::ConsolidationError;
pub use loader::{POLICY_DOCUMENTS_FIELD, documents_from_str, documents_to_string};
pub use merge::{MergedGroup, StatementMerger};
pub use narrowing::{KeepWildcard, ResourceNarrowing, WILDCARD_RESOURCE, WildcardYieldsToConcrete};
pub use ordered_set::OrderedSet;
pub use types::{
    CandidateDocument, CandidateStatement, Effect, GroupKey, PolicyDocument, Statement,
    StringOrList, namespace_of,
};

pub mod metrics;
pub mod types;

mod assemble;
mod engine;
mod error;
mod loader;
mod merge;
mod narrowing;
mod ordered_set;
mod timers;
