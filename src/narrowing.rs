//! Post-merge resource narrowing.
//!
//! After merging, a group may hold both the wildcard resource `*` and
//! concrete resources. What to do about that is a policy decision, so it
//! lives behind [`ResourceNarrowing`] instead of inside the merge loop.

use std::fmt::Debug;

use crate::ordered_set::OrderedSet;

/// The resource identifier matching every resource.
pub const WILDCARD_RESOURCE: &str = "*";

/// Adjusts the merged resource set of one group.
pub trait ResourceNarrowing: Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Mutate `resources` in place. Returns `true` if anything was removed.
    fn narrow(&self, resources: &mut OrderedSet) -> bool;

    /// Whether `*` may appear next to concrete resources after narrowing.
    fn allows_mixed_wildcard(&self) -> bool {
        true
    }
}

/// Drop `*` when at least one concrete resource is present.
///
/// A lone `*` is kept. This narrows the effective permission when the
/// wildcard was independently required by one of the merged statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WildcardYieldsToConcrete;

impl ResourceNarrowing for WildcardYieldsToConcrete {
    fn name(&self) -> &'static str {
        "wildcard_yields_to_concrete"
    }

    fn narrow(&self, resources: &mut OrderedSet) -> bool {
        if resources.len() > 1 && resources.contains(WILDCARD_RESOURCE) {
            return resources.remove(WILDCARD_RESOURCE);
        }
        false
    }

    fn allows_mixed_wildcard(&self) -> bool {
        false
    }
}

/// Leave merged resources untouched, `*` included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepWildcard;

impl ResourceNarrowing for KeepWildcard {
    fn name(&self) -> &'static str {
        "keep_wildcard"
    }

    fn narrow(&self, _resources: &mut OrderedSet) -> bool {
        false
    }
}
