//! Consolidation keys.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::effect::Effect;

/// Separator between an action's namespace and its operation, e.g. `s3:GetObject`.
pub const NAMESPACE_SEPARATOR: char = ':';

/// The namespace of an action: everything before the first `:`.
///
/// An action without a separator is its own namespace.
pub fn namespace_of(action: &str) -> &str {
    match action.split_once(NAMESPACE_SEPARATOR) {
        Some((namespace, _)) => namespace,
        None => action,
    }
}

/// Statements sharing a namespace and an effect are merged into one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub struct GroupKey {
    namespace: String,
    effect: Effect,
}

impl GroupKey {
    pub fn new<S: Into<String>>(namespace: S, effect: Effect) -> Self {
        GroupKey {
            namespace: namespace.into(),
            effect,
        }
    }

    /// Derive the key an action is routed to.
    pub fn for_action(action: &str, effect: Effect) -> Self {
        GroupKey::new(namespace_of(action), effect)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.namespace, self.effect)
    }
}
