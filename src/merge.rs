//! Folding normalized statements into one group per namespace and effect.

use std::collections::HashMap;

use tracing::debug;

use crate::ordered_set::OrderedSet;
use crate::types::{Effect, GroupKey, PolicyDocument, Statement};

/// The accumulated statement for one [`GroupKey`].
///
/// `version`, `id` and `sid` come from the first statement routed to the
/// group and are never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedGroup {
    pub(crate) key: GroupKey,
    pub(crate) version: String,
    pub(crate) id: Option<String>,
    pub(crate) sid: Option<String>,
    pub(crate) actions: OrderedSet,
    pub(crate) resources: OrderedSet,
}

impl MergedGroup {
    fn seed(key: GroupKey, version: &str, id: Option<&str>, statement: &Statement) -> Self {
        MergedGroup {
            key,
            version: version.to_string(),
            id: id.map(str::to_string),
            sid: statement.sid().map(str::to_string),
            actions: OrderedSet::new(),
            resources: OrderedSet::new(),
        }
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn effect(&self) -> Effect {
        self.key.effect()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn actions(&self) -> &OrderedSet {
        &self.actions
    }

    pub fn resources(&self) -> &OrderedSet {
        &self.resources
    }

    pub(crate) fn resources_mut(&mut self) -> &mut OrderedSet {
        &mut self.resources
    }
}

/// Accumulates [`MergedGroup`]s keyed by namespace and effect.
///
/// Groups are kept in the order their key was first seen.
#[derive(Debug, Default)]
pub struct StatementMerger {
    groups: Vec<MergedGroup>,
    index: HashMap<GroupKey, usize>,
}

impl StatementMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb_document(&mut self, document: &PolicyDocument) {
        for statement in document.statements() {
            self.absorb_statement(document.version(), document.id(), statement);
        }
    }

    /// Route each action of `statement` to its group.
    ///
    /// A statement whose actions span several namespaces contributes to
    /// several groups, each receiving the statement's full resource list.
    pub fn absorb_statement(&mut self, version: &str, id: Option<&str>, statement: &Statement) {
        for action in statement.actions() {
            let key = GroupKey::for_action(action, statement.effect());
            let slot = match self.index.get(&key) {
                Some(slot) => *slot,
                None => {
                    debug!(event = "Merge", phase = "NewGroup", key = key.to_string());
                    self.groups
                        .push(MergedGroup::seed(key.clone(), version, id, statement));
                    self.index.insert(key, self.groups.len() - 1);
                    self.groups.len() - 1
                }
            };

            let group = &mut self.groups[slot];
            group.actions.insert(action);
            group.resources.extend(statement.resources());
        }
    }

    pub fn groups(&self) -> &[MergedGroup] {
        &self.groups
    }

    pub fn get(&self, key: &GroupKey) -> Option<&MergedGroup> {
        self.index.get(key).map(|slot| &self.groups[*slot])
    }

    pub fn into_groups(self) -> Vec<MergedGroup> {
        self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
