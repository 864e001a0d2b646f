//! Statement effect.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Whether a statement grants or denies its actions.
///
/// Parsing is case-sensitive: only `"Allow"` and `"Deny"` are accepted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum Effect {
    Allow,
    Deny,
}
