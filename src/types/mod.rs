//! Data model for policy documents.
//!
//! Wire names follow the cloud policy grammar (`Version`, `Id`, `Statement`,
//! `Sid`, `Effect`, `Action`, `Resource`).
//! - `Candidate*` types accept whatever a producer emitted, including the
//!   scalar-or-list shape of `Action` and `Resource`.
//! - [`PolicyDocument`] and [`Statement`] are the normalized forms; their
//!   action and resource fields are always non-empty lists.

mod document;
mod effect;
mod group_key;
mod statement;
mod string_or_list;

pub use document::{CandidateDocument, PolicyDocument};
pub use effect::Effect;
pub use group_key::{GroupKey, NAMESPACE_SEPARATOR, namespace_of};
pub use statement::{CandidateStatement, Statement};
pub use string_or_list::StringOrList;
