//! The session record model.
//!
//! One parametrized [`SessionRecord`] type, driven by a declarative
//! [`RecordSchema`], replaces what would otherwise be five near-identical
//! per-service state structs. The schema carries each field's name, wire
//! name, human-readable label, value kind, and whether it is required; the
//! record holds the values collected so far and derives completeness from
//! the schema on every call.

mod field;
mod record;
mod schema;

pub use field::{FieldKind, FieldSpec, FieldValue};
pub use record::{split_listing, SessionRecord};
pub use schema::RecordSchema;
