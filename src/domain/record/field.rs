//! Field specifications and values for session records.

use serde::{Deserialize, Serialize};

/// The value kinds a slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text, e.g. a drink type or a customer name.
    Text,
    /// An ordered list of text entries, e.g. order extras or objectives.
    List,
    /// A yes/no flag. An unset optional flag reads as "unknown".
    Flag,
    /// An integer, e.g. a teach-back score.
    Number,
}

impl FieldKind {
    /// Human-readable name used in validation messages.
    pub fn expected_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::List => "list",
            FieldKind::Flag => "flag",
            FieldKind::Number => "number",
        }
    }
}

/// A collected slot value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Number(i64),
}

impl FieldValue {
    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::List(_) => FieldKind::List,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Number(_) => FieldKind::Number,
        }
    }

    /// True when the value does not count as filled for completion purposes.
    ///
    /// A list is empty below length one; text is empty when blank after
    /// trimming; flags and numbers are always filled once set.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Flag(_) | FieldValue::Number(_) => false,
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list content, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The flag content, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// The number content, if this is a number value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Declarative description of one slot in a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal field name, used by extractors and structured updates.
    pub name: &'static str,
    /// Wire name used in persisted payloads.
    pub wire: &'static str,
    /// Human-readable label reported for missing required fields.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        wire: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            wire,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(
        name: &'static str,
        wire: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            wire,
            label,
            kind,
            required: false,
        }
    }
}
