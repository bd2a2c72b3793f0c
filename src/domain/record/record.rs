//! The mutable session record accumulating one interaction's slots.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;

use super::field::{FieldKind, FieldValue};
use super::schema::RecordSchema;

/// Splits a comma-separated listing into trimmed, non-empty entries.
///
/// Structured tool calls encode list-valued parameters as flat
/// comma-separated strings; this is the only place that encoding is parsed,
/// so the raw string never travels past the call boundary.
pub fn split_listing(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Slot-filling state for one in-progress interaction.
///
/// Values are written either by structured tool calls or by the text
/// extractor; completeness is derived from the schema on every call rather
/// than cached. Required fields can be overwritten but never cleared; a
/// record that has been persisted is terminal and a new transaction starts
/// from a fresh record.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    schema: RecordSchema,
    values: HashMap<&'static str, FieldValue>,
}

impl SessionRecord {
    /// Creates an empty record for the given schema.
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            values: HashMap::new(),
        }
    }

    /// The schema this record was created from.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// The current value of a field, if set.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text content of a field, if set.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(FieldValue::as_text)
    }

    /// List content of a field; unset lists read as empty.
    pub fn list(&self, name: &str) -> &[String] {
        self.value(name).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    /// Flag content of a field; `None` when unset (unknown).
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.value(name).and_then(FieldValue::as_flag)
    }

    /// Number content of a field, if set.
    pub fn number(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(FieldValue::as_number)
    }

    /// Sets a text field. Blank input is rejected rather than clearing a
    /// previously collected value.
    pub fn set_text(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field(name));
        }
        let spec = self.spec_of(name, FieldKind::Text)?;
        self.values.insert(spec.name, FieldValue::Text(value));
        Ok(())
    }

    /// Sets a flag field.
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), ValidationError> {
        let spec = self.spec_of(name, FieldKind::Flag)?;
        self.values.insert(spec.name, FieldValue::Flag(value));
        Ok(())
    }

    /// Sets a number field.
    pub fn set_number(&mut self, name: &str, value: i64) -> Result<(), ValidationError> {
        let spec = self.spec_of(name, FieldKind::Number)?;
        self.values.insert(spec.name, FieldValue::Number(value));
        Ok(())
    }

    /// Replaces a list field. Entries are trimmed, blanks dropped, and
    /// duplicates (case-insensitive) collapse to their first occurrence.
    pub fn set_list(&mut self, name: &str, values: Vec<String>) -> Result<(), ValidationError> {
        let spec = self.spec_of(name, FieldKind::List)?;
        let mut cleaned: Vec<String> = Vec::new();
        for value in values {
            let value = value.trim().to_owned();
            if value.is_empty() || contains_equivalent(&cleaned, &value) {
                continue;
            }
            cleaned.push(value);
        }
        self.values.insert(spec.name, FieldValue::List(cleaned));
        Ok(())
    }

    /// Appends one entry to a list field.
    ///
    /// Returns `true` when the entry was actually added, `false` when an
    /// equivalent entry (case-insensitive on the trimmed form) was already
    /// present or the entry was blank.
    pub fn append_list(&mut self, name: &str, value: &str) -> Result<bool, ValidationError> {
        let spec = self.spec_of(name, FieldKind::List)?;
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        let entry = self
            .values
            .entry(spec.name)
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match entry {
            FieldValue::List(items) => {
                if contains_equivalent(items, value) {
                    Ok(false)
                } else {
                    items.push(value.to_owned());
                    Ok(true)
                }
            }
            // spec_of already guaranteed the field is list-kinded
            _ => Err(ValidationError::wrong_kind(name, "list")),
        }
    }

    /// True iff every required field is non-empty. Recomputed on every call.
    pub fn is_complete(&self) -> bool {
        self.schema
            .fields()
            .iter()
            .filter(|f| f.required)
            .all(|f| self.values.get(f.name).is_some_and(|v| !v.is_empty()))
    }

    /// Human-readable labels of unset required fields, in schema order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.schema
            .fields()
            .iter()
            .filter(|f| f.required)
            .filter(|f| !self.values.get(f.name).is_some_and(|v| !v.is_empty()))
            .map(|f| f.label)
            .collect()
    }

    /// The record's field mapping under wire names, in schema order.
    ///
    /// Unset text/flag/number fields serialize as null and unset lists as
    /// empty arrays, matching the persisted artifact shape.
    pub fn payload(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for spec in self.schema.fields() {
            let value = match self.values.get(spec.name) {
                Some(v) => serde_json::to_value(v).unwrap_or(Value::Null),
                None if spec.kind == FieldKind::List => Value::Array(Vec::new()),
                None => Value::Null,
            };
            map.insert(spec.wire.to_owned(), value);
        }
        map
    }

    fn spec_of(
        &self,
        name: &str,
        expected: FieldKind,
    ) -> Result<&'static super::field::FieldSpec, ValidationError> {
        let spec = self
            .schema
            .field(name)
            .ok_or_else(|| ValidationError::unknown_field(name))?;
        if spec.kind != expected {
            return Err(ValidationError::wrong_kind(name, spec.kind.expected_name()));
        }
        Ok(spec)
    }
}

fn contains_equivalent(items: &[String], candidate: &str) -> bool {
    items.iter().any(|i| i.eq_ignore_ascii_case(candidate))
}
