//! Record Fields
//!
//! Typed field access for records shown in list views, plus the per-list
//! configuration of which fields are searchable and sortable.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Declared value type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Number,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Number(_) => FieldType::Number,
            FieldValue::Date(_) => FieldType::Date,
        }
    }

    /// Natural order between two values of the same type.
    ///
    /// Returns `None` when the types differ; list views reject such
    /// configurations up front, so callers may treat `None` as equal.
    pub fn compare(&self, other: &FieldValue<'_>) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.total_cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Case-insensitive substring match. `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(needle),
            _ => false,
        }
    }
}

/// A flat record whose fields can be read by name
pub trait Record {
    /// Value of the named field, or `None` if the record has no such field
    /// (or the field is unset).
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// How one field participates in a list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub searchable: bool,
    pub sortable: bool,
}

/// Field and paging configuration for a list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub fields: Vec<FieldSpec>,
    pub page_size: usize,
}

impl ListConfig {
    pub fn new(page_size: usize) -> Self {
        Self {
            fields: Vec::new(),
            page_size,
        }
    }

    /// Mark a text field as searchable
    pub fn searchable(mut self, name: &str) -> Self {
        self.spec_mut(name, FieldType::Text).searchable = true;
        self
    }

    /// Mark a field as sortable with the given value type
    pub fn sortable(mut self, name: &str, field_type: FieldType) -> Self {
        self.spec_mut(name, field_type).sortable = true;
        self
    }

    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|s| s.name == name)
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|s| s.searchable)
    }

    pub fn sortable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|s| s.sortable)
    }

    pub fn is_sortable(&self, name: &str) -> bool {
        self.spec(name).is_some_and(|s| s.sortable)
    }

    // A name declared twice keeps its first type; a conflicting second
    // declaration surfaces as a type mismatch when the view validates.
    fn spec_mut(&mut self, name: &str, field_type: FieldType) -> &mut FieldSpec {
        let pos = match self.fields.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.fields.push(FieldSpec {
                    name: name.to_string(),
                    field_type,
                    searchable: false,
                    sortable: false,
                });
                self.fields.len() - 1
            }
        };
        &mut self.fields[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_same_type() {
        assert_eq!(
            FieldValue::Number(50.0).compare(&FieldValue::Number(100.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            FieldValue::Text("b").compare(&FieldValue::Text("a")),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_mixed_type() {
        assert_eq!(FieldValue::Text("1").compare(&FieldValue::Number(1.0)), None);
    }

    #[test]
    fn test_contains_lowercase() {
        assert!(FieldValue::Text("Jane Roe").contains_lowercase("jane"));
        assert!(!FieldValue::Text("John Doe").contains_lowercase("jane"));
        assert!(!FieldValue::Number(12.0).contains_lowercase("12"));
    }

    #[test]
    fn test_config_builder() {
        let config = ListConfig::new(10)
            .searchable("name")
            .sortable("name", FieldType::Text)
            .sortable("amount", FieldType::Number);

        assert_eq!(config.fields.len(), 2);
        assert!(config.is_sortable("amount"));
        assert!(!config.is_sortable("invoice_ref"));
        assert_eq!(config.searchable_fields().count(), 1);
        let name = config.spec("name").unwrap();
        assert!(name.searchable && name.sortable);
    }
}
