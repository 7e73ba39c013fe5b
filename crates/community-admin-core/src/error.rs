//! Error types for the admin core

use thiserror::Error;

use crate::record::FieldType;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or driving trees, list views and collections
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two hierarchy nodes share an id
    #[error("duplicate hierarchy node id: {id}")]
    DuplicateNodeId { id: String },

    /// No node with this id exists in the tree
    #[error("hierarchy node not found: {id}")]
    UnknownNode { id: String },

    /// Leaf nodes have nothing to expand
    #[error("hierarchy node has no children to toggle: {id}")]
    LeafNode { id: String },

    /// Page size must be at least one row
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// A field name that no record exposes
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Sort requested on a field that is not configured as sortable
    #[error("field is not sortable: {field}")]
    NotSortable { field: String },

    /// A configured field has no value on some record
    #[error("record {record} has no value for field '{field}'")]
    MissingField { field: String, record: usize },

    /// A configured field holds a value of the wrong type on some record
    #[error("record {record} field '{field}': expected {expected}, found {found}")]
    FieldTypeMismatch {
        field: String,
        record: usize,
        expected: FieldType,
        found: FieldType,
    },

    /// Two records in a collection share an id
    #[error("duplicate record id: {id}")]
    DuplicateRecordId { id: String },

    /// No record with this id exists in the collection
    #[error("record not found: {id}")]
    RecordNotFound { id: String },

    /// An update patch rewrote the record's id
    #[error("update changed record id {from} to {to}")]
    IdChanged { from: String, to: String },

    /// Configuration rejected after parsing
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON decoding error (configuration or data providers)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::DuplicateNodeId {
            id: "mumbai".into(),
        };
        assert_eq!(err.to_string(), "duplicate hierarchy node id: mumbai");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = CoreError::FieldTypeMismatch {
            field: "amount".into(),
            record: 3,
            expected: FieldType::Number,
            found: FieldType::Text,
        };
        let msg = err.to_string();
        assert!(msg.contains("amount"));
        assert!(msg.contains("expected number"));
        assert!(msg.contains("found text"));
    }
}
