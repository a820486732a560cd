//! Element-level validation failures.
use std::collections::BTreeSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::QualifiedName;

/// Classification of a failure, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AttributeConstraint,
    ElementConstraint,
    ValueFormat,
    ValueRange,
    Uniqueness,
    DocumentAccess,
    SchemaMismatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::AttributeConstraint => "attribute_constraint",
            ErrorKind::ElementConstraint => "element_constraint",
            ErrorKind::ValueFormat => "value_format",
            ErrorKind::ValueRange => "value_range",
            ErrorKind::Uniqueness => "uniqueness",
            ErrorKind::DocumentAccess => "document_access",
            ErrorKind::SchemaMismatch => "schema_mismatch",
        }
    }

    /// A fatal failure means the document could not be classified at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::SchemaMismatch)
    }
}

/// First schema violation found below a document root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required attribute {name} on {element}")]
    MissingAttribute { element: QualifiedName, name: String },

    #[error("too many occurrences of attribute {name} on {element} (max: {max})")]
    TooManyAttributes {
        element: QualifiedName,
        name: String,
        max: u32,
    },

    #[error("unexpected attributes on {element}: {}", join(.names))]
    UnexpectedAttributes {
        element: QualifiedName,
        names: BTreeSet<String>,
    },

    #[error("missing required element {name} in {element} (found: {found}, required: {min})")]
    MissingElement {
        element: QualifiedName,
        name: QualifiedName,
        found: usize,
        min: u32,
    },

    #[error("too many occurrences of element {name} in {element} (found: {found}, max: {max})")]
    TooManyElements {
        element: QualifiedName,
        name: QualifiedName,
        found: usize,
        max: u32,
    },

    #[error("unexpected elements in {element}: {}", join(.names))]
    UnexpectedElements {
        element: QualifiedName,
        names: BTreeSet<QualifiedName>,
    },

    #[error("{element} cannot contain both {first} and {second}")]
    MutuallyExclusive {
        element: QualifiedName,
        first: QualifiedName,
        second: QualifiedName,
    },

    #[error("{element} value is not an integer: {value:?}")]
    NonIntegerValue { element: QualifiedName, value: String },

    #[error("{element} value must be greater than 0: {value}")]
    NonPositiveValue { element: QualifiedName, value: String },

    #[error("{element} value is not base64: {value:?}")]
    InvalidBase64 { element: QualifiedName, value: String },

    #[error("description language {language:?} is not unique in {element}")]
    DuplicateLanguage {
        element: QualifiedName,
        language: String,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingAttribute { .. }
            | ValidationError::TooManyAttributes { .. }
            | ValidationError::UnexpectedAttributes { .. } => ErrorKind::AttributeConstraint,
            ValidationError::MissingElement { .. }
            | ValidationError::TooManyElements { .. }
            | ValidationError::UnexpectedElements { .. }
            | ValidationError::MutuallyExclusive { .. } => ErrorKind::ElementConstraint,
            ValidationError::NonIntegerValue { .. } | ValidationError::InvalidBase64 { .. } => {
                ErrorKind::ValueFormat
            }
            ValidationError::NonPositiveValue { .. } => ErrorKind::ValueRange,
            ValidationError::DuplicateLanguage { .. } => ErrorKind::Uniqueness,
        }
    }

    /// Element on which the violation was detected.
    pub fn element(&self) -> &QualifiedName {
        match self {
            ValidationError::MissingAttribute { element, .. }
            | ValidationError::TooManyAttributes { element, .. }
            | ValidationError::UnexpectedAttributes { element, .. }
            | ValidationError::MissingElement { element, .. }
            | ValidationError::TooManyElements { element, .. }
            | ValidationError::UnexpectedElements { element, .. }
            | ValidationError::MutuallyExclusive { element, .. }
            | ValidationError::NonIntegerValue { element, .. }
            | ValidationError::NonPositiveValue { element, .. }
            | ValidationError::InvalidBase64 { element, .. }
            | ValidationError::DuplicateLanguage { element, .. } => element,
        }
    }
}

fn join<T: Display>(names: &BTreeSet<T>) -> String {
    names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
