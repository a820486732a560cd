//! The five root document shapes of the transport schema.
mod description;
mod size;
mod value;
mod versions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::node::ElementNode;

/// Root shape of a transport document, resolved from the root's local name.
///
/// # Examples
/// ```rust
/// use iris_transport_core::shape::Shape;
///
/// assert_eq!(Shape::from_local_name("size"), Some(Shape::Size));
/// assert_eq!(Shape::from_local_name("authenticationsuccess"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    Versions,
    Size,
    AuthenticationSuccess,
    AuthenticationFailure,
    Other,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Versions,
        Shape::Size,
        Shape::AuthenticationSuccess,
        Shape::AuthenticationFailure,
        Shape::Other,
    ];

    /// Exact, case-sensitive match on the root element's local name.
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.local_name() == name)
    }

    pub fn detect<E: ElementNode>(root: &E) -> Option<Self> {
        Self::from_local_name(root.tag().local_name())
    }

    pub fn local_name(&self) -> &'static str {
        match self {
            Shape::Versions => "versions",
            Shape::Size => "size",
            Shape::AuthenticationSuccess => "authenticationSuccess",
            Shape::AuthenticationFailure => "authenticationFailure",
            Shape::Other => "other",
        }
    }

    /// Validate `root` as this shape, stopping at the first violation.
    pub fn validate<E: ElementNode>(self, root: &E) -> Result<(), ValidationError> {
        match self {
            Shape::Versions => versions::validate_versions(root),
            Shape::Size => size::validate_size(root),
            Shape::AuthenticationSuccess => description::validate_authentication_success(root),
            Shape::AuthenticationFailure => description::validate_authentication_failure(root),
            Shape::Other => description::validate_other(root),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// Error returned when parsing a [`Shape`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document shape: {input}")]
pub struct ShapeParseError {
    input: String,
}

impl FromStr for Shape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_local_name(s).ok_or_else(|| ShapeParseError {
            input: s.to_string(),
        })
    }
}
