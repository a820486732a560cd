//! Structural and value validation of IRIS transport negotiation documents
//! (`versions`, `size`, `authenticationSuccess`, `authenticationFailure`, `other`).
//!
//! # Examples
//! ```rust
//! use iris_transport_core::config::Config;
//! use iris_transport_core::shape::Shape;
//! use iris_transport_core::validation::validate_str;
//!
//! let xml = r#"<size xmlns="urn:ietf:params:xml:ns:iris-transport">
//!   <response><octets>1211</octets></response>
//! </size>"#;
//! let shape = validate_str(xml, "size.xml", &Config::default())?;
//! assert_eq!(shape, Shape::Size);
//! # Ok::<(), iris_transport_core::validation::DocumentError>(())
//! ```
pub mod config;
pub mod error;
pub mod node;
pub mod schema;
pub mod shape;
pub mod validation;
pub mod verify;

use thiserror::Error;

pub use error::{ErrorKind, ValidationError};
pub use node::{ElementNode, QualifiedName};
pub use shape::Shape;
pub use validation::{DocumentError, ValidationReport};

/// Top-level error wrapper for core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] validation::DocumentError),
    #[error(transparent)]
    Validation(#[from] error::ValidationError),
    #[error(transparent)]
    Config(#[from] config::ConfigParseError),
    #[error(transparent)]
    Shape(#[from] shape::ShapeParseError),
}

impl Error {
    /// Classification for errors raised while validating; `None` for
    /// configuration and argument errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Document(e) => Some(e.kind()),
            Error::Validation(e) => Some(e.kind()),
            Error::Config(_) | Error::Shape(_) => None,
        }
    }
}
