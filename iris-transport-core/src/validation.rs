//! Document-level entry points: load, classify, validate.
use std::error::Error as _;
use std::path::Path;

use libxml::parser::{Parser, ParserOptions};
use libxml::tree::Document;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::{Config, NamespacePolicy};
use crate::error::{ErrorKind, ValidationError};
use crate::node::{ElementNode, QualifiedName};
use crate::schema::TRANSPORT_NS;
use crate::shape::Shape;

/// Failure of one document, identified by `document` (usually its path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The document could not be read or is not well-formed XML.
    #[error("document {document} could not be loaded: {reason}")]
    Access { document: String, reason: String },

    /// The root element is none of the five transport shapes.
    #[error("root element {root} of document {document} is not IRIS transport conformant")]
    SchemaMismatch { document: String, root: QualifiedName },

    #[error("document {document} failed {shape} validation")]
    Invalid {
        document: String,
        shape: Shape,
        #[source]
        source: ValidationError,
    },
}

impl DocumentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocumentError::Access { .. } => ErrorKind::DocumentAccess,
            DocumentError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            DocumentError::Invalid { source, .. } => source.kind(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind().is_fatal()
    }

    pub fn document(&self) -> &str {
        match self {
            DocumentError::Access { document, .. }
            | DocumentError::SchemaMismatch { document, .. }
            | DocumentError::Invalid { document, .. } => document,
        }
    }

    /// Offending element, when the failure is tied to one.
    pub fn element(&self) -> Option<&QualifiedName> {
        match self {
            DocumentError::Access { .. } => None,
            DocumentError::SchemaMismatch { root, .. } => Some(root),
            DocumentError::Invalid { source, .. } => Some(source.element()),
        }
    }

    /// Underlying schema violation of an [`DocumentError::Invalid`] document.
    pub fn cause(&self) -> Option<&ValidationError> {
        match self {
            DocumentError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }

    /// This error and its sources joined with `": "`.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Machine-readable outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub document: String,
    pub valid: bool,
    pub shape: Option<Shape>,
    pub kind: Option<ErrorKind>,
    pub fatal: bool,
    pub message: Option<String>,
    pub element: Option<String>,
}

impl ValidationReport {
    pub fn new(document: impl Into<String>, outcome: &Result<Shape, DocumentError>) -> Self {
        let document = document.into();
        match outcome {
            Ok(shape) => Self {
                document,
                valid: true,
                shape: Some(*shape),
                kind: None,
                fatal: false,
                message: None,
                element: None,
            },
            Err(err) => Self {
                document,
                valid: false,
                shape: match err {
                    DocumentError::Invalid { shape, .. } => Some(*shape),
                    _ => None,
                },
                kind: Some(err.kind()),
                fatal: err.is_fatal(),
                message: Some(err.chain()),
                element: err.element().map(ToString::to_string),
            },
        }
    }
}

fn strict_parser_options<'a>() -> ParserOptions<'a> {
    ParserOptions {
        recover: false,
        ..ParserOptions::default()
    }
}

/// Parse the XML file at `path`.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let document = path.display().to_string();
    // libxml only reports a null pointer for missing files
    if !path.exists() {
        return Err(DocumentError::Access {
            document,
            reason: "file not found".to_string(),
        });
    }
    let xml_path = path.to_str().ok_or_else(|| DocumentError::Access {
        document: document.clone(),
        reason: "path is not valid UTF-8".to_string(),
    })?;

    Parser::default()
        .parse_file_with_options(xml_path, strict_parser_options())
        .map_err(|e| DocumentError::Access {
            document,
            reason: format!("XML parse error: {e:?}"),
        })
}

/// Parse an in-memory XML document identified by `document`.
pub fn parse_document(xml: &str, document: &str) -> Result<Document, DocumentError> {
    Parser::default()
        .parse_string_with_options(xml, strict_parser_options())
        .map_err(|e| DocumentError::Access {
            document: document.to_string(),
            reason: format!("XML parse error: {e:?}"),
        })
}

/// Validate the XML file at `path`, returning its shape when it conforms.
///
/// # Examples
/// ```rust,no_run
/// use std::path::Path;
/// use iris_transport_core::config::Config;
/// use iris_transport_core::validation::validate_file;
///
/// let shape = validate_file(Path::new("versions.xml"), &Config::default())?;
/// println!("{shape} document conforms");
/// # Ok::<(), iris_transport_core::validation::DocumentError>(())
/// ```
pub fn validate_file(path: &Path, config: &Config) -> Result<Shape, DocumentError> {
    info!(document = %path.display(), "starting validation");
    let doc = load_document(path).inspect_err(log_rejection)?;
    validate_document(&doc, &path.display().to_string(), config)
}

/// Validate an in-memory XML document.
pub fn validate_str(xml: &str, document: &str, config: &Config) -> Result<Shape, DocumentError> {
    let doc = parse_document(xml, document).inspect_err(log_rejection)?;
    validate_document(&doc, document, config)
}

/// Validate an already parsed document.
pub fn validate_document(
    doc: &Document,
    document: &str,
    config: &Config,
) -> Result<Shape, DocumentError> {
    let root = doc
        .get_root_element()
        .ok_or_else(|| DocumentError::Access {
            document: document.to_string(),
            reason: "document has no root element".to_string(),
        })
        .inspect_err(log_rejection)?;
    validate_root(&root, document, config)
}

/// Resolve the shape of `root` without validating it.
pub fn classify_root<E: ElementNode>(
    root: &E,
    document: &str,
    config: &Config,
) -> Result<Shape, DocumentError> {
    let tag = root.tag();
    let in_scope = match config.namespace_policy() {
        NamespacePolicy::Lenient => true,
        NamespacePolicy::Strict => tag.namespace() == Some(TRANSPORT_NS),
    };
    match Shape::from_local_name(tag.local_name()) {
        Some(shape) if in_scope => Ok(shape),
        _ => Err(DocumentError::SchemaMismatch {
            document: document.to_string(),
            root: tag,
        }),
    }
}

/// Classify and validate a pre-parsed root element.
pub fn validate_root<E: ElementNode>(
    root: &E,
    document: &str,
    config: &Config,
) -> Result<Shape, DocumentError> {
    let shape = classify_root(root, document, config).inspect_err(log_rejection)?;
    debug!(document, shape = %shape, "dispatching");
    shape
        .validate(root)
        .map_err(|source| DocumentError::Invalid {
            document: document.to_string(),
            shape,
            source,
        })
        .inspect_err(log_rejection)?;
    info!(document, shape = %shape, "document conforms");
    Ok(shape)
}

fn log_rejection(err: &DocumentError) {
    if err.is_fatal() {
        error!(document = err.document(), kind = err.kind().as_str(), "{}", err.chain());
    } else {
        warn!(document = err.document(), kind = err.kind().as_str(), "{}", err.chain());
    }
}
