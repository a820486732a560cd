//! Shapes built from language-tagged `description` elements.
use std::collections::HashSet;

use tracing::{debug, trace};

use super::value::check_base64;
use crate::error::ValidationError;
use crate::node::{ElementNode, QualifiedName};
use crate::schema::{AttributeDescriptor, TRANSPORT_NS};
use crate::schema::tables::{
    AUTHENTICATION_SUCCESS_CHILDREN, DATA, DESCRIPTION, DESCRIPTION_ATTRIBUTES,
    DESCRIPTION_ONLY_CHILDREN, LANGUAGE, NO_ATTRIBUTES, NO_CHILDREN, OTHER_ATTRIBUTES,
};
use crate::verify::{verify_attributes, verify_elements};

pub(crate) fn validate_authentication_success<E: ElementNode>(
    root: &E,
) -> Result<(), ValidationError> {
    trace!("entering authenticationSuccess");
    verify_elements(root, AUTHENTICATION_SUCCESS_CHILDREN)?;
    verify_attributes(root, NO_ATTRIBUTES)?;

    let mut languages = Vec::new();
    for child in root.children() {
        let tag = child.tag();
        if tag.matches(TRANSPORT_NS, DESCRIPTION) {
            verify_attributes(&child, DESCRIPTION_ATTRIBUTES)?;
            languages.extend(child.attribute(LANGUAGE));
        } else if tag.matches(TRANSPORT_NS, DATA) {
            verify_attributes(&child, NO_ATTRIBUTES)?;
            check_base64(&tag, child.text().as_deref())?;
        }
        verify_elements(&child, NO_CHILDREN)?;
    }
    ensure_unique_languages(&root.tag(), &languages)
}

pub(crate) fn validate_authentication_failure<E: ElementNode>(
    root: &E,
) -> Result<(), ValidationError> {
    trace!("entering authenticationFailure");
    validate_descriptions(root, NO_ATTRIBUTES)
}

pub(crate) fn validate_other<E: ElementNode>(root: &E) -> Result<(), ValidationError> {
    trace!("entering other");
    validate_descriptions(root, OTHER_ATTRIBUTES)
}

fn validate_descriptions<E: ElementNode>(
    root: &E,
    root_attributes: &[AttributeDescriptor],
) -> Result<(), ValidationError> {
    verify_elements(root, DESCRIPTION_ONLY_CHILDREN)?;
    verify_attributes(root, root_attributes)?;

    let mut languages = Vec::new();
    for description in root.children() {
        verify_attributes(&description, DESCRIPTION_ATTRIBUTES)?;
        verify_elements(&description, NO_CHILDREN)?;
        languages.extend(description.attribute(LANGUAGE));
    }
    ensure_unique_languages(&root.tag(), &languages)
}

/// Reports the first language, in document order, that appears twice.
fn ensure_unique_languages(
    element: &QualifiedName,
    languages: &[String],
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for language in languages {
        if !seen.insert(language.as_str()) {
            return Err(ValidationError::DuplicateLanguage {
                element: element.clone(),
                language: language.clone(),
            });
        }
    }
    debug!(element = %element, count = languages.len(), "description languages unique");
    Ok(())
}
