use tracing::trace;

use super::value::check_octets;
use crate::error::ValidationError;
use crate::node::ElementNode;
use crate::schema::TRANSPORT_NS;
use crate::schema::tables::{
    EXCEEDS_MAXIMUM, NO_ATTRIBUTES, NO_CHILDREN, OCTETS, OCTETS_TYPE_CHILDREN, SIZE_CHILDREN,
};
use crate::verify::{verify_attributes, verify_elements};

/// `size` with optional `request` and `response`, each an octets type.
pub(crate) fn validate_size<E: ElementNode>(root: &E) -> Result<(), ValidationError> {
    trace!("entering size");
    verify_elements(root, SIZE_CHILDREN)?;
    verify_attributes(root, NO_ATTRIBUTES)?;
    for child in root.children() {
        trace!(element = %child.tag(), "entering octets type");
        verify_attributes(&child, NO_ATTRIBUTES)?;
        validate_octets_type(&child)?;
    }
    Ok(())
}

/// Either an `exceedsMaximum` marker or an `octets` count, never both.
pub(crate) fn validate_octets_type<E: ElementNode>(element: &E) -> Result<(), ValidationError> {
    verify_elements(element, OCTETS_TYPE_CHILDREN)?;

    let mut exceeds = None;
    let mut octets = None;
    for child in element.children() {
        let tag = child.tag();
        if tag.matches(TRANSPORT_NS, EXCEEDS_MAXIMUM) {
            exceeds = Some(child);
        } else if tag.matches(TRANSPORT_NS, OCTETS) {
            octets = Some(child);
        }
    }

    match (exceeds, octets) {
        (Some(exceeds), Some(octets)) => Err(ValidationError::MutuallyExclusive {
            element: element.tag(),
            first: exceeds.tag(),
            second: octets.tag(),
        }),
        (None, Some(octets)) => {
            verify_attributes(&octets, NO_ATTRIBUTES)?;
            verify_elements(&octets, NO_CHILDREN)?;
            check_octets(&octets.tag(), octets.text().as_deref())
        }
        (Some(exceeds), None) => {
            verify_attributes(&exceeds, NO_ATTRIBUTES)?;
            verify_elements(&exceeds, NO_CHILDREN)
        }
        (None, None) => Ok(()),
    }
}
