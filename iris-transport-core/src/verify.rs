//! Schema-agnostic attribute and child-element checks.
use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::node::{ElementNode, QualifiedName};
use crate::schema::{AttributeDescriptor, ElementDescriptor, MaxOccurs};

/// Check `node`'s attributes against `allowed`.
///
/// Every descriptor is checked in order for its occurrence bounds first;
/// only then are attributes not named by any descriptor reported.
pub fn verify_attributes<E: ElementNode>(
    node: &E,
    allowed: &[AttributeDescriptor],
) -> Result<(), ValidationError> {
    let element = node.tag();
    trace!(element = %element, "verifying attributes");
    let present = node.attributes();

    for descriptor in allowed {
        let count = usize::from(present.contains_key(descriptor.name()));
        if count < descriptor.min_occurs() as usize {
            return Err(ValidationError::MissingAttribute {
                element,
                name: descriptor.name().to_string(),
            });
        }
        if count > descriptor.max_occurs() as usize {
            return Err(ValidationError::TooManyAttributes {
                element,
                name: descriptor.name().to_string(),
                max: descriptor.max_occurs(),
            });
        }
    }

    let unexpected = present
        .into_keys()
        .filter(|name| !allowed.iter().any(|d| d.name() == name.as_str()))
        .collect::<BTreeSet<_>>();
    if !unexpected.is_empty() {
        return Err(ValidationError::UnexpectedAttributes {
            element,
            names: unexpected,
        });
    }

    debug!(element = %element, "attributes valid");
    Ok(())
}

/// Check `node`'s direct children against `allowed`.
///
/// Cardinality is checked per descriptor, in order, before any child whose
/// tag matches no descriptor is reported.
pub fn verify_elements<E: ElementNode>(
    node: &E,
    allowed: &[ElementDescriptor],
) -> Result<(), ValidationError> {
    let element = node.tag();
    trace!(element = %element, "verifying children");
    let tags = node
        .children()
        .iter()
        .map(ElementNode::tag)
        .collect::<Vec<QualifiedName>>();

    for descriptor in allowed {
        let found = tags.iter().filter(|tag| descriptor.matches(tag)).count();
        if let MaxOccurs::Bounded(max) = descriptor.max_occurs() {
            if found > max as usize {
                return Err(ValidationError::TooManyElements {
                    element,
                    name: descriptor.qualified_name(),
                    found,
                    max,
                });
            }
        }
        if found < descriptor.min_occurs() as usize {
            return Err(ValidationError::MissingElement {
                element,
                name: descriptor.qualified_name(),
                found,
                min: descriptor.min_occurs(),
            });
        }
    }

    let unexpected = tags
        .into_iter()
        .filter(|tag| !allowed.iter().any(|d| d.matches(tag)))
        .collect::<BTreeSet<_>>();
    if !unexpected.is_empty() {
        return Err(ValidationError::UnexpectedElements {
            element,
            names: unexpected,
        });
    }

    debug!(element = %element, "children valid");
    Ok(())
}
