//! Text-content checks the structural verifiers cannot express.
use std::num::IntErrorKind;

use base64ct::{Base64, Encoding};

use crate::error::ValidationError;
use crate::node::QualifiedName;

/// An octet count must be a positive integer, surrounding whitespace aside.
///
/// Digits may be grouped with single underscores (`1_000`). Magnitudes
/// beyond `i64` are still integers: a positive overflow conforms and a
/// negative one is out of range.
pub(crate) fn check_octets(element: &QualifiedName, text: Option<&str>) -> Result<(), ValidationError> {
    let value = text.unwrap_or_default().trim();
    let non_integer = || ValidationError::NonIntegerValue {
        element: element.clone(),
        value: value.to_string(),
    };
    let digits = ungroup_digits(value).ok_or_else(non_integer)?;
    let in_range = match digits.parse::<i64>() {
        Ok(octets) => octets > 0,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => true,
            IntErrorKind::NegOverflow => false,
            _ => return Err(non_integer()),
        },
    };
    if !in_range {
        return Err(ValidationError::NonPositiveValue {
            element: element.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Drops grouping underscores; each one must sit between two digits.
fn ungroup_digits(value: &str) -> Option<String> {
    if !value.contains('_') {
        return Some(value.to_string());
    }
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let well_grouped = unsigned
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    well_grouped.then(|| value.replace('_', ""))
}

/// Payload must survive a decode/encode round trip unchanged.
pub(crate) fn check_base64(element: &QualifiedName, text: Option<&str>) -> Result<(), ValidationError> {
    let value = text.unwrap_or_default();
    let round_trips = !value.is_empty()
        && Base64::decode_vec(value)
            .map(|bytes| Base64::encode_string(&bytes) == value)
            .unwrap_or(false);
    if !round_trips {
        return Err(ValidationError::InvalidBase64 {
            element: element.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}
