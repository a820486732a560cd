//! Descriptor tables for each node of the five transport document shapes.
//!
//! Attribute names are unqualified; element names live in [`TRANSPORT_NS`].
use super::{AttributeDescriptor, ElementDescriptor, TRANSPORT_NS};

pub const TRANSFER_PROTOCOL: &str = "transferProtocol";
pub const APPLICATION: &str = "application";
pub const DATA_MODEL: &str = "dataModel";
pub const REQUEST: &str = "request";
pub const RESPONSE: &str = "response";
pub const EXCEEDS_MAXIMUM: &str = "exceedsMaximum";
pub const OCTETS: &str = "octets";
pub const DESCRIPTION: &str = "description";
pub const DATA: &str = "data";

pub const PROTOCOL_ID: &str = "protocolId";
pub const EXTENSION_IDS: &str = "extensionIds";
pub const LANGUAGE: &str = "language";
pub const TYPE: &str = "type";

pub const NO_ATTRIBUTES: &[AttributeDescriptor] = &[];
pub const NO_CHILDREN: &[ElementDescriptor] = &[];

// versions

pub const VERSIONS_CHILDREN: &[ElementDescriptor] =
    &[ElementDescriptor::repeated(TRANSPORT_NS, TRANSFER_PROTOCOL, 1)];

pub const TRANSFER_PROTOCOL_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::required(PROTOCOL_ID),
    AttributeDescriptor::optional(EXTENSION_IDS),
    AttributeDescriptor::optional("authenticationIds"),
    AttributeDescriptor::optional("responseSizeOctets"),
    AttributeDescriptor::optional("requestSizeOctets"),
];
pub const TRANSFER_PROTOCOL_CHILDREN: &[ElementDescriptor] =
    &[ElementDescriptor::repeated(TRANSPORT_NS, APPLICATION, 0)];

pub const APPLICATION_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::required(PROTOCOL_ID),
    AttributeDescriptor::optional(EXTENSION_IDS),
];
pub const APPLICATION_CHILDREN: &[ElementDescriptor] =
    &[ElementDescriptor::repeated(TRANSPORT_NS, DATA_MODEL, 0)];

pub const DATA_MODEL_ATTRIBUTES: &[AttributeDescriptor] = &[
    AttributeDescriptor::required(PROTOCOL_ID),
    AttributeDescriptor::optional(EXTENSION_IDS),
];

// size

pub const SIZE_CHILDREN: &[ElementDescriptor] = &[
    ElementDescriptor::optional(TRANSPORT_NS, REQUEST),
    ElementDescriptor::optional(TRANSPORT_NS, RESPONSE),
];

pub const OCTETS_TYPE_CHILDREN: &[ElementDescriptor] = &[
    ElementDescriptor::optional(TRANSPORT_NS, EXCEEDS_MAXIMUM),
    ElementDescriptor::optional(TRANSPORT_NS, OCTETS),
];

// authenticationSuccess, authenticationFailure, other

pub const AUTHENTICATION_SUCCESS_CHILDREN: &[ElementDescriptor] = &[
    ElementDescriptor::repeated(TRANSPORT_NS, DESCRIPTION, 0),
    ElementDescriptor::optional(TRANSPORT_NS, DATA),
];

pub const DESCRIPTION_ONLY_CHILDREN: &[ElementDescriptor] =
    &[ElementDescriptor::repeated(TRANSPORT_NS, DESCRIPTION, 0)];

pub const DESCRIPTION_ATTRIBUTES: &[AttributeDescriptor] =
    &[AttributeDescriptor::required(LANGUAGE)];

pub const OTHER_ATTRIBUTES: &[AttributeDescriptor] = &[AttributeDescriptor::required(TYPE)];
