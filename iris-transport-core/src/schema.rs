//! Cardinality descriptors and the constant IRIS transport schema tables.
mod descriptor;
pub mod tables;

pub use descriptor::{AttributeDescriptor, ElementDescriptor, MaxOccurs};

/// Namespace of every element in the five transport document shapes.
pub const TRANSPORT_NS: &str = "urn:ietf:params:xml:ns:iris-transport";
