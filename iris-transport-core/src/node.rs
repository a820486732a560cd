//! Read-only view over parsed XML elements.
//!
//! Validators only ever look at a tree through [`ElementNode`], so any parser
//! that can expose a qualified tag, attributes, child elements and leading
//! text can be validated. The libxml [`Node`] is the implementation used by
//! the file and string entry points.
use std::collections::HashMap;
use std::fmt;

use libxml::tree::{Node, NodeType};

/// Element or attribute name scoped to an optional namespace URI.
///
/// Displayed in Clark notation (`{uri}local`), or as the bare local name when
/// there is no namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    namespace: Option<String>,
    local_name: String,
}

impl QualifiedName {
    pub fn new(namespace: Option<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace,
            local_name: local_name.into(),
        }
    }

    pub fn namespaced(namespace: &str, local_name: &str) -> Self {
        Self::new(Some(namespace.to_string()), local_name)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn matches(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{{{namespace}}}{}", self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// An element of a parsed document.
pub trait ElementNode: Sized {
    fn tag(&self) -> QualifiedName;

    /// Attribute names mapped to their values. Attributes in a namespace are
    /// keyed in Clark notation (`{uri}local`), the rest by their bare name.
    fn attributes(&self) -> HashMap<String, String>;

    /// Direct child elements in document order.
    fn children(&self) -> Vec<Self>;

    /// Text preceding the first child element, with entity references
    /// expanded. `None` when empty.
    fn text(&self) -> Option<String>;

    /// Value of the unqualified attribute `name`.
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes().remove(name)
    }
}

impl ElementNode for Node {
    fn tag(&self) -> QualifiedName {
        let namespace = self.get_namespace().map(|ns| ns.get_href());
        QualifiedName::new(namespace, self.get_name())
    }

    fn attributes(&self) -> HashMap<String, String> {
        self.get_properties_ns()
            .into_iter()
            .map(|((name, namespace), value)| {
                let key = match namespace {
                    Some(ns) => QualifiedName::namespaced(&ns.get_href(), &name).to_string(),
                    None => name,
                };
                (key, value)
            })
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        self.get_child_elements()
    }

    fn text(&self) -> Option<String> {
        let mut text = String::new();
        let mut cursor = self.get_first_child();
        while let Some(child) = cursor {
            match child.get_type() {
                Some(NodeType::ElementNode) => break,
                Some(NodeType::TextNode)
                | Some(NodeType::CDataSectionNode)
                | Some(NodeType::EntityRefNode) => {
                    text.push_str(&child.get_content());
                }
                _ => {}
            }
            cursor = child.get_next_sibling();
        }
        if text.is_empty() { None } else { Some(text) }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_property_no_ns(name)
    }
}
