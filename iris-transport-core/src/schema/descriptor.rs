use std::fmt;

use crate::node::QualifiedName;

/// Upper occurrence bound of a child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    Bounded(u32),
    Unbounded,
}

impl MaxOccurs {
    pub fn admits(self, count: usize) -> bool {
        match self {
            MaxOccurs::Bounded(max) => count <= max as usize,
            MaxOccurs::Unbounded => true,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxOccurs::Bounded(max) => write!(f, "{max}"),
            MaxOccurs::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// One attribute an element may carry.
///
/// Attribute names are unique per element, so the observed count is always
/// 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    name: &'static str,
    min_occurs: u32,
    max_occurs: u32,
}

impl AttributeDescriptor {
    pub const fn new(name: &'static str, min_occurs: u32, max_occurs: u32) -> Self {
        assert!(max_occurs >= min_occurs, "max_occurs must not be below min_occurs");
        Self {
            name,
            min_occurs,
            max_occurs,
        }
    }

    pub const fn required(name: &'static str) -> Self {
        Self::new(name, 1, 1)
    }

    pub const fn optional(name: &'static str) -> Self {
        Self::new(name, 0, 1)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    pub fn max_occurs(&self) -> u32 {
        self.max_occurs
    }
}

/// One child element an element may contain, with its cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDescriptor {
    namespace: &'static str,
    name: &'static str,
    min_occurs: u32,
    max_occurs: MaxOccurs,
}

impl ElementDescriptor {
    pub const fn new(
        namespace: &'static str,
        name: &'static str,
        min_occurs: u32,
        max_occurs: MaxOccurs,
    ) -> Self {
        if let MaxOccurs::Bounded(max) = max_occurs {
            assert!(max >= min_occurs, "max_occurs must not be below min_occurs");
        }
        Self {
            namespace,
            name,
            min_occurs,
            max_occurs,
        }
    }

    /// Exactly one occurrence.
    pub const fn required(namespace: &'static str, name: &'static str) -> Self {
        Self::new(namespace, name, 1, MaxOccurs::Bounded(1))
    }

    /// Zero or one occurrence.
    pub const fn optional(namespace: &'static str, name: &'static str) -> Self {
        Self::new(namespace, name, 0, MaxOccurs::Bounded(1))
    }

    /// At least `min_occurs`, no upper limit.
    pub const fn repeated(namespace: &'static str, name: &'static str, min_occurs: u32) -> Self {
        Self::new(namespace, name, min_occurs, MaxOccurs::Unbounded)
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    pub fn max_occurs(&self) -> MaxOccurs {
        self.max_occurs
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::namespaced(self.namespace, self.name)
    }

    pub fn matches(&self, tag: &QualifiedName) -> bool {
        tag.matches(self.namespace, self.name)
    }
}
