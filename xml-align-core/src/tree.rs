use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A generic XML element node.
///
/// Attributes are kept as an ordered list of `(name, value)` pairs rather
/// than a map so that re-serialized output preserves document order —
/// the whole point of alignment is to keep output line-diffable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XmlNode {
    /// Qualified tag name exactly as written (optional `prefix:` plus local name).
    pub tag: String,
    /// XML attributes in document order. Names are unique within an element.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content of the element itself.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create a new XML node with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Return the value of the attribute with the exact given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Tag names of the direct children, in document order.
    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.tag.as_str()).collect()
    }
}

impl Display for XmlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }

        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }

        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", text)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
