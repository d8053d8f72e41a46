//! Minimal owned XML tree used for both request payloads and parsed responses.
//!
//! Element and attribute names are kept qualified (`dat:Name`) exactly as they
//! appear on the wire. Lookups by local name ignore the prefix, because the
//! service is inconsistent about which prefix it binds in a given response.

mod parse;
mod write;

pub use parse::parse;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    pub text: String,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element with text content only.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Attribute value by local name. Namespace declarations are skipped.
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .filter(|(name, _)| name != "xmlns" && !name.starts_with("xmlns:"))
            .find(|(name, _)| local_part(name) == local_name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn child(&self, local_name: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| child.local_name() == local_name)
    }

    pub fn children_named<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children
            .iter()
            .filter(move |child| child.local_name() == local_name)
    }

    /// Follow a chain of child local names.
    pub fn path(&self, segments: &[&str]) -> Option<&XmlNode> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn child_text(&self, local_name: &str) -> Option<&str> {
        self.child(local_name).map(XmlNode::text)
    }

    /// Every element below this one, in document order.
    pub fn descendants(&self) -> Vec<&XmlNode> {
        let mut found = Vec::new();
        let mut pending: Vec<&XmlNode> = self.children.iter().rev().collect();

        while let Some(node) = pending.pop() {
            found.push(node);
            pending.extend(node.children.iter().rev());
        }

        found
    }

    /// Serialize without an XML declaration.
    pub fn to_xml_string(&self) -> Result<String, crate::error::XmlError> {
        write::to_string(self)
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
