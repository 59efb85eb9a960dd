//! The XML element tree.

/// One element in an XML document.
///
/// A node owns its tag name, optional text content, attributes in document
/// order, and child elements in document order. Codecs build trees bottom-up
/// with the builder methods and read them back with the query helpers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Tag name of the element.
    pub tag: String,
    /// Text content (empty for container elements).
    pub content: String,
    /// Attributes as key-value pairs, in document order.
    pub attributes: Vec<(String, String)>,
    /// Child elements, in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create a new node with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the text content of this node.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Add an attribute to this node.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child node.
    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append an attribute in place.
    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Look up an attribute value by key.
    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Find the first child element with the given tag name.
    pub fn child_named(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Iterate over all child elements with the given tag name.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let node = XmlNode::new("Material")
            .attr("Name", "TestMaterial")
            .child(XmlNode::new("Texture").attr("File", "test.dds"))
            .child(XmlNode::new("Texture").attr("File", "other.dds"));

        assert_eq!(node.tag, "Material");
        assert_eq!(node.attr_value("Name"), Some("TestMaterial"));
        assert_eq!(node.attr_value("Missing"), None);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children_named("Texture").count(), 2);
    }

    #[test]
    fn test_child_named_returns_first_match() {
        let node = XmlNode::new("Root")
            .child(XmlNode::new("Entry").content("first"))
            .child(XmlNode::new("Entry").content("second"));

        assert_eq!(node.child_named("Entry").unwrap().content, "first");
        assert!(node.child_named("Other").is_none());
    }
}
