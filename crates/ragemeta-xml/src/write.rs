//! Serialize an element tree back to XML.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Error, Result, XmlNode};

impl XmlNode {
    /// Serialize this tree to a UTF-8 string with an XML declaration.
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.to_xml_bytes()?;
        String::from_utf8(bytes).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Serialize this tree to declaration-prefixed UTF-8 bytes.
    pub fn to_xml_bytes(&self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.write_xml(&mut output)?;
        Ok(output)
    }

    /// Write this tree as XML to a writer.
    ///
    /// Output is deterministic: 2-space indentation, attributes and children
    /// in stored order, self-closing tags for childless text-less elements.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

        xml_writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| Error::Xml(e.to_string()))?;

        self.write_element(&mut xml_writer)
    }

    fn write_element<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new(self.tag.as_str());
        for (key, value) in &self.attributes {
            elem.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.content.is_empty() {
            writer
                .write_event(Event::Empty(elem))
                .map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(elem))
            .map_err(|e| Error::Xml(e.to_string()))?;

        if !self.content.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&self.content)))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        for child in &self.children {
            child.write_element(writer)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(self.tag.as_str())))
            .map_err(|e| Error::Xml(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn test_write_declaration_and_empty_root() {
        let xml = XmlNode::new("Root").attr("version", "1.0").to_xml_string().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<Root version="1.0"/>"#));
    }

    #[test]
    fn test_write_text_element() {
        let xml = XmlNode::new("Root")
            .child(XmlNode::new("handlingName").content("ADDER"))
            .to_xml_string()
            .unwrap();
        assert!(xml.contains("<handlingName>ADDER</handlingName>"));
    }

    #[test]
    fn test_round_trip() {
        let original = XmlNode::new("Config")
            .attr("version", "2.0")
            .child(
                XmlNode::new("Setting")
                    .attr("key", "option1")
                    .attr("value", "enabled"),
            )
            .child(XmlNode::new("Note").content("free text"));

        let xml = original.to_xml_string().unwrap();
        let reparsed = parse_document(&xml).unwrap();

        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_write_is_deterministic() {
        let node = XmlNode::new("A")
            .child(XmlNode::new("B").attr("x", "1"))
            .child(XmlNode::new("C").content("t"));

        assert_eq!(node.to_xml_bytes().unwrap(), node.to_xml_bytes().unwrap());
    }

    #[test]
    fn test_escaped_content_round_trips() {
        let node = XmlNode::new("Root").child(XmlNode::new("Entry").content("a < b & c"));
        let xml = node.to_xml_string().unwrap();
        let reparsed = parse_document(&xml).unwrap();
        assert_eq!(reparsed.children[0].content, "a < b & c");
    }
}
