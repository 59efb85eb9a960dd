//! Parse XML text into an element tree.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::{Error, Result, XmlNode};

/// Parse an XML document into its root [`XmlNode`].
///
/// Declarations, comments, and processing instructions are ignored. Malformed
/// markup is a fatal error; a document without a root element is rejected.
pub fn parse_document(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let mut node = XmlNode::new(tag);

                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = String::from_utf8_lossy(&attr.value).into_owned();
                    node.attributes.push((key, value));
                }

                stack.push(node);
            }
            Ok(Event::Empty(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let mut node = XmlNode::new(tag);

                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = String::from_utf8_lossy(&attr.value).into_owned();
                    node.attributes.push((key, value));
                }

                if let Some(parent) = stack.last_mut() {
                    parent.children.push(node);
                } else {
                    root = Some(node);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    } else {
                        root = Some(node);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = stack.last_mut() {
                    let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                    if !text.trim().is_empty() {
                        node.content = text.into_owned();
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // Ignore declarations, comments, PIs.
            Err(e) => return Err(Error::Xml(format!("XML parse error: {}", e))),
        }
    }

    root.ok_or(Error::NoRoot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let root = parse_document(r#"<Root version="1.0"/>"#).unwrap();
        assert_eq!(root.tag, "Root");
        assert_eq!(root.attr_value("version"), Some("1.0"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_parse_with_declaration() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<CHandlingDataMgr>
  <HandlingData>
    <Item type="CHandlingData"/>
  </HandlingData>
</CHandlingDataMgr>"#;

        let root = parse_document(xml).unwrap();
        assert_eq!(root.tag, "CHandlingDataMgr");
        assert_eq!(root.children.len(), 1);

        let container = root.child_named("HandlingData").unwrap();
        assert_eq!(container.children.len(), 1);
        assert_eq!(container.children[0].attr_value("type"), Some("CHandlingData"));
    }

    #[test]
    fn test_parse_nested() {
        let root = parse_document(
            r#"<A>
                <B attr="1">
                    <C/>
                    <D attr="2"/>
                </B>
                <E/>
            </A>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "A");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "B");
        assert_eq!(root.children[0].children.len(), 2);
        assert_eq!(root.children[1].tag, "E");
    }

    #[test]
    fn test_parse_text_content() {
        let root = parse_document(r#"<Root><Child>Hello World</Child></Root>"#).unwrap();
        assert_eq!(root.children[0].content, "Hello World");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_document(""), Err(Error::NoRoot)));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_document("<Root><Unclosed></Root>"),
            Err(Error::Xml(_))
        ));
    }
}
