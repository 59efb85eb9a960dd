//! File-level codec for `handling.meta` documents.

use std::fs;
use std::path::Path;

use ragemeta_xml::{parse_document, XmlNode};

use crate::{Error, HandlingData, Result};

/// Root element of a handling document.
const ROOT_TAG: &str = "CHandlingDataMgr";

/// Container element holding the repeated record items.
const CONTAINER_TAG: &str = "HandlingData";

/// Extension handling files are stored under.
const META_EXT: &str = "meta";

/// A loaded handling file: the ordered collection of vehicle records.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlingFile {
    /// Records in document order.
    pub handlings: Vec<HandlingData>,
}

impl HandlingFile {
    /// Load from a parsed document root.
    ///
    /// Records live at the fixed path `CHandlingDataMgr/HandlingData`, one
    /// per `Item` child (the item tag is matched case-insensitively; some
    /// shipped files use lowercase `item`). A document without that path
    /// yields an empty file rather than an error; only malformed markup is
    /// fatal, at the parse stage.
    pub fn from_document(root: &XmlNode) -> Self {
        let container = if root.tag == ROOT_TAG {
            root.child_named(CONTAINER_TAG)
        } else {
            None
        };

        let Some(container) = container else {
            return Self::default();
        };

        let items: Vec<&XmlNode> = container
            .children
            .iter()
            .filter(|c| c.tag.eq_ignore_ascii_case("Item"))
            .collect();

        Self {
            handlings: Self::load_records(&items),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn load_records(items: &[&XmlNode]) -> Vec<HandlingData> {
        items.iter().map(|node| HandlingData::load(node)).collect()
    }

    /// Records are independent, so loading fans out across threads; collect
    /// preserves document order.
    #[cfg(feature = "parallel")]
    fn load_records(items: &[&XmlNode]) -> Vec<HandlingData> {
        use rayon::prelude::*;

        items.par_iter().map(|node| HandlingData::load(node)).collect()
    }

    /// Parse UTF-8 XML text and load it.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = parse_document(xml)?;
        Ok(Self::from_document(&root))
    }

    /// Read and load a `.meta` file from disk.
    pub fn from_meta<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.extension().and_then(|e| e.to_str()) != Some(META_EXT) {
            return Err(Error::InvalidExtension {
                expected: META_EXT.to_string(),
                actual: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("")
                    .to_string(),
            });
        }

        let xml = fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }

    /// Export to a document tree rooted at `CHandlingDataMgr`.
    ///
    /// Export only reads the model; calling it twice produces identical
    /// trees.
    pub fn to_document(&self) -> XmlNode {
        let mut container = XmlNode::new(CONTAINER_TAG);
        for handling in &self.handlings {
            container.push_child(handling.export());
        }

        XmlNode::new(ROOT_TAG).child(container)
    }

    /// Export to declaration-prefixed UTF-8 bytes.
    pub fn to_xml_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_document().to_xml_bytes()?)
    }

    /// Export and write to a `.meta` file on disk.
    pub fn write_to_meta<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if path.extension().and_then(|e| e.to_str()) != Some(META_EXT) {
            return Err(Error::InvalidExtension {
                expected: META_EXT.to_string(),
                actual: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("")
                    .to_string(),
            });
        }

        fs::write(path, self.to_xml_bytes()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_case_insensitive_item_tag() {
        let upper = r#"<CHandlingDataMgr><HandlingData>
            <Item type="CHandlingData"><handlingName>ADDER</handlingName></Item>
        </HandlingData></CHandlingDataMgr>"#;
        let lower = r#"<CHandlingDataMgr><HandlingData>
            <item type="CHandlingData"><handlingName>ADDER</handlingName></item>
        </HandlingData></CHandlingDataMgr>"#;

        let from_upper = HandlingFile::from_xml(upper).unwrap();
        let from_lower = HandlingFile::from_xml(lower).unwrap();

        assert_eq!(from_upper, from_lower);
        assert_eq!(from_upper.handlings.len(), 1);
        assert_eq!(from_upper.handlings[0].handling_name, "ADDER");
    }

    #[test]
    fn test_missing_container_yields_empty_file() {
        let file = HandlingFile::from_xml("<CHandlingDataMgr/>").unwrap();
        assert!(file.handlings.is_empty());

        let file = HandlingFile::from_xml("<SomethingElse/>").unwrap();
        assert!(file.handlings.is_empty());
    }

    #[test]
    fn test_malformed_markup_is_fatal() {
        assert!(HandlingFile::from_xml("<CHandlingDataMgr><HandlingData>").is_err());
    }

    #[test]
    fn test_record_order_is_preserved() {
        let xml = r#"<CHandlingDataMgr><HandlingData>
            <Item><handlingName>FIRST</handlingName></Item>
            <Item><handlingName>SECOND</handlingName></Item>
            <Item><handlingName>THIRD</handlingName></Item>
        </HandlingData></CHandlingDataMgr>"#;

        let file = HandlingFile::from_xml(xml).unwrap();
        let names: Vec<&str> = file
            .handlings
            .iter()
            .map(|h| h.handling_name.as_str())
            .collect();
        assert_eq!(names, ["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_export_structure_and_declaration() {
        let file = HandlingFile {
            handlings: vec![HandlingData {
                handling_name: "ADDER".to_string(),
                ..Default::default()
            }],
        };

        let bytes = file.to_xml_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(text.contains("<CHandlingDataMgr>"));
        assert!(text.contains("<HandlingData>"));
        assert!(text.contains(r#"<Item type="CHandlingData">"#));
    }

    #[test]
    fn test_extension_gate() {
        let err = HandlingFile::from_meta("handling.xml").unwrap_err();
        assert!(matches!(err, Error::InvalidExtension { .. }));

        let file = HandlingFile::default();
        let err = file.write_to_meta("out.txt").unwrap_err();
        assert!(matches!(err, Error::InvalidExtension { .. }));
    }
}
