//! XML element tree for RAGE `.meta` file codecs.
//!
//! RAGE metadata files (`handling.meta`, `vehicles.meta`, ...) are plain
//! UTF-8 XML. This crate provides the small element-tree representation the
//! codecs in this workspace consume and produce: parse a document into an
//! [`XmlNode`] tree, hand the tree to a typed codec, and serialize a tree
//! built by a codec back into declaration-prefixed UTF-8 bytes.
//!
//! # Example
//!
//! ```
//! use ragemeta_xml::{parse_document, XmlNode};
//!
//! let root = parse_document(r#"<Config version="2"><Entry>on</Entry></Config>"#)?;
//! assert_eq!(root.tag, "Config");
//! assert_eq!(root.attr_value("version"), Some("2"));
//! assert_eq!(root.child_named("Entry").map(|n| n.content.as_str()), Some("on"));
//!
//! let rebuilt = XmlNode::new("Config").attr("version", "2");
//! let bytes = rebuilt.to_xml_bytes()?;
//! assert!(bytes.starts_with(b"<?xml"));
//! # Ok::<(), ragemeta_xml::Error>(())
//! ```

mod error;
mod node;
mod parse;
mod write;

pub use error::{Error, Result};
pub use node::XmlNode;
pub use parse::parse_document;
