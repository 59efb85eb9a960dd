//! Field-less placeholder block.

use ragemeta_xml::XmlNode;

/// The sentinel sub-handling kind: a tagged item with no fields of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseSubHandling;

impl BaseSubHandling {
    pub const TAG: &'static str = "CBaseSubHandlingData";

    pub fn load(_node: &XmlNode) -> Self {
        Self
    }

    pub fn export(&self) -> XmlNode {
        XmlNode::new("Item").attr("type", Self::TAG)
    }
}
