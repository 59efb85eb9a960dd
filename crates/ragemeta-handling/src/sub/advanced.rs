//! Advanced tuning entry: a single slot/index/value triple.
//!
//! Appears both as a standalone sub-handling block and nested in the Car
//! block's `AdvancedData` container.

use ragemeta_xml::XmlNode;

use crate::field;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancedData {
    pub slot: i32,
    pub index: i32,
    pub value: f32,
}

impl AdvancedData {
    pub const TAG: &'static str = "CAdvancedData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            slot: field::int_attr(node, "Slot"),
            index: field::int_attr(node, "Index"),
            value: field::float_attr(node, "Value"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_int_attr(&mut item, "Slot", self.slot);
        field::push_int_attr(&mut item, "Index", self.index);
        field::push_float_attr(&mut item, "Value", self.value);

        item
    }
}
