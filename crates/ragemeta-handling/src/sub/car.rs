//! Car physics block: alignment geometry plus nested advanced tuning data.

use ragemeta_xml::XmlNode;

use super::AdvancedData;
use crate::field;

/// Wheel alignment and drivetrain extras for ground vehicles.
///
/// Unlike the top-level sub-handling container, the nested `AdvancedData`
/// container is not tag-dispatched: every `Item` child is unconditionally an
/// [`AdvancedData`] entry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarHandling {
    pub f_back_end_pop_up_car_impulse_mult: f32,
    pub f_back_end_pop_up_building_impulse_mult: f32,
    pub f_back_end_pop_up_max_delta_speed: f32,
    pub f_camber_front: f32,
    pub f_castor: f32,
    pub f_toe_front: f32,
    pub f_camber_rear: f32,
    pub f_toe_rear: f32,
    pub f_engine_resistance: f32,
    pub f_max_drive_bias_transfer: f32,
    pub f_jump_force_scale: f32,
    pub str_advanced_flags: String,
    pub advanced_data: Option<Vec<AdvancedData>>,
}

impl CarHandling {
    pub const TAG: &'static str = "CCarHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_back_end_pop_up_car_impulse_mult: field::float_attr(node, "fBackEndPopUpCarImpulseMult"),
            f_back_end_pop_up_building_impulse_mult: field::float_attr(node, "fBackEndPopUpBuildingImpulseMult"),
            f_back_end_pop_up_max_delta_speed: field::float_attr(node, "fBackEndPopUpMaxDeltaSpeed"),
            f_camber_front: field::float_attr(node, "fCamberFront"),
            f_castor: field::float_attr(node, "fCastor"),
            f_toe_front: field::float_attr(node, "fToeFront"),
            f_camber_rear: field::float_attr(node, "fCamberRear"),
            f_toe_rear: field::float_attr(node, "fToeRear"),
            f_engine_resistance: field::float_attr(node, "fEngineResistance"),
            f_max_drive_bias_transfer: field::float_attr(node, "fMaxDriveBiasTransfer"),
            f_jump_force_scale: field::float_attr(node, "fJumpForceScale"),
            str_advanced_flags: field::text(node, "strAdvancedFlags"),
            advanced_data: Self::advanced_data_array(node, "AdvancedData"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fBackEndPopUpCarImpulseMult", self.f_back_end_pop_up_car_impulse_mult);
        field::push_float_attr(&mut item, "fBackEndPopUpBuildingImpulseMult", self.f_back_end_pop_up_building_impulse_mult);
        field::push_float_attr(&mut item, "fBackEndPopUpMaxDeltaSpeed", self.f_back_end_pop_up_max_delta_speed);
        field::push_float_attr(&mut item, "fCamberFront", self.f_camber_front);
        field::push_float_attr(&mut item, "fCastor", self.f_castor);
        field::push_float_attr(&mut item, "fToeFront", self.f_toe_front);
        field::push_float_attr(&mut item, "fCamberRear", self.f_camber_rear);
        field::push_float_attr(&mut item, "fToeRear", self.f_toe_rear);
        field::push_float_attr(&mut item, "fEngineResistance", self.f_engine_resistance);
        field::push_float_attr(&mut item, "fMaxDriveBiasTransfer", self.f_max_drive_bias_transfer);
        field::push_float_attr(&mut item, "fJumpForceScale", self.f_jump_force_scale);
        field::push_text(&mut item, "strAdvancedFlags", &self.str_advanced_flags);

        if let Some(entries) = &self.advanced_data {
            let mut container = XmlNode::new("AdvancedData");
            for entry in entries {
                container.push_child(entry.export());
            }
            item.push_child(container);
        }

        item
    }

    fn advanced_data_array(node: &XmlNode, name: &str) -> Option<Vec<AdvancedData>> {
        let container = node.child_named(name)?;
        let entries: Vec<AdvancedData> = container
            .children_named("Item")
            .map(AdvancedData::load)
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_advanced_entries_round_trip_in_order() {
        let car = CarHandling {
            f_camber_front: -0.015,
            advanced_data: Some(vec![
                AdvancedData { slot: 0, index: 1, value: 0.5 },
                AdvancedData { slot: 1, index: 0, value: -2.25 },
            ]),
            ..Default::default()
        };

        let node = car.export();
        let container = node.child_named("AdvancedData").unwrap();
        assert_eq!(container.children.len(), 2);
        assert_eq!(
            container.children[1].child_named("Value").unwrap().attr_value("value"),
            Some("-2.250000")
        );

        assert_eq!(CarHandling::load(&node), car);
    }

    #[test]
    fn test_missing_advanced_container_is_absent() {
        let car = CarHandling::load(&XmlNode::new("Item"));
        assert_eq!(car.advanced_data, None);

        // And an absent container is omitted on export.
        assert!(car.export().child_named("AdvancedData").is_none());
    }
}
