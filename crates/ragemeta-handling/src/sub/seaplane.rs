//! Sea plane physics block: pontoon buoyancy parameters.

use ragemeta_xml::XmlNode;

use crate::field;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaPlaneHandling {
    pub f_left_pontoon_component_id: i32,
    pub f_right_pontoon_component_id: i32,
    pub f_pontoon_buoy_const: f32,
    pub f_pontoon_sample_size_front: f32,
    pub f_pontoon_sample_size_middle: f32,
    pub f_pontoon_sample_size_rear: f32,
    pub f_pontoon_length_fraction_for_samples: f32,
    pub f_pontoon_drag_coefficient: f32,
    pub f_pontoon_vertical_damping_coefficient_up: f32,
    pub f_pontoon_vertical_damping_coefficient_down: f32,
    pub f_keel_sphere_size: f32,
}

impl SeaPlaneHandling {
    pub const TAG: &'static str = "CSeaPlaneHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_left_pontoon_component_id: field::int_attr(node, "fLeftPontoonComponentId"),
            f_right_pontoon_component_id: field::int_attr(node, "fRightPontoonComponentId"),
            f_pontoon_buoy_const: field::float_attr(node, "fPontoonBuoyConst"),
            f_pontoon_sample_size_front: field::float_attr(node, "fPontoonSampleSizeFront"),
            f_pontoon_sample_size_middle: field::float_attr(node, "fPontoonSampleSizeMiddle"),
            f_pontoon_sample_size_rear: field::float_attr(node, "fPontoonSampleSizeRear"),
            f_pontoon_length_fraction_for_samples: field::float_attr(node, "fPontoonLengthFractionForSamples"),
            f_pontoon_drag_coefficient: field::float_attr(node, "fPontoonDragCoefficient"),
            f_pontoon_vertical_damping_coefficient_up: field::float_attr(node, "fPontoonVerticalDampingCoefficientUp"),
            f_pontoon_vertical_damping_coefficient_down: field::float_attr(node, "fPontoonVerticalDampingCoefficientDown"),
            f_keel_sphere_size: field::float_attr(node, "fKeelSphereSize"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_int_attr(&mut item, "fLeftPontoonComponentId", self.f_left_pontoon_component_id);
        field::push_int_attr(&mut item, "fRightPontoonComponentId", self.f_right_pontoon_component_id);
        field::push_float_attr(&mut item, "fPontoonBuoyConst", self.f_pontoon_buoy_const);
        field::push_float_attr(&mut item, "fPontoonSampleSizeFront", self.f_pontoon_sample_size_front);
        field::push_float_attr(&mut item, "fPontoonSampleSizeMiddle", self.f_pontoon_sample_size_middle);
        field::push_float_attr(&mut item, "fPontoonSampleSizeRear", self.f_pontoon_sample_size_rear);
        field::push_float_attr(&mut item, "fPontoonLengthFractionForSamples", self.f_pontoon_length_fraction_for_samples);
        field::push_float_attr(&mut item, "fPontoonDragCoefficient", self.f_pontoon_drag_coefficient);
        field::push_float_attr(&mut item, "fPontoonVerticalDampingCoefficientUp", self.f_pontoon_vertical_damping_coefficient_up);
        field::push_float_attr(&mut item, "fPontoonVerticalDampingCoefficientDown", self.f_pontoon_vertical_damping_coefficient_down);
        field::push_float_attr(&mut item, "fKeelSphereSize", self.f_keel_sphere_size);

        item
    }
}
