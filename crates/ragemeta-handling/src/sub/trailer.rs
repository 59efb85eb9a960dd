//! Trailer physics block: attachment constraint limits.

use ragemeta_xml::XmlNode;

use crate::field;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailerHandling {
    pub f_attach_limit_pitch: f32,
    pub f_attach_limit_roll: f32,
    pub f_attach_limit_yaw: f32,
    pub f_upright_spring_constant: f32,
    pub f_upright_damping_constant: f32,
    pub f_attached_max_distance: f32,
    pub f_attached_max_penetration: f32,
    pub f_attach_raise_z: f32,
    pub f_pos_constraint_mass_ratio: f32,
}

impl TrailerHandling {
    pub const TAG: &'static str = "CTrailerHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_attach_limit_pitch: field::float_attr(node, "fAttachLimitPitch"),
            f_attach_limit_roll: field::float_attr(node, "fAttachLimitRoll"),
            f_attach_limit_yaw: field::float_attr(node, "fAttachLimitYaw"),
            f_upright_spring_constant: field::float_attr(node, "fUprightSpringConstant"),
            f_upright_damping_constant: field::float_attr(node, "fUprightDampingConstant"),
            f_attached_max_distance: field::float_attr(node, "fAttachedMaxDistance"),
            f_attached_max_penetration: field::float_attr(node, "fAttachedMaxPenetration"),
            f_attach_raise_z: field::float_attr(node, "fAttachRaiseZ"),
            f_pos_constraint_mass_ratio: field::float_attr(node, "fPosConstraintMassRatio"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fAttachLimitPitch", self.f_attach_limit_pitch);
        field::push_float_attr(&mut item, "fAttachLimitRoll", self.f_attach_limit_roll);
        field::push_float_attr(&mut item, "fAttachLimitYaw", self.f_attach_limit_yaw);
        field::push_float_attr(&mut item, "fUprightSpringConstant", self.f_upright_spring_constant);
        field::push_float_attr(&mut item, "fUprightDampingConstant", self.f_upright_damping_constant);
        field::push_float_attr(&mut item, "fAttachedMaxDistance", self.f_attached_max_distance);
        field::push_float_attr(&mut item, "fAttachedMaxPenetration", self.f_attached_max_penetration);
        field::push_float_attr(&mut item, "fAttachRaiseZ", self.f_attach_raise_z);
        field::push_float_attr(&mut item, "fPosConstraintMassRatio", self.f_pos_constraint_mass_ratio);

        item
    }
}
