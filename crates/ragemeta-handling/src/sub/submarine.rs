//! Submarine physics block.

use ragemeta_xml::XmlNode;

use crate::field;
use crate::Vector3;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmarineHandling {
    pub f_pitch_mult: f32,
    pub f_pitch_angle: f32,
    pub f_yaw_mult: f32,
    pub f_dive_speed: f32,
    pub f_roll_mult: f32,
    pub f_roll_stab: f32,
    pub v_turn_res: Vector3,
    pub f_move_res_xy: f32,
    pub f_move_res_z: f32,
}

impl SubmarineHandling {
    pub const TAG: &'static str = "CSubmarineHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_pitch_mult: field::float_attr(node, "fPitchMult"),
            f_pitch_angle: field::float_attr(node, "fPitchAngle"),
            f_yaw_mult: field::float_attr(node, "fYawMult"),
            f_dive_speed: field::float_attr(node, "fDiveSpeed"),
            f_roll_mult: field::float_attr(node, "fRollMult"),
            f_roll_stab: field::float_attr(node, "fRollStab"),
            v_turn_res: field::vector3(node, "vTurnRes"),
            f_move_res_xy: field::float_attr(node, "fMoveResXY"),
            f_move_res_z: field::float_attr(node, "fMoveResZ"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fPitchMult", self.f_pitch_mult);
        field::push_float_attr(&mut item, "fPitchAngle", self.f_pitch_angle);
        field::push_float_attr(&mut item, "fYawMult", self.f_yaw_mult);
        field::push_float_attr(&mut item, "fDiveSpeed", self.f_dive_speed);
        field::push_float_attr(&mut item, "fRollMult", self.f_roll_mult);
        field::push_float_attr(&mut item, "fRollStab", self.f_roll_stab);
        field::push_vector3(&mut item, "vTurnRes", self.v_turn_res);
        field::push_float_attr(&mut item, "fMoveResXY", self.f_move_res_xy);
        field::push_float_attr(&mut item, "fMoveResZ", self.f_move_res_z);

        item
    }
}
