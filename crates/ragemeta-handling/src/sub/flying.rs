//! Flying physics block: thrust, lift, and control-surface parameters for
//! planes and helicopters.

use ragemeta_xml::XmlNode;

use crate::field;
use crate::Vector3;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlyingHandling {
    pub f_thrust: f32,
    pub f_thrust_fall_off: f32,
    pub f_thrust_vectoring: f32,
    pub f_yaw_mult: f32,
    pub f_yaw_stabilise: f32,
    pub f_side_slip_mult: f32,
    pub f_roll_mult: f32,
    pub f_roll_stabilise: f32,
    pub f_pitch_mult: f32,
    pub f_pitch_stabilise: f32,
    pub f_form_lift_mult: f32,
    pub f_attack_lift_mult: f32,
    pub f_attack_dive_mult: f32,
    pub f_gear_down_drag_v: f32,
    pub f_gear_down_lift_mult: f32,
    pub f_wind_mult: f32,
    pub f_move_res: f32,
    pub vec_turn_res: Vector3,
    pub vec_speed_res: Vector3,
    pub f_gear_door_front_open: f32,
    pub f_gear_door_rear_open: f32,
    pub f_gear_door_rear_open2: f32,
    pub f_gear_door_rear_m_open: f32,
    pub f_turublence_magnitude_max: f32,
    pub f_turublence_force_multi: f32,
    pub f_turublence_roll_torque_multi: f32,
    pub f_turublence_pitch_torque_multi: f32,
    pub f_body_damage_control_effect_mult: f32,
    pub f_input_sensitivity_for_difficulty: f32,
    pub f_on_ground_yaw_boost_speed_peak: f32,
    pub f_on_ground_yaw_boost_speed_cap: f32,
    pub f_engine_off_glide_multi: f32,
    pub f_submerge_level_to_pull_heli_underwater: f32,
    pub handling_type: String,
}

impl FlyingHandling {
    pub const TAG: &'static str = "CFlyingHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_thrust: field::float_attr(node, "fThrust"),
            f_thrust_fall_off: field::float_attr(node, "fThrustFallOff"),
            f_thrust_vectoring: field::float_attr(node, "fThrustVectoring"),
            f_yaw_mult: field::float_attr(node, "fYawMult"),
            f_yaw_stabilise: field::float_attr(node, "fYawStabilise"),
            f_side_slip_mult: field::float_attr(node, "fSideSlipMult"),
            f_roll_mult: field::float_attr(node, "fRollMult"),
            f_roll_stabilise: field::float_attr(node, "fRollStabilise"),
            f_pitch_mult: field::float_attr(node, "fPitchMult"),
            f_pitch_stabilise: field::float_attr(node, "fPitchStabilise"),
            f_form_lift_mult: field::float_attr(node, "fFormLiftMult"),
            f_attack_lift_mult: field::float_attr(node, "fAttackLiftMult"),
            f_attack_dive_mult: field::float_attr(node, "fAttackDiveMult"),
            f_gear_down_drag_v: field::float_attr(node, "fGearDownDragV"),
            f_gear_down_lift_mult: field::float_attr(node, "fGearDownLiftMult"),
            f_wind_mult: field::float_attr(node, "fWindMult"),
            f_move_res: field::float_attr(node, "fMoveRes"),
            vec_turn_res: field::vector3(node, "vecTurnRes"),
            vec_speed_res: field::vector3(node, "vecSpeedRes"),
            f_gear_door_front_open: field::float_attr(node, "fGearDoorFrontOpen"),
            f_gear_door_rear_open: field::float_attr(node, "fGearDoorRearOpen"),
            f_gear_door_rear_open2: field::float_attr(node, "fGearDoorRearOpen2"),
            f_gear_door_rear_m_open: field::float_attr(node, "fGearDoorRearMOpen"),
            f_turublence_magnitude_max: field::float_attr(node, "fTurublenceMagnitudeMax"),
            f_turublence_force_multi: field::float_attr(node, "fTurublenceForceMulti"),
            f_turublence_roll_torque_multi: field::float_attr(node, "fTurublenceRollTorqueMulti"),
            f_turublence_pitch_torque_multi: field::float_attr(node, "fTurublencePitchTorqueMulti"),
            f_body_damage_control_effect_mult: field::float_attr(node, "fBodyDamageControlEffectMult"),
            f_input_sensitivity_for_difficulty: field::float_attr(node, "fInputSensitivityForDifficulty"),
            f_on_ground_yaw_boost_speed_peak: field::float_attr(node, "fOnGroundYawBoostSpeedPeak"),
            f_on_ground_yaw_boost_speed_cap: field::float_attr(node, "fOnGroundYawBoostSpeedCap"),
            f_engine_off_glide_multi: field::float_attr(node, "fEngineOffGlideMulti"),
            f_submerge_level_to_pull_heli_underwater: field::float_attr(node, "fSubmergeLevelToPullHeliUnderwater"),
            handling_type: field::text(node, "handlingType"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fThrust", self.f_thrust);
        field::push_float_attr(&mut item, "fThrustFallOff", self.f_thrust_fall_off);
        field::push_float_attr(&mut item, "fThrustVectoring", self.f_thrust_vectoring);
        field::push_float_attr(&mut item, "fYawMult", self.f_yaw_mult);
        field::push_float_attr(&mut item, "fYawStabilise", self.f_yaw_stabilise);
        field::push_float_attr(&mut item, "fSideSlipMult", self.f_side_slip_mult);
        field::push_float_attr(&mut item, "fRollMult", self.f_roll_mult);
        field::push_float_attr(&mut item, "fRollStabilise", self.f_roll_stabilise);
        field::push_float_attr(&mut item, "fPitchMult", self.f_pitch_mult);
        field::push_float_attr(&mut item, "fPitchStabilise", self.f_pitch_stabilise);
        field::push_float_attr(&mut item, "fFormLiftMult", self.f_form_lift_mult);
        field::push_float_attr(&mut item, "fAttackLiftMult", self.f_attack_lift_mult);
        field::push_float_attr(&mut item, "fAttackDiveMult", self.f_attack_dive_mult);
        field::push_float_attr(&mut item, "fGearDownDragV", self.f_gear_down_drag_v);
        field::push_float_attr(&mut item, "fGearDownLiftMult", self.f_gear_down_lift_mult);
        field::push_float_attr(&mut item, "fWindMult", self.f_wind_mult);
        field::push_float_attr(&mut item, "fMoveRes", self.f_move_res);
        field::push_vector3(&mut item, "vecTurnRes", self.vec_turn_res);
        field::push_vector3(&mut item, "vecSpeedRes", self.vec_speed_res);
        field::push_float_attr(&mut item, "fGearDoorFrontOpen", self.f_gear_door_front_open);
        field::push_float_attr(&mut item, "fGearDoorRearOpen", self.f_gear_door_rear_open);
        field::push_float_attr(&mut item, "fGearDoorRearOpen2", self.f_gear_door_rear_open2);
        field::push_float_attr(&mut item, "fGearDoorRearMOpen", self.f_gear_door_rear_m_open);
        field::push_float_attr(&mut item, "fTurublenceMagnitudeMax", self.f_turublence_magnitude_max);
        field::push_float_attr(&mut item, "fTurublenceForceMulti", self.f_turublence_force_multi);
        field::push_float_attr(&mut item, "fTurublenceRollTorqueMulti", self.f_turublence_roll_torque_multi);
        field::push_float_attr(&mut item, "fTurublencePitchTorqueMulti", self.f_turublence_pitch_torque_multi);
        field::push_float_attr(&mut item, "fBodyDamageControlEffectMult", self.f_body_damage_control_effect_mult);
        field::push_float_attr(&mut item, "fInputSensitivityForDifficulty", self.f_input_sensitivity_for_difficulty);
        field::push_float_attr(&mut item, "fOnGroundYawBoostSpeedPeak", self.f_on_ground_yaw_boost_speed_peak);
        field::push_float_attr(&mut item, "fOnGroundYawBoostSpeedCap", self.f_on_ground_yaw_boost_speed_cap);
        field::push_float_attr(&mut item, "fEngineOffGlideMulti", self.f_engine_off_glide_multi);
        field::push_float_attr(&mut item, "fSubmergeLevelToPullHeliUnderwater", self.f_submerge_level_to_pull_heli_underwater);
        field::push_text(&mut item, "handlingType", &self.handling_type);

        item
    }
}
