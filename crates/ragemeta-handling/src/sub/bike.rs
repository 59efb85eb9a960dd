//! Bike physics block: lean, wheelie, and balance parameters.

use ragemeta_xml::XmlNode;

use crate::field;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BikeHandling {
    pub f_lean_fwd_com_mult: f32,
    pub f_lean_fwd_force_mult: f32,
    pub f_lean_bak_com_mult: f32,
    pub f_lean_bak_force_mult: f32,
    pub f_max_bank_angle: f32,
    pub f_full_anim_angle: f32,
    pub f_des_lean_return_frac: f32,
    pub f_stick_lean_mult: f32,
    pub f_braking_stability_mult: f32,
    pub f_in_air_steer_mult: f32,
    pub f_wheelie_balance_point: f32,
    pub f_stoppie_balance_point: f32,
    pub f_wheelie_steer_mult: f32,
    pub f_rear_balance_mult: f32,
    pub f_front_balance_mult: f32,
    pub f_bike_ground_side_friction_mult: f32,
    pub f_bike_wheel_ground_side_friction_mult: f32,
    pub f_bike_on_stand_lean_angle: f32,
    pub f_bike_on_stand_steer_angle: f32,
    pub f_jump_force: f32,
}

impl BikeHandling {
    pub const TAG: &'static str = "CBikeHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_lean_fwd_com_mult: field::float_attr(node, "fLeanFwdCOMMult"),
            f_lean_fwd_force_mult: field::float_attr(node, "fLeanFwdForceMult"),
            f_lean_bak_com_mult: field::float_attr(node, "fLeanBakCOMMult"),
            f_lean_bak_force_mult: field::float_attr(node, "fLeanBakForceMult"),
            f_max_bank_angle: field::float_attr(node, "fMaxBankAngle"),
            f_full_anim_angle: field::float_attr(node, "fFullAnimAngle"),
            f_des_lean_return_frac: field::float_attr(node, "fDesLeanReturnFrac"),
            f_stick_lean_mult: field::float_attr(node, "fStickLeanMult"),
            f_braking_stability_mult: field::float_attr(node, "fBrakingStabilityMult"),
            f_in_air_steer_mult: field::float_attr(node, "fInAirSteerMult"),
            f_wheelie_balance_point: field::float_attr(node, "fWheelieBalancePoint"),
            f_stoppie_balance_point: field::float_attr(node, "fStoppieBalancePoint"),
            f_wheelie_steer_mult: field::float_attr(node, "fWheelieSteerMult"),
            f_rear_balance_mult: field::float_attr(node, "fRearBalanceMult"),
            f_front_balance_mult: field::float_attr(node, "fFrontBalanceMult"),
            f_bike_ground_side_friction_mult: field::float_attr(node, "fBikeGroundSideFrictionMult"),
            f_bike_wheel_ground_side_friction_mult: field::float_attr(node, "fBikeWheelGroundSideFrictionMult"),
            f_bike_on_stand_lean_angle: field::float_attr(node, "fBikeOnStandLeanAngle"),
            f_bike_on_stand_steer_angle: field::float_attr(node, "fBikeOnStandSteerAngle"),
            f_jump_force: field::float_attr(node, "fJumpForce"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fLeanFwdCOMMult", self.f_lean_fwd_com_mult);
        field::push_float_attr(&mut item, "fLeanFwdForceMult", self.f_lean_fwd_force_mult);
        field::push_float_attr(&mut item, "fLeanBakCOMMult", self.f_lean_bak_com_mult);
        field::push_float_attr(&mut item, "fLeanBakForceMult", self.f_lean_bak_force_mult);
        field::push_float_attr(&mut item, "fMaxBankAngle", self.f_max_bank_angle);
        field::push_float_attr(&mut item, "fFullAnimAngle", self.f_full_anim_angle);
        field::push_float_attr(&mut item, "fDesLeanReturnFrac", self.f_des_lean_return_frac);
        field::push_float_attr(&mut item, "fStickLeanMult", self.f_stick_lean_mult);
        field::push_float_attr(&mut item, "fBrakingStabilityMult", self.f_braking_stability_mult);
        field::push_float_attr(&mut item, "fInAirSteerMult", self.f_in_air_steer_mult);
        field::push_float_attr(&mut item, "fWheelieBalancePoint", self.f_wheelie_balance_point);
        field::push_float_attr(&mut item, "fStoppieBalancePoint", self.f_stoppie_balance_point);
        field::push_float_attr(&mut item, "fWheelieSteerMult", self.f_wheelie_steer_mult);
        field::push_float_attr(&mut item, "fRearBalanceMult", self.f_rear_balance_mult);
        field::push_float_attr(&mut item, "fFrontBalanceMult", self.f_front_balance_mult);
        field::push_float_attr(&mut item, "fBikeGroundSideFrictionMult", self.f_bike_ground_side_friction_mult);
        field::push_float_attr(&mut item, "fBikeWheelGroundSideFrictionMult", self.f_bike_wheel_ground_side_friction_mult);
        field::push_float_attr(&mut item, "fBikeOnStandLeanAngle", self.f_bike_on_stand_lean_angle);
        field::push_float_attr(&mut item, "fBikeOnStandSteerAngle", self.f_bike_on_stand_steer_angle);
        field::push_float_attr(&mut item, "fJumpForce", self.f_jump_force);

        item
    }
}
