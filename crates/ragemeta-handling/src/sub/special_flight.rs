//! Special flight block: hover/VTOL transition parameters.

use ragemeta_xml::XmlNode;

use crate::field;
use crate::Vector3;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialFlightHandling {
    pub mode: i32,
    pub f_lift_coefficient: f32,
    pub f_min_lift_velocity: f32,
    pub f_drag_coefficient: f32,
    pub f_max_pitch_torque: f32,
    pub f_max_steering_roll_torque: f32,
    pub f_max_thrust: f32,
    pub f_yaw_torque_scale: f32,
    pub f_roll_torque_scale: f32,
    pub f_transition_duration: f32,
    pub f_pitch_torque_scale: f32,
    pub vec_angular_damping: Vector3,
    pub vec_angular_damping_min: Vector3,
    pub vec_linear_damping: Vector3,
    pub vec_linear_damping_min: Vector3,
    pub f_hover_velocity_scale: f32,
    pub f_min_speed_for_thrust_falloff: f32,
    pub f_braking_thrust_scale: f32,
    pub str_flags: String,
}

impl SpecialFlightHandling {
    pub const TAG: &'static str = "CSpecialFlightHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            mode: field::int_attr(node, "mode"),
            f_lift_coefficient: field::float_attr(node, "fLiftCoefficient"),
            f_min_lift_velocity: field::float_attr(node, "fMinLiftVelocity"),
            f_drag_coefficient: field::float_attr(node, "fDragCoefficient"),
            f_max_pitch_torque: field::float_attr(node, "fMaxPitchTorque"),
            f_max_steering_roll_torque: field::float_attr(node, "fMaxSteeringRollTorque"),
            f_max_thrust: field::float_attr(node, "fMaxThrust"),
            f_yaw_torque_scale: field::float_attr(node, "fYawTorqueScale"),
            f_roll_torque_scale: field::float_attr(node, "fRollTorqueScale"),
            f_transition_duration: field::float_attr(node, "fTransitionDuration"),
            f_pitch_torque_scale: field::float_attr(node, "fPitchTorqueScale"),
            vec_angular_damping: field::vector3(node, "vecAngularDamping"),
            vec_angular_damping_min: field::vector3(node, "vecAngularDampingMin"),
            vec_linear_damping: field::vector3(node, "vecLinearDamping"),
            vec_linear_damping_min: field::vector3(node, "vecLinearDampingMin"),
            f_hover_velocity_scale: field::float_attr(node, "fHoverVelocityScale"),
            f_min_speed_for_thrust_falloff: field::float_attr(node, "fMinSpeedForThrustFalloff"),
            f_braking_thrust_scale: field::float_attr(node, "fBrakingThrustScale"),
            str_flags: field::text(node, "strFlags"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_int_attr(&mut item, "mode", self.mode);
        field::push_float_attr(&mut item, "fLiftCoefficient", self.f_lift_coefficient);
        field::push_float_attr(&mut item, "fMinLiftVelocity", self.f_min_lift_velocity);
        field::push_float_attr(&mut item, "fDragCoefficient", self.f_drag_coefficient);
        field::push_float_attr(&mut item, "fMaxPitchTorque", self.f_max_pitch_torque);
        field::push_float_attr(&mut item, "fMaxSteeringRollTorque", self.f_max_steering_roll_torque);
        field::push_float_attr(&mut item, "fMaxThrust", self.f_max_thrust);
        field::push_float_attr(&mut item, "fYawTorqueScale", self.f_yaw_torque_scale);
        field::push_float_attr(&mut item, "fRollTorqueScale", self.f_roll_torque_scale);
        field::push_float_attr(&mut item, "fTransitionDuration", self.f_transition_duration);
        field::push_float_attr(&mut item, "fPitchTorqueScale", self.f_pitch_torque_scale);
        field::push_vector3(&mut item, "vecAngularDamping", self.vec_angular_damping);
        field::push_vector3(&mut item, "vecAngularDampingMin", self.vec_angular_damping_min);
        field::push_vector3(&mut item, "vecLinearDamping", self.vec_linear_damping);
        field::push_vector3(&mut item, "vecLinearDampingMin", self.vec_linear_damping_min);
        field::push_float_attr(&mut item, "fHoverVelocityScale", self.f_hover_velocity_scale);
        field::push_float_attr(&mut item, "fMinSpeedForThrustFalloff", self.f_min_speed_for_thrust_falloff);
        field::push_float_attr(&mut item, "fBrakingThrustScale", self.f_braking_thrust_scale);
        field::push_text(&mut item, "strFlags", &self.str_flags);

        item
    }
}
