//! Vehicle weapon block: per-turret arrays plus a few scalars.
//!
//! The arrays here are independent of each other; the schema never
//! cross-validates their lengths (a file may declare three turret speeds and
//! two pitch limits) and neither does this codec.

use ragemeta_xml::XmlNode;

use crate::field;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleWeaponHandling {
    pub u_weapon_hash: Option<Vec<String>>,
    pub weapon_seats: Option<Vec<i32>>,
    pub weapon_vehicle_mod_type: Option<Vec<String>>,
    pub f_turret_speed: Option<Vec<f32>>,
    pub f_turret_pitch_min: Option<Vec<f32>>,
    pub f_turret_pitch_max: Option<Vec<f32>>,
    pub f_turret_cam_pitch_min: Option<Vec<f32>>,
    pub f_turret_cam_pitch_max: Option<Vec<f32>>,
    pub f_bullet_velocity_for_gravity: Option<Vec<f32>>,
    pub f_turret_pitch_forward_min: Option<Vec<f32>>,
    pub f_uv_animation_mult: f32,
    pub f_misc_gadget_var: f32,
    pub f_wheel_impact_offset: f32,
}

impl VehicleWeaponHandling {
    pub const TAG: &'static str = "CVehicleWeaponHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            u_weapon_hash: field::item_array(node, "uWeaponHash"),
            weapon_seats: field::int_array(node, "WeaponSeats"),
            weapon_vehicle_mod_type: field::item_array(node, "WeaponVehicleModType"),
            f_turret_speed: field::float_array(node, "fTurretSpeed"),
            f_turret_pitch_min: field::float_array(node, "fTurretPitchMin"),
            f_turret_pitch_max: field::float_array(node, "fTurretPitchMax"),
            f_turret_cam_pitch_min: field::float_array(node, "fTurretCamPitchMin"),
            f_turret_cam_pitch_max: field::float_array(node, "fTurretCamPitchMax"),
            f_bullet_velocity_for_gravity: field::float_array(node, "fBulletVelocityForGravity"),
            f_turret_pitch_forward_min: field::float_array(node, "fTurretPitchForwardMin"),
            f_uv_animation_mult: field::float_attr(node, "fUvAnimationMult"),
            f_misc_gadget_var: field::float_attr(node, "fMiscGadgetVar"),
            f_wheel_impact_offset: field::float_attr(node, "fWheelImpactOffset"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_item_array(&mut item, "uWeaponHash", self.u_weapon_hash.as_deref());
        field::push_int_array(&mut item, "WeaponSeats", self.weapon_seats.as_deref());
        field::push_item_array(&mut item, "WeaponVehicleModType", self.weapon_vehicle_mod_type.as_deref());
        field::push_float_array(&mut item, "fTurretSpeed", self.f_turret_speed.as_deref());
        field::push_float_array(&mut item, "fTurretPitchMin", self.f_turret_pitch_min.as_deref());
        field::push_float_array(&mut item, "fTurretPitchMax", self.f_turret_pitch_max.as_deref());
        field::push_float_array(&mut item, "fTurretCamPitchMin", self.f_turret_cam_pitch_min.as_deref());
        field::push_float_array(&mut item, "fTurretCamPitchMax", self.f_turret_cam_pitch_max.as_deref());
        field::push_float_array(&mut item, "fBulletVelocityForGravity", self.f_bullet_velocity_for_gravity.as_deref());
        field::push_float_array(&mut item, "fTurretPitchForwardMin", self.f_turret_pitch_forward_min.as_deref());
        field::push_float_attr(&mut item, "fUvAnimationMult", self.f_uv_animation_mult);
        field::push_float_attr(&mut item, "fMiscGadgetVar", self.f_misc_gadget_var);
        field::push_float_attr(&mut item, "fWheelImpactOffset", self.f_wheel_impact_offset);

        item
    }
}
