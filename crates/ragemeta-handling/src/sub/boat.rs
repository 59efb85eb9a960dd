//! Boat physics block.

use ragemeta_xml::XmlNode;

use crate::field;
use crate::Vector3;

/// Buoyancy, rudder, and propulsion parameters for watercraft.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoatHandling {
    pub f_box_front_mult: f32,
    pub f_box_rear_mult: f32,
    pub f_box_side_mult: f32,
    pub f_sample_top: f32,
    pub f_sample_bottom: f32,
    pub f_aquaplane_force: f32,
    pub f_aquaplane_push_water_mult: f32,
    pub f_aquaplane_push_water_cap: f32,
    pub f_aquaplane_push_water_apply: f32,
    pub f_rudder_force: f32,
    pub f_rudder_offset_submerge: f32,
    pub f_rudder_offset_force: f32,
    pub f_rudder_offset_force_z_mult: f32,
    pub f_wave_audio_mult: f32,
    pub vec_move_resistance: Vector3,
    pub vec_turn_resistance: Vector3,
    pub f_look_l_r_cam_height: f32,
    pub f_drag_coefficient: f32,
    pub f_keel_sphere_size: f32,
    pub f_prop_radius: f32,
    pub f_low_lod_ang_offset: f32,
    pub f_low_lod_draught_offset: f32,
    pub f_impeller_offset: f32,
    pub f_impeller_force_mult: f32,
    pub f_dinghy_sphere_buoy_const: f32,
    pub f_prow_raise_mult: f32,
    pub f_deep_water_sample_buoyancy_mult: f32,
}

impl BoatHandling {
    pub const TAG: &'static str = "CBoatHandlingData";

    pub fn load(node: &XmlNode) -> Self {
        Self {
            f_box_front_mult: field::float_attr(node, "fBoxFrontMult"),
            f_box_rear_mult: field::float_attr(node, "fBoxRearMult"),
            f_box_side_mult: field::float_attr(node, "fBoxSideMult"),
            f_sample_top: field::float_attr(node, "fSampleTop"),
            f_sample_bottom: field::float_attr(node, "fSampleBottom"),
            f_aquaplane_force: field::float_attr(node, "fAquaplaneForce"),
            f_aquaplane_push_water_mult: field::float_attr(node, "fAquaplanePushWaterMult"),
            f_aquaplane_push_water_cap: field::float_attr(node, "fAquaplanePushWaterCap"),
            f_aquaplane_push_water_apply: field::float_attr(node, "fAquaplanePushWaterApply"),
            f_rudder_force: field::float_attr(node, "fRudderForce"),
            f_rudder_offset_submerge: field::float_attr(node, "fRudderOffsetSubmerge"),
            f_rudder_offset_force: field::float_attr(node, "fRudderOffsetForce"),
            f_rudder_offset_force_z_mult: field::float_attr(node, "fRudderOffsetForceZMult"),
            f_wave_audio_mult: field::float_attr(node, "fWaveAudioMult"),
            vec_move_resistance: field::vector3(node, "vecMoveResistance"),
            vec_turn_resistance: field::vector3(node, "vecTurnResistance"),
            f_look_l_r_cam_height: field::float_attr(node, "fLook_L_R_CamHeight"),
            f_drag_coefficient: field::float_attr(node, "fDragCoefficient"),
            f_keel_sphere_size: field::float_attr(node, "fKeelSphereSize"),
            f_prop_radius: field::float_attr(node, "fPropRadius"),
            f_low_lod_ang_offset: field::float_attr(node, "fLowLodAngOffset"),
            f_low_lod_draught_offset: field::float_attr(node, "fLowLodDraughtOffset"),
            f_impeller_offset: field::float_attr(node, "fImpellerOffset"),
            f_impeller_force_mult: field::float_attr(node, "fImpellerForceMult"),
            f_dinghy_sphere_buoy_const: field::float_attr(node, "fDinghySphereBuoyConst"),
            f_prow_raise_mult: field::float_attr(node, "fProwRaiseMult"),
            f_deep_water_sample_buoyancy_mult: field::float_attr(node, "fDeepWaterSampleBuoyancyMult"),
        }
    }

    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_float_attr(&mut item, "fBoxFrontMult", self.f_box_front_mult);
        field::push_float_attr(&mut item, "fBoxRearMult", self.f_box_rear_mult);
        field::push_float_attr(&mut item, "fBoxSideMult", self.f_box_side_mult);
        field::push_float_attr(&mut item, "fSampleTop", self.f_sample_top);
        field::push_float_attr(&mut item, "fSampleBottom", self.f_sample_bottom);
        field::push_float_attr(&mut item, "fAquaplaneForce", self.f_aquaplane_force);
        field::push_float_attr(&mut item, "fAquaplanePushWaterMult", self.f_aquaplane_push_water_mult);
        field::push_float_attr(&mut item, "fAquaplanePushWaterCap", self.f_aquaplane_push_water_cap);
        field::push_float_attr(&mut item, "fAquaplanePushWaterApply", self.f_aquaplane_push_water_apply);
        field::push_float_attr(&mut item, "fRudderForce", self.f_rudder_force);
        field::push_float_attr(&mut item, "fRudderOffsetSubmerge", self.f_rudder_offset_submerge);
        field::push_float_attr(&mut item, "fRudderOffsetForce", self.f_rudder_offset_force);
        field::push_float_attr(&mut item, "fRudderOffsetForceZMult", self.f_rudder_offset_force_z_mult);
        field::push_float_attr(&mut item, "fWaveAudioMult", self.f_wave_audio_mult);
        field::push_vector3(&mut item, "vecMoveResistance", self.vec_move_resistance);
        field::push_vector3(&mut item, "vecTurnResistance", self.vec_turn_resistance);
        field::push_float_attr(&mut item, "fLook_L_R_CamHeight", self.f_look_l_r_cam_height);
        field::push_float_attr(&mut item, "fDragCoefficient", self.f_drag_coefficient);
        field::push_float_attr(&mut item, "fKeelSphereSize", self.f_keel_sphere_size);
        field::push_float_attr(&mut item, "fPropRadius", self.f_prop_radius);
        field::push_float_attr(&mut item, "fLowLodAngOffset", self.f_low_lod_ang_offset);
        field::push_float_attr(&mut item, "fLowLodDraughtOffset", self.f_low_lod_draught_offset);
        field::push_float_attr(&mut item, "fImpellerOffset", self.f_impeller_offset);
        field::push_float_attr(&mut item, "fImpellerForceMult", self.f_impeller_force_mult);
        field::push_float_attr(&mut item, "fDinghySphereBuoyConst", self.f_dinghy_sphere_buoy_const);
        field::push_float_attr(&mut item, "fProwRaiseMult", self.f_prow_raise_mult);
        field::push_float_attr(&mut item, "fDeepWaterSampleBuoyancyMult", self.f_deep_water_sample_buoyancy_mult);

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let boat = BoatHandling {
            f_rudder_force: 2.5,
            vec_move_resistance: Vector3::new(0.5, 0.6, 0.7),
            f_deep_water_sample_buoyancy_mult: -1.25,
            ..Default::default()
        };

        let node = boat.export();
        assert_eq!(node.attr_value("type"), Some(BoatHandling::TAG));
        assert_eq!(BoatHandling::load(&node), boat);
    }
}
