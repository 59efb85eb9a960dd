//! One named vehicle handling configuration.

use ragemeta_xml::XmlNode;

use crate::field;
use crate::sub::{self, SubHandling};
use crate::Vector3;

/// Fewer blocks than this are padded out with `type="NULL"` placeholders on
/// export; the consuming engine expects the container to have at least three
/// children. More blocks are all written, never truncated.
const MIN_SUB_HANDLING_SLOTS: usize = 3;

/// One vehicle's handling configuration.
///
/// `handling_name` identifies the record within a file (uniqueness is not
/// enforced). Every scalar defaults to the zero value of its type when absent
/// from the source document; the model does not distinguish a missing field
/// from an explicit zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlingData {
    pub handling_name: String,
    pub f_mass: f32,
    pub f_initial_drag_coeff: f32,
    pub f_percent_submerged: f32,
    pub vec_centre_of_mass_offset: Vector3,
    pub vec_inertia_multiplier: Vector3,
    pub f_drive_bias_front: f32,
    pub n_initial_drive_gears: i32,
    pub f_initial_drive_force: f32,
    pub f_drive_inertia: f32,
    pub f_clutch_change_rate_scale_up_shift: f32,
    pub f_clutch_change_rate_scale_down_shift: f32,
    pub f_initial_drive_max_flat_vel: f32,
    pub f_brake_force: f32,
    pub f_brake_bias_front: f32,
    pub f_hand_brake_force: f32,
    pub f_steering_lock: f32,
    pub f_traction_curve_max: f32,
    pub f_traction_curve_min: f32,
    pub f_traction_curve_lateral: f32,
    pub f_traction_spring_delta_max: f32,
    pub f_low_speed_traction_loss_mult: f32,
    pub f_camber_stiffnesss: f32,
    pub f_traction_bias_front: f32,
    pub f_traction_loss_mult: f32,
    pub f_suspension_force: f32,
    pub f_suspension_comp_damp: f32,
    pub f_suspension_rebound_damp: f32,
    pub f_suspension_upper_limit: f32,
    pub f_suspension_lower_limit: f32,
    pub f_suspension_raise: f32,
    pub f_suspension_bias_front: f32,
    pub f_anti_roll_bar_force: f32,
    pub f_anti_roll_bar_bias_front: f32,
    pub f_roll_centre_height_front: f32,
    pub f_roll_centre_height_rear: f32,
    pub f_collision_damage_mult: f32,
    pub f_weapon_damage_mult: f32,
    pub f_deformation_damage_mult: f32,
    pub f_engine_damage_mult: f32,
    pub f_petrol_tank_volume: f32,
    pub f_oil_volume: f32,
    pub f_seat_offset_dist_x: f32,
    pub f_seat_offset_dist_y: f32,
    pub f_seat_offset_dist_z: f32,
    pub n_monetary_value: i32,
    pub str_model_flags: String,
    pub str_handling_flags: String,
    pub str_damage_flags: String,
    pub ai_handling: String,
    pub sub_handling_data: Vec<SubHandling>,
    pub f_weapon_damage_scaled_to_veh_health_mult: f32,
}

impl HandlingData {
    /// The `type` attribute handling record items are exported with. Load
    /// does not require it to match.
    pub const TAG: &'static str = "CHandlingData";

    /// Load a record from an `Item` element.
    pub fn load(node: &XmlNode) -> Self {
        Self {
            handling_name: field::text(node, "handlingName"),
            f_mass: field::float_attr(node, "fMass"),
            f_initial_drag_coeff: field::float_attr(node, "fInitialDragCoeff"),
            f_percent_submerged: field::float_attr(node, "fPercentSubmerged"),
            vec_centre_of_mass_offset: field::vector3(node, "vecCentreOfMassOffset"),
            vec_inertia_multiplier: field::vector3(node, "vecInertiaMultiplier"),
            f_drive_bias_front: field::float_attr(node, "fDriveBiasFront"),
            n_initial_drive_gears: field::int_attr(node, "nInitialDriveGears"),
            f_initial_drive_force: field::float_attr(node, "fInitialDriveForce"),
            f_drive_inertia: field::float_attr(node, "fDriveInertia"),
            f_clutch_change_rate_scale_up_shift: field::float_attr(node, "fClutchChangeRateScaleUpShift"),
            f_clutch_change_rate_scale_down_shift: field::float_attr(node, "fClutchChangeRateScaleDownShift"),
            f_initial_drive_max_flat_vel: field::float_attr(node, "fInitialDriveMaxFlatVel"),
            f_brake_force: field::float_attr(node, "fBrakeForce"),
            f_brake_bias_front: field::float_attr(node, "fBrakeBiasFront"),
            f_hand_brake_force: field::float_attr(node, "fHandBrakeForce"),
            f_steering_lock: field::float_attr(node, "fSteeringLock"),
            f_traction_curve_max: field::float_attr(node, "fTractionCurveMax"),
            f_traction_curve_min: field::float_attr(node, "fTractionCurveMin"),
            f_traction_curve_lateral: field::float_attr(node, "fTractionCurveLateral"),
            f_traction_spring_delta_max: field::float_attr(node, "fTractionSpringDeltaMax"),
            f_low_speed_traction_loss_mult: field::float_attr(node, "fLowSpeedTractionLossMult"),
            f_camber_stiffnesss: field::float_attr(node, "fCamberStiffnesss"),
            f_traction_bias_front: field::float_attr(node, "fTractionBiasFront"),
            f_traction_loss_mult: field::float_attr(node, "fTractionLossMult"),
            f_suspension_force: field::float_attr(node, "fSuspensionForce"),
            f_suspension_comp_damp: field::float_attr(node, "fSuspensionCompDamp"),
            f_suspension_rebound_damp: field::float_attr(node, "fSuspensionReboundDamp"),
            f_suspension_upper_limit: field::float_attr(node, "fSuspensionUpperLimit"),
            f_suspension_lower_limit: field::float_attr(node, "fSuspensionLowerLimit"),
            f_suspension_raise: field::float_attr(node, "fSuspensionRaise"),
            f_suspension_bias_front: field::float_attr(node, "fSuspensionBiasFront"),
            f_anti_roll_bar_force: field::float_attr(node, "fAntiRollBarForce"),
            f_anti_roll_bar_bias_front: field::float_attr(node, "fAntiRollBarBiasFront"),
            f_roll_centre_height_front: field::float_attr(node, "fRollCentreHeightFront"),
            f_roll_centre_height_rear: field::float_attr(node, "fRollCentreHeightRear"),
            f_collision_damage_mult: field::float_attr(node, "fCollisionDamageMult"),
            f_weapon_damage_mult: field::float_attr(node, "fWeaponDamageMult"),
            f_deformation_damage_mult: field::float_attr(node, "fDeformationDamageMult"),
            f_engine_damage_mult: field::float_attr(node, "fEngineDamageMult"),
            f_petrol_tank_volume: field::float_attr(node, "fPetrolTankVolume"),
            f_oil_volume: field::float_attr(node, "fOilVolume"),
            f_seat_offset_dist_x: field::float_attr(node, "fSeatOffsetDistX"),
            f_seat_offset_dist_y: field::float_attr(node, "fSeatOffsetDistY"),
            f_seat_offset_dist_z: field::float_attr(node, "fSeatOffsetDistZ"),
            n_monetary_value: field::int_attr(node, "nMonetaryValue"),
            str_model_flags: field::text(node, "strModelFlags"),
            str_handling_flags: field::text(node, "strHandlingFlags"),
            str_damage_flags: field::text(node, "strDamageFlags"),
            ai_handling: field::text(node, "AIHandling"),
            sub_handling_data: sub::load_container(node, "SubHandlingData"),
            f_weapon_damage_scaled_to_veh_health_mult: field::float_attr(node, "fWeaponDamageScaledToVehHealthMult"),
        }
    }

    /// Export this record as an `<Item type="CHandlingData">` element.
    pub fn export(&self) -> XmlNode {
        let mut item = XmlNode::new("Item").attr("type", Self::TAG);

        field::push_text(&mut item, "handlingName", &self.handling_name);
        field::push_float_attr(&mut item, "fMass", self.f_mass);
        field::push_float_attr(&mut item, "fInitialDragCoeff", self.f_initial_drag_coeff);
        field::push_float_attr(&mut item, "fPercentSubmerged", self.f_percent_submerged);
        field::push_vector3(&mut item, "vecCentreOfMassOffset", self.vec_centre_of_mass_offset);
        field::push_vector3(&mut item, "vecInertiaMultiplier", self.vec_inertia_multiplier);
        field::push_float_attr(&mut item, "fDriveBiasFront", self.f_drive_bias_front);
        field::push_int_attr(&mut item, "nInitialDriveGears", self.n_initial_drive_gears);
        field::push_float_attr(&mut item, "fInitialDriveForce", self.f_initial_drive_force);
        field::push_float_attr(&mut item, "fDriveInertia", self.f_drive_inertia);
        field::push_float_attr(&mut item, "fClutchChangeRateScaleUpShift", self.f_clutch_change_rate_scale_up_shift);
        field::push_float_attr(&mut item, "fClutchChangeRateScaleDownShift", self.f_clutch_change_rate_scale_down_shift);
        field::push_float_attr(&mut item, "fInitialDriveMaxFlatVel", self.f_initial_drive_max_flat_vel);
        field::push_float_attr(&mut item, "fBrakeForce", self.f_brake_force);
        field::push_float_attr(&mut item, "fBrakeBiasFront", self.f_brake_bias_front);
        field::push_float_attr(&mut item, "fHandBrakeForce", self.f_hand_brake_force);
        field::push_float_attr(&mut item, "fSteeringLock", self.f_steering_lock);
        field::push_float_attr(&mut item, "fTractionCurveMax", self.f_traction_curve_max);
        field::push_float_attr(&mut item, "fTractionCurveMin", self.f_traction_curve_min);
        field::push_float_attr(&mut item, "fTractionCurveLateral", self.f_traction_curve_lateral);
        field::push_float_attr(&mut item, "fTractionSpringDeltaMax", self.f_traction_spring_delta_max);
        field::push_float_attr(&mut item, "fLowSpeedTractionLossMult", self.f_low_speed_traction_loss_mult);
        field::push_float_attr(&mut item, "fCamberStiffnesss", self.f_camber_stiffnesss);
        field::push_float_attr(&mut item, "fTractionBiasFront", self.f_traction_bias_front);
        field::push_float_attr(&mut item, "fTractionLossMult", self.f_traction_loss_mult);
        field::push_float_attr(&mut item, "fSuspensionForce", self.f_suspension_force);
        field::push_float_attr(&mut item, "fSuspensionCompDamp", self.f_suspension_comp_damp);
        field::push_float_attr(&mut item, "fSuspensionReboundDamp", self.f_suspension_rebound_damp);
        field::push_float_attr(&mut item, "fSuspensionUpperLimit", self.f_suspension_upper_limit);
        field::push_float_attr(&mut item, "fSuspensionLowerLimit", self.f_suspension_lower_limit);
        field::push_float_attr(&mut item, "fSuspensionRaise", self.f_suspension_raise);
        field::push_float_attr(&mut item, "fSuspensionBiasFront", self.f_suspension_bias_front);
        field::push_float_attr(&mut item, "fAntiRollBarForce", self.f_anti_roll_bar_force);
        field::push_float_attr(&mut item, "fAntiRollBarBiasFront", self.f_anti_roll_bar_bias_front);
        field::push_float_attr(&mut item, "fRollCentreHeightFront", self.f_roll_centre_height_front);
        field::push_float_attr(&mut item, "fRollCentreHeightRear", self.f_roll_centre_height_rear);
        field::push_float_attr(&mut item, "fCollisionDamageMult", self.f_collision_damage_mult);
        field::push_float_attr(&mut item, "fWeaponDamageMult", self.f_weapon_damage_mult);
        field::push_float_attr(&mut item, "fDeformationDamageMult", self.f_deformation_damage_mult);
        field::push_float_attr(&mut item, "fEngineDamageMult", self.f_engine_damage_mult);
        field::push_float_attr(&mut item, "fPetrolTankVolume", self.f_petrol_tank_volume);
        field::push_float_attr(&mut item, "fOilVolume", self.f_oil_volume);
        field::push_float_attr(&mut item, "fSeatOffsetDistX", self.f_seat_offset_dist_x);
        field::push_float_attr(&mut item, "fSeatOffsetDistY", self.f_seat_offset_dist_y);
        field::push_float_attr(&mut item, "fSeatOffsetDistZ", self.f_seat_offset_dist_z);
        field::push_int_attr(&mut item, "nMonetaryValue", self.n_monetary_value);
        field::push_text(&mut item, "strModelFlags", &self.str_model_flags);
        field::push_text(&mut item, "strHandlingFlags", &self.str_handling_flags);
        field::push_text(&mut item, "strDamageFlags", &self.str_damage_flags);
        field::push_text(&mut item, "AIHandling", &self.ai_handling);
        field::push_float_attr(&mut item, "fWeaponDamageScaledToVehHealthMult", self.f_weapon_damage_scaled_to_veh_health_mult);

        let mut container = XmlNode::new("SubHandlingData");
        for sub in &self.sub_handling_data {
            container.push_child(sub.to_node());
        }
        for _ in self.sub_handling_data.len()..MIN_SUB_HANDLING_SLOTS {
            field::push_null_item(&mut container);
        }
        item.push_child(container);

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sub::{AdvancedData, BoatHandling};

    #[test]
    fn test_scalar_round_trip() {
        let record = HandlingData {
            handling_name: "ADDER".to_string(),
            f_mass: 1800.0,
            f_percent_submerged: 85.0,
            n_initial_drive_gears: 6,
            n_monetary_value: 150000,
            str_model_flags: "440010".to_string(),
            str_handling_flags: "20002".to_string(),
            ai_handling: "AVERAGE".to_string(),
            vec_centre_of_mass_offset: Vector3::new(0.0, 0.0, -0.1),
            vec_inertia_multiplier: Vector3::new(1.0, 1.3, 1.5),
            f_weapon_damage_scaled_to_veh_health_mult: 0.5,
            ..Default::default()
        };

        assert_eq!(HandlingData::load(&record.export()), record);
    }

    #[test]
    fn test_six_decimal_precision_survives_round_trip() {
        let record = HandlingData {
            // Survives because it rounds to the same 6-decimal string.
            f_mass: 1234.5678,
            ..Default::default()
        };

        let reloaded = HandlingData::load(&record.export());
        assert!((reloaded.f_mass - record.f_mass).abs() < 1e-3);
    }

    #[test]
    fn test_export_pads_to_three_sub_handling_slots() {
        let record = HandlingData {
            sub_handling_data: vec![SubHandling::Boat(BoatHandling::default())],
            ..Default::default()
        };

        let node = record.export();
        let container = node.child_named("SubHandlingData").unwrap();

        assert_eq!(container.children.len(), 3);
        assert_eq!(container.children[0].attr_value("type"), Some("CBoatHandlingData"));
        assert_eq!(container.children[1].attr_value("type"), Some("NULL"));
        assert_eq!(container.children[2].attr_value("type"), Some("NULL"));
    }

    #[test]
    fn test_export_never_truncates_extra_sub_handling() {
        let record = HandlingData {
            sub_handling_data: vec![
                SubHandling::Advanced(AdvancedData::default()),
                SubHandling::Advanced(AdvancedData::default()),
                SubHandling::Advanced(AdvancedData::default()),
                SubHandling::Advanced(AdvancedData::default()),
            ],
            ..Default::default()
        };

        let container = record.export();
        let container = container.child_named("SubHandlingData").unwrap();
        assert_eq!(container.children.len(), 4);
        assert!(container
            .children
            .iter()
            .all(|c| c.attr_value("type") == Some("CAdvancedData")));
    }

    #[test]
    fn test_empty_record_exports_three_null_placeholders() {
        let node = HandlingData::default().export();
        let container = node.child_named("SubHandlingData").unwrap();
        assert_eq!(container.children.len(), 3);
        assert!(container.children.iter().all(|c| c.attr_value("type") == Some("NULL")));
    }

    #[test]
    fn test_padding_placeholders_vanish_on_reload() {
        let record = HandlingData {
            sub_handling_data: vec![SubHandling::Boat(BoatHandling::default())],
            ..Default::default()
        };

        let reloaded = HandlingData::load(&record.export());
        assert_eq!(reloaded.sub_handling_data.len(), 1);
    }

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let record = HandlingData::load(&XmlNode::new("Item").attr("type", "CHandlingData"));
        assert_eq!(record.handling_name, "");
        assert_eq!(record.f_mass, 0.0);
        assert_eq!(record.n_initial_drive_gears, 0);
        assert_eq!(record.vec_inertia_multiplier, Vector3::ZERO);
        assert!(record.sub_handling_data.is_empty());
    }
}
