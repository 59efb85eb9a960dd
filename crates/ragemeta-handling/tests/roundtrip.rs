//! Full-document round-trip tests against a realistic handling file.

use ragemeta_handling::sub::SubHandling;
use ragemeta_handling::HandlingFile;

/// A trimmed-down but structurally faithful handling.meta: one ground
/// vehicle with car + weapon blocks and an unknown block, one boat using the
/// lowercase item tag.
const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CHandlingDataMgr>
  <HandlingData>
    <Item type="CHandlingData">
      <handlingName>RHINO</handlingName>
      <fMass value="18000.000000"/>
      <fInitialDragCoeff value="7.500000"/>
      <fPercentSubmerged value="85.000000"/>
      <vecCentreOfMassOffset x="0.000000" y="0.000000" z="0.000000"/>
      <vecInertiaMultiplier x="1.000000" y="1.000000" z="1.800000"/>
      <fDriveBiasFront value="0.500000"/>
      <nInitialDriveGears value="3"/>
      <fInitialDriveForce value="0.180000"/>
      <fInitialDriveMaxFlatVel value="80.000000"/>
      <fBrakeForce value="3.000000"/>
      <fSteeringLock value="35.000000"/>
      <fTractionCurveMax value="2.150000"/>
      <fTractionCurveMin value="2.000000"/>
      <nMonetaryValue value="1500000"/>
      <strModelFlags>400000</strModelFlags>
      <strHandlingFlags>2004000</strHandlingFlags>
      <strDamageFlags>0</strDamageFlags>
      <AIHandling>AVERAGE</AIHandling>
      <SubHandlingData>
        <Item type="CCarHandlingData">
          <fBackEndPopUpCarImpulseMult value="0.100000"/>
          <fToeFront value="0.000000"/>
          <strAdvancedFlags>4000000</strAdvancedFlags>
          <AdvancedData>
            <Item type="CAdvancedData">
              <Slot value="0"/>
              <Index value="1"/>
              <Value value="0.500000"/>
            </Item>
            <Item type="CAdvancedData">
              <Slot value="1"/>
              <Index value="0"/>
              <Value value="-2.250000"/>
            </Item>
          </AdvancedData>
        </Item>
        <Item type="CVehicleWeaponHandlingData">
          <uWeaponHash>
            <Item>VEHICLE_WEAPON_TANK</Item>
            <Item>VEHICLE_WEAPON_ROTORS</Item>
          </uWeaponHash>
          <WeaponSeats content="int_array">
            0
            1
          </WeaponSeats>
          <fTurretSpeed content="float_array">
            1.500000
            0.750000
          </fTurretSpeed>
          <fUvAnimationMult value="1.000000"/>
        </Item>
        <Item type="CFutureUnknownData">
          <fMystery value="9.000000"/>
        </Item>
      </SubHandlingData>
    </Item>
    <item type="CHandlingData">
      <handlingName>DINGHY</handlingName>
      <fMass value="2000.000000"/>
      <SubHandlingData>
        <Item type="CBoatHandlingData">
          <fRudderForce value="2.000000"/>
          <vecMoveResistance x="0.500000" y="0.600000" z="0.700000"/>
        </Item>
        <Item type="NULL"/>
        <Item type="NULL"/>
      </SubHandlingData>
    </item>
  </HandlingData>
</CHandlingDataMgr>
"#;

#[test]
fn loads_records_and_drops_unknown_blocks() {
    let file = HandlingFile::from_xml(SAMPLE).unwrap();
    assert_eq!(file.handlings.len(), 2);

    let rhino = &file.handlings[0];
    assert_eq!(rhino.handling_name, "RHINO");
    assert_eq!(rhino.f_mass, 18000.0);
    assert_eq!(rhino.n_initial_drive_gears, 3);
    assert_eq!(rhino.n_monetary_value, 1_500_000);
    assert_eq!(rhino.str_handling_flags, "2004000");

    // The unknown block is dropped; car and weapon remain, in order.
    assert_eq!(rhino.sub_handling_data.len(), 2);
    let SubHandling::Car(car) = &rhino.sub_handling_data[0] else {
        panic!("expected car block first");
    };
    let advanced = car.advanced_data.as_ref().unwrap();
    assert_eq!(advanced.len(), 2);
    assert_eq!((advanced[0].slot, advanced[0].index), (0, 1));
    assert_eq!(advanced[1].value, -2.25);

    let SubHandling::VehicleWeapon(weapon) = &rhino.sub_handling_data[1] else {
        panic!("expected weapon block second");
    };
    assert_eq!(
        weapon.u_weapon_hash.as_deref(),
        Some(&["VEHICLE_WEAPON_TANK".to_string(), "VEHICLE_WEAPON_ROTORS".to_string()][..])
    );
    assert_eq!(weapon.weapon_seats.as_deref(), Some(&[0, 1][..]));
    assert_eq!(weapon.f_turret_speed.as_deref(), Some(&[1.5, 0.75][..]));
    // Arrays that never appeared stay absent.
    assert_eq!(weapon.f_turret_pitch_min, None);

    // Lowercase item element loads like the exact-case one; the NULL
    // placeholders are not blocks.
    let dinghy = &file.handlings[1];
    assert_eq!(dinghy.handling_name, "DINGHY");
    assert_eq!(dinghy.sub_handling_data.len(), 1);
}

#[test]
fn round_trip_preserves_model() {
    let file = HandlingFile::from_xml(SAMPLE).unwrap();

    let exported = file.to_xml_bytes().unwrap();
    let reloaded = HandlingFile::from_xml(std::str::from_utf8(&exported).unwrap()).unwrap();

    assert_eq!(reloaded, file);
}

#[test]
fn export_is_byte_stable() {
    let file = HandlingFile::from_xml(SAMPLE).unwrap();

    let first = file.to_xml_bytes().unwrap();
    let reloaded = HandlingFile::from_xml(std::str::from_utf8(&first).unwrap()).unwrap();
    let second = reloaded.to_xml_bytes().unwrap();

    assert_eq!(first, second);
}

#[test]
fn export_pads_sparse_records() {
    let file = HandlingFile::from_xml(SAMPLE).unwrap();
    let text = file.to_xml_bytes().unwrap();
    let text = String::from_utf8(text).unwrap();

    // RHINO keeps two real blocks and gets one placeholder; DINGHY keeps one
    // and gets two.
    assert_eq!(text.matches(r#"<Item type="NULL"/>"#).count(), 3);
}

#[test]
fn six_decimal_float_formatting() {
    let file = HandlingFile::from_xml(SAMPLE).unwrap();
    let text = String::from_utf8(file.to_xml_bytes().unwrap()).unwrap();

    assert!(text.contains(r#"<fMass value="18000.000000"/>"#));
    assert!(text.contains(r#"<fTractionCurveMax value="2.150000"/>"#));
    // Unset floats are written as explicit zeros.
    assert!(text.contains(r#"<fSuspensionForce value="0.000000"/>"#));
}
