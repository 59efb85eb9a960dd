//! Sub-handling blocks.
//!
//! A handling record carries a `SubHandlingData` container of specialized
//! physics blocks. Each block is an `Item` element whose `type` attribute
//! selects one of a closed set of 11 kinds; [`SubHandling`] is the sum type
//! over that set, with an exhaustive match on the tag string at load time and
//! on the enum case at export time. New kinds require a compile-time-visible
//! update here.
//!
//! Items with an unrecognized or missing `type` are silently discarded on
//! load: the schema is read permissively so documents written against newer
//! game builds still load. In particular the `type="NULL"` placeholders the
//! exporter pads containers with are dropped this way on the next load.

mod advanced;
mod base;
mod bike;
mod boat;
mod car;
mod flying;
mod seaplane;
mod special_flight;
mod submarine;
mod trailer;
mod weapon;

use ragemeta_xml::XmlNode;

pub use advanced::AdvancedData;
pub use base::BaseSubHandling;
pub use bike::BikeHandling;
pub use boat::BoatHandling;
pub use car::CarHandling;
pub use flying::FlyingHandling;
pub use seaplane::SeaPlaneHandling;
pub use special_flight::SpecialFlightHandling;
pub use submarine::SubmarineHandling;
pub use trailer::TrailerHandling;
pub use weapon::VehicleWeaponHandling;

/// One specialized physics block attached to a handling record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubHandling {
    Boat(BoatHandling),
    Bike(BikeHandling),
    Flying(FlyingHandling),
    VehicleWeapon(VehicleWeaponHandling),
    Submarine(SubmarineHandling),
    Trailer(TrailerHandling),
    Advanced(AdvancedData),
    Car(CarHandling),
    Base(BaseSubHandling),
    SeaPlane(SeaPlaneHandling),
    SpecialFlight(SpecialFlightHandling),
}

impl SubHandling {
    /// Load a block from an `Item` element, dispatching on its `type`
    /// attribute. Returns `None` for unrecognized or missing tags.
    pub fn from_node(node: &XmlNode) -> Option<Self> {
        let sub = match node.attr_value("type")? {
            BoatHandling::TAG => Self::Boat(BoatHandling::load(node)),
            BikeHandling::TAG => Self::Bike(BikeHandling::load(node)),
            FlyingHandling::TAG => Self::Flying(FlyingHandling::load(node)),
            VehicleWeaponHandling::TAG => Self::VehicleWeapon(VehicleWeaponHandling::load(node)),
            SubmarineHandling::TAG => Self::Submarine(SubmarineHandling::load(node)),
            TrailerHandling::TAG => Self::Trailer(TrailerHandling::load(node)),
            AdvancedData::TAG => Self::Advanced(AdvancedData::load(node)),
            CarHandling::TAG => Self::Car(CarHandling::load(node)),
            BaseSubHandling::TAG => Self::Base(BaseSubHandling::load(node)),
            SeaPlaneHandling::TAG => Self::SeaPlane(SeaPlaneHandling::load(node)),
            SpecialFlightHandling::TAG => Self::SpecialFlight(SpecialFlightHandling::load(node)),
            _ => return None,
        };

        Some(sub)
    }

    /// The `type` tag this block exports under.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boat(_) => BoatHandling::TAG,
            Self::Bike(_) => BikeHandling::TAG,
            Self::Flying(_) => FlyingHandling::TAG,
            Self::VehicleWeapon(_) => VehicleWeaponHandling::TAG,
            Self::Submarine(_) => SubmarineHandling::TAG,
            Self::Trailer(_) => TrailerHandling::TAG,
            Self::Advanced(_) => AdvancedData::TAG,
            Self::Car(_) => CarHandling::TAG,
            Self::Base(_) => BaseSubHandling::TAG,
            Self::SeaPlane(_) => SeaPlaneHandling::TAG,
            Self::SpecialFlight(_) => SpecialFlightHandling::TAG,
        }
    }

    /// Export this block as a typed `Item` element.
    pub fn to_node(&self) -> XmlNode {
        match self {
            Self::Boat(b) => b.export(),
            Self::Bike(b) => b.export(),
            Self::Flying(f) => f.export(),
            Self::VehicleWeapon(w) => w.export(),
            Self::Submarine(s) => s.export(),
            Self::Trailer(t) => t.export(),
            Self::Advanced(a) => a.export(),
            Self::Car(c) => c.export(),
            Self::Base(b) => b.export(),
            Self::SeaPlane(s) => s.export(),
            Self::SpecialFlight(s) => s.export(),
        }
    }
}

/// Load every recognized block from a record's named container, in document
/// order. A missing container yields an empty sequence.
pub(crate) fn load_container(node: &XmlNode, name: &str) -> Vec<SubHandling> {
    let Some(container) = node.child_named(name) else {
        return Vec::new();
    };

    container
        .children_named("Item")
        .filter_map(SubHandling::from_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_drops_unknown_tags_and_preserves_order() {
        let record = XmlNode::new("Item").child(
            XmlNode::new("SubHandlingData")
                .child(XmlNode::new("Item").attr("type", "CBoatHandlingData"))
                .child(XmlNode::new("Item").attr("type", "CBikeHandlingData"))
                .child(XmlNode::new("Item").attr("type", "CUnknownData")),
        );

        let subs = load_container(&record, "SubHandlingData");
        assert_eq!(subs.len(), 2);
        assert!(matches!(subs[0], SubHandling::Boat(_)));
        assert!(matches!(subs[1], SubHandling::Bike(_)));
    }

    #[test]
    fn test_dispatch_drops_missing_tag_and_null_placeholder() {
        assert_eq!(SubHandling::from_node(&XmlNode::new("Item")), None);
        assert_eq!(
            SubHandling::from_node(&XmlNode::new("Item").attr("type", "NULL")),
            None
        );
    }

    #[test]
    fn test_every_kind_round_trips_through_its_tag() {
        let subs = vec![
            SubHandling::Boat(BoatHandling::default()),
            SubHandling::Bike(BikeHandling::default()),
            SubHandling::Flying(FlyingHandling::default()),
            SubHandling::VehicleWeapon(VehicleWeaponHandling::default()),
            SubHandling::Submarine(SubmarineHandling::default()),
            SubHandling::Trailer(TrailerHandling::default()),
            SubHandling::Advanced(AdvancedData::default()),
            SubHandling::Car(CarHandling::default()),
            SubHandling::Base(BaseSubHandling),
            SubHandling::SeaPlane(SeaPlaneHandling::default()),
            SubHandling::SpecialFlight(SpecialFlightHandling::default()),
        ];

        for sub in subs {
            let node = sub.to_node();
            assert_eq!(node.attr_value("type"), Some(sub.type_name()));

            let reloaded = SubHandling::from_node(&node).expect("own export must dispatch");
            assert_eq!(reloaded, sub);
        }
    }

    #[test]
    fn test_duplicate_kinds_are_kept() {
        let record = XmlNode::new("Item").child(
            XmlNode::new("SubHandlingData")
                .child(XmlNode::new("Item").attr("type", "CAdvancedData"))
                .child(XmlNode::new("Item").attr("type", "CAdvancedData")),
        );

        let subs = load_container(&record, "SubHandlingData");
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_missing_container_is_empty() {
        assert!(load_container(&XmlNode::new("Item"), "SubHandlingData").is_empty());
    }
}
