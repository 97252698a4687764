//! Hotels hold the static room inventory: a catalog of room types and the physical rooms.
use crate::id::{HotelID, RoomTypeID, define_id_getter};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// A map of [`Hotel`]s, keyed by hotel ID
pub type HotelMap = IndexMap<HotelID, Hotel>;

/// A hotel with its room type catalog and physical rooms.
///
/// Loaded once at startup and treated as read-only for the rest of the session.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// A unique identifier for the hotel (e.g. "H1")
    pub id: HotelID,
    /// The hotel's display name
    pub name: String,
    /// The room type catalog, in file order
    pub room_types: Vec<RoomType>,
    /// The physical rooms, in file order
    pub rooms: Vec<Room>,
}
define_id_getter! {Hotel, HotelID}

/// A category of room offered by a hotel.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    /// The code identifying this room type (e.g. "SGL", "DBL")
    pub code: RoomTypeID,
    /// A text description of the room type
    pub description: String,
    /// Amenities included with rooms of this type
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Features of rooms of this type
    #[serde(default)]
    pub features: Vec<String>,
}

/// A physical room belonging to a hotel.
///
/// Rooms of the same type are fungible: bookings are keyed by room type, never by room ID.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// The room's identifier (e.g. "101")
    pub room_id: String,
    /// The code of this room's type; must be declared in the hotel's catalog
    pub room_type: RoomTypeID,
}

impl Hotel {
    /// The number of physical rooms of the given type (case-sensitive match).
    pub fn room_count(&self, room_type: &str) -> u64 {
        self.rooms
            .iter()
            .filter(|room| *room.room_type.0 == *room_type)
            .count() as u64
    }

    /// The room type codes declared in this hotel's catalog, in catalog order.
    pub fn declared_room_types(&self) -> IndexSet<RoomTypeID> {
        self.room_types.iter().map(|rt| rt.code.clone()).collect()
    }
}
