//! Code for reading the hotel inventory from a JSON file.
use super::*;
use crate::hotel::HotelMap;
use log::warn;

/// Read the hotel catalog from a JSON file.
///
/// Rooms referencing a room type that is not declared in their hotel's catalog are a
/// documented assumption of the data rather than an enforced invariant: they are warned
/// about but kept. Duplicate hotel IDs fail the load.
pub fn read_hotels(file_path: &Path) -> Result<HotelMap> {
    let hotels: HotelMap = read_json_id_file(file_path)?;

    for hotel in hotels.values() {
        let declared = hotel.declared_room_types();
        for room in &hotel.rooms {
            if !declared.contains(&room.room_type) {
                warn!(
                    "Room {} at hotel {} references undeclared room type {}",
                    room.room_id, hotel.id, room.room_type
                );
            }
        }
    }

    Ok(hotels)
}
