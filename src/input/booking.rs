//! Code for reading the booking list from a JSON file.
use super::*;
use crate::booking::Booking;
use crate::hotel::HotelMap;
use log::warn;

/// Read the booking list from a JSON file.
///
/// Bookings are cross-checked against the hotel catalog, but inconsistencies are only
/// warned about: a booking for an unknown hotel or room type simply never matches a
/// query, and a non-positive stay occupies no dates under the half-open interval.
pub fn read_bookings(file_path: &Path, hotels: &HotelMap) -> Result<Vec<Booking>> {
    let bookings: Vec<Booking> = read_json(file_path)?;

    for booking in &bookings {
        match hotels.get(&booking.hotel_id) {
            None => warn!("Booking references unknown hotel {}", booking.hotel_id),
            Some(hotel) => {
                if !hotel.declared_room_types().contains(&booking.room_type) {
                    warn!(
                        "Booking at hotel {} references undeclared room type {}",
                        booking.hotel_id, booking.room_type
                    );
                }
            }
        }
        if booking.arrival >= booking.departure {
            warn!(
                "Booking at hotel {} departs on or before its arrival ({} >= {})",
                booking.hotel_id, booking.arrival, booking.departure
            );
        }
    }

    Ok(bookings)
}
