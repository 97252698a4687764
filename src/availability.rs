//! The availability calculator: how many rooms of a type are free at a hotel on a date.
use crate::booking::{Booking, occupied_count};
use crate::hotel::Hotel;
use chrono::NaiveDate;

/// The number of free rooms of the given type at `hotel` on `date`.
///
/// Free = physical rooms of the type minus bookings of the type whose stay covers `date`
/// (half-open: a booking departing on `date` does not count). The result is *not* clamped
/// at zero; a negative count signals an over-booked data set and is surfaced as-is.
pub fn available_rooms(
    hotel: &Hotel,
    bookings: &[Booking],
    date: NaiveDate,
    room_type: &str,
) -> i64 {
    let total = hotel.room_count(room_type);
    let occupied = occupied_count(bookings, &hotel.id, room_type, date);

    total as i64 - occupied as i64
}
