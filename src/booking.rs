//! Bookings reserve a room type at a hotel over a date interval.
//!
//! A booking references a room *type*, never a specific room: overlapping bookings for the
//! same type are aggregated as a count against that type's inventory.
use crate::id::{HotelID, RoomTypeID};
use chrono::NaiveDate;
use serde::Deserialize;

/// A reservation of one room of a given type at a hotel.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// The ID of the hotel the booking is at
    pub hotel_id: HotelID,
    /// First occupied date
    #[serde(with = "date_format")]
    pub arrival: NaiveDate,
    /// Check-out date; the departure day itself is free
    #[serde(with = "date_format")]
    pub departure: NaiveDate,
    /// The code of the booked room type
    pub room_type: RoomTypeID,
}

impl Booking {
    /// Whether this booking occupies a room on the given date.
    ///
    /// The stay is the half-open interval `[arrival, departure)`.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.arrival <= date && date < self.departure
    }
}

/// The number of bookings occupying a room of the given type at the given hotel on `date`.
pub fn occupied_count(
    bookings: &[Booking],
    hotel_id: &HotelID,
    room_type: &str,
    date: NaiveDate,
) -> u64 {
    bookings
        .iter()
        .filter(|b| b.hotel_id == *hotel_id && *b.room_type.0 == *room_type && b.occupies(date))
        .count() as u64
}

/// (De)serialization of the 8-digit `yyyyMMdd` date strings used in booking files.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    /// The date format used in booking files
    pub const FORMAT: &str = "%Y%m%d";

    /// Deserialize a `NaiveDate` from a `yyyyMMdd` string
    pub fn deserialize<'de, D>(deserialiser: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserialiser)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{booking, bookings};
    use rstest::rstest;

    #[rstest]
    #[case("20240830", false)] // before arrival
    #[case("20240831", true)] // arrival day
    #[case("20240901", true)] // mid-stay
    #[case("20240902", false)] // departure day is free
    #[case("20240903", false)] // after departure
    fn test_occupies(booking: Booking, #[case] date: &str, #[case] expected: bool) {
        let date = NaiveDate::parse_from_str(date, date_format::FORMAT).unwrap();
        assert_eq!(booking.occupies(date), expected);
    }

    #[rstest]
    fn test_occupied_count(bookings: Vec<Booking>) {
        let date = NaiveDate::parse_from_str("20240901", date_format::FORMAT).unwrap();
        let h1 = "H1".into();
        assert_eq!(occupied_count(&bookings, &h1, "SGL", date), 1);
        assert_eq!(occupied_count(&bookings, &h1, "DBL", date), 0);

        // No bookings at all for this hotel
        assert_eq!(occupied_count(&bookings, &"H2".into(), "SGL", date), 0);
    }
}
