//! Fixtures for tests
use crate::booking::{Booking, date_format};
use crate::hotel::{Hotel, HotelMap, Room, RoomType};
use crate::model::Model;
use chrono::NaiveDate;
use rstest::fixture;

/// Create a booking from `yyyyMMdd` date strings
pub fn new_booking(hotel_id: &str, arrival: &str, departure: &str, room_type: &str) -> Booking {
    let date = |s| NaiveDate::parse_from_str(s, date_format::FORMAT).unwrap();
    Booking {
        hotel_id: hotel_id.into(),
        arrival: date(arrival),
        departure: date(departure),
        room_type: room_type.into(),
    }
}

/// A date with no bookings in the [`bookings`] fixture
#[fixture]
pub fn date() -> NaiveDate {
    NaiveDate::parse_from_str("20240904", date_format::FORMAT).unwrap()
}

/// Hotel H1 with two double rooms and one single room
#[fixture]
pub fn hotel() -> Hotel {
    let room = |room_id: &str, room_type: &str| Room {
        room_id: room_id.to_string(),
        room_type: room_type.into(),
    };

    Hotel {
        id: "H1".into(),
        name: "Hotel California".to_string(),
        room_types: vec![
            RoomType {
                code: "SGL".into(),
                description: "Single Room".to_string(),
                amenities: vec!["WiFi".to_string()],
                features: vec!["Non-smoking".to_string()],
            },
            RoomType {
                code: "DBL".into(),
                description: "Double Room".to_string(),
                amenities: vec!["WiFi".to_string(), "TV".to_string()],
                features: vec!["Sea View".to_string()],
            },
        ],
        rooms: vec![room("201", "DBL"), room("202", "DBL"), room("101", "SGL")],
    }
}

/// A single SGL booking at H1 spanning 20240831-20240902
#[fixture]
pub fn booking() -> Booking {
    new_booking("H1", "20240831", "20240902", "SGL")
}

#[fixture]
pub fn bookings(booking: Booking) -> Vec<Booking> {
    vec![booking]
}

/// A session snapshot with the [`hotel`] and [`bookings`] fixtures
#[fixture]
pub fn model(hotel: Hotel, bookings: Vec<Booking>) -> Model {
    Model {
        hotels: HotelMap::from([(hotel.id.clone(), hotel)]),
        bookings,
    }
}
