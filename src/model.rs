//! The immutable data snapshot a session runs against.
use crate::booking::Booking;
use crate::hotel::HotelMap;
use crate::input::{read_bookings, read_hotels};
use anyhow::{Context, Result};
use std::path::Path;

/// The hotel catalog and booking list for one session.
///
/// Loaded once at startup and never mutated: both query operations are pure reads, so a
/// shared `&Model` needs no locking even if commands were ever evaluated concurrently.
pub struct Model {
    /// All hotels, keyed by hotel ID
    pub hotels: HotelMap,
    /// All bookings, in file order
    pub bookings: Vec<Booking>,
}

impl Model {
    /// Load a snapshot from the given hotel and booking files.
    pub fn from_paths(hotels_path: &Path, bookings_path: &Path) -> Result<Model> {
        let hotels = read_hotels(hotels_path).context("Failed to load hotels.")?;
        let bookings = read_bookings(bookings_path, &hotels).context("Failed to load bookings.")?;

        Ok(Model { hotels, bookings })
    }
}
