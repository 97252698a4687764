//! The room allocator: greedy assignment of available room types to seat a party.
//!
//! Allocation is a fixed deterministic heuristic, not an optimal packing: the largest
//! room types are consumed first and a decision is never revisited, even when a
//! smaller-rooms-first assignment would waste fewer half-filled rooms.
use crate::booking::{Booking, occupied_count};
use crate::hotel::Hotel;
use crate::id::RoomTypeID;
use chrono::NaiveDate;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;
use serde_string_enum::DeserializeLabeledStringEnum;
use std::cmp::Reverse;
use std::fmt;
use thiserror::Error;

/// The headcount each room type can seat.
///
/// Room types without an entry are unknown to the allocator and handled according to
/// [`UnknownRoomTypePolicy`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CapacityTable(IndexMap<RoomTypeID, u32>);

impl Default for CapacityTable {
    /// The reference capacities: singles seat one, doubles seat two.
    fn default() -> Self {
        CapacityTable(IndexMap::from([("SGL".into(), 1), ("DBL".into(), 2)]))
    }
}

impl CapacityTable {
    /// Create a capacity table from (room type, headcount) pairs
    pub fn from_entries<I: IntoIterator<Item = (RoomTypeID, u32)>>(entries: I) -> Self {
        CapacityTable(entries.into_iter().collect())
    }

    /// The seating capacity of the given room type, if it is known
    pub fn capacity(&self, room_type: &RoomTypeID) -> Option<u32> {
        self.0.get(room_type).copied()
    }
}

/// How the allocator treats room types absent from the capacity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, DeserializeLabeledStringEnum)]
pub enum UnknownRoomTypePolicy {
    /// Exclude unknown room types from allocation (the reference behaviour)
    #[default]
    #[string = "ignore"]
    Ignore,
    /// Fail the allocation if an unknown room type is present in the available pool
    #[string = "reject"]
    Reject,
}

/// The configurable parts of the allocation heuristic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationPolicy {
    /// Seating capacity per room type
    pub capacities: CapacityTable,
    /// Treatment of room types absent from the capacity table
    pub unknown_room_types: UnknownRoomTypePolicy,
}

/// An error raised by the allocator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// The available pool cannot seat the requested headcount
    #[error("Not enough rooms to accommodate the request.")]
    InsufficientCapacity,
    /// An available room's type has no configured capacity (with the `reject` policy)
    #[error("No capacity is configured for room type {0}")]
    UnsupportedRoomType(RoomTypeID),
}

/// One room assigned by the allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The type of the assigned room
    pub room_type: RoomTypeID,
    /// Whether the room seats fewer guests than its capacity (a lone last guest in a double)
    pub underfilled: bool,
}

impl Assignment {
    fn filled(room_type: &RoomTypeID) -> Self {
        Assignment {
            room_type: room_type.clone(),
            underfilled: false,
        }
    }

    fn underfilled(room_type: &RoomTypeID) -> Self {
        Assignment {
            room_type: room_type.clone(),
            underfilled: true,
        }
    }
}

/// Underfilled rooms carry a trailing `!` marker (e.g. "DBL!").
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.room_type)?;
        if self.underfilled {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// The multiset of room types available at `hotel` on `date`, in inventory order.
///
/// The count per type equals the availability calculator's arithmetic for that type:
/// rooms of the type minus bookings of the type covering `date`. Rooms of the same type
/// are fungible, so the pool tracks codes rather than specific rooms.
pub fn available_pool(hotel: &Hotel, bookings: &[Booking], date: NaiveDate) -> Vec<RoomTypeID> {
    // Group rooms by type, preserving the order types first appear in the inventory
    let mut totals: IndexMap<&RoomTypeID, i64> = IndexMap::new();
    for room in &hotel.rooms {
        *totals.entry(&room.room_type).or_insert(0) += 1;
    }

    totals
        .into_iter()
        .map(|(room_type, total)| {
            let occupied = occupied_count(bookings, &hotel.id, &room_type.0, date);
            (room_type, total - occupied as i64)
        })
        .filter(|(_, free)| *free > 0)
        .flat_map(|(room_type, free)| itertools::repeat_n(room_type.clone(), free as usize))
        .collect()
}

/// Greedily assign rooms from `pool` to seat `party_size` guests.
///
/// Room types are consumed in descending capacity order (ties keep pool order): each room
/// seats up to its capacity, and a room whose capacity exceeds the remaining headcount
/// absorbs the rest and is marked underfilled. Fails without a partial result if the pool
/// cannot seat everyone. A party of zero yields an empty assignment.
pub fn allocate(
    pool: &[RoomTypeID],
    party_size: u32,
    policy: &AllocationPolicy,
) -> Result<Vec<Assignment>, AllocationError> {
    if policy.unknown_room_types == UnknownRoomTypePolicy::Reject
        && let Some(unknown) = pool
            .iter()
            .find(|room_type| policy.capacities.capacity(room_type).is_none())
    {
        return Err(AllocationError::UnsupportedRoomType(unknown.clone()));
    }

    // Largest capacity first; the sort is stable, so rooms of equal capacity keep pool order
    let ranked = pool
        .iter()
        .filter_map(|room_type| {
            policy
                .capacities
                .capacity(room_type)
                .map(|capacity| (room_type, capacity))
        })
        .sorted_by_key(|(_, capacity)| Reverse(*capacity));

    let mut remaining = party_size;
    let mut assignments = Vec::new();
    for (room_type, capacity) in ranked {
        if remaining == 0 {
            break;
        }
        if remaining >= capacity {
            assignments.push(Assignment::filled(room_type));
            remaining -= capacity;
        } else {
            assignments.push(Assignment::underfilled(room_type));
            remaining = 0;
        }
    }

    if remaining > 0 {
        return Err(AllocationError::InsufficientCapacity);
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{date, hotel, new_booking};
    use rstest::rstest;

    fn labels(assignments: &[Assignment]) -> Vec<String> {
        assignments.iter().map(ToString::to_string).collect()
    }

    fn pool(codes: &[&str]) -> Vec<RoomTypeID> {
        codes.iter().copied().map(RoomTypeID::from).collect()
    }

    #[rstest]
    fn test_available_pool_no_bookings(hotel: Hotel, date: NaiveDate) {
        // Inventory order is preserved: H1 lists its DBL rooms before its SGL room
        assert_eq!(available_pool(&hotel, &[], date), pool(&["DBL", "DBL", "SGL"]));
    }

    #[rstest]
    fn test_available_pool_with_bookings(hotel: Hotel, date: NaiveDate) {
        let bookings = [new_booking("H1", "20240904", "20240905", "DBL")];
        assert_eq!(
            available_pool(&hotel, &bookings, date),
            pool(&["DBL", "SGL"])
        );

        // A fully-booked (or over-booked) type disappears from the pool entirely
        let bookings = [
            new_booking("H1", "20240904", "20240905", "SGL"),
            new_booking("H1", "20240904", "20240905", "SGL"),
        ];
        assert_eq!(
            available_pool(&hotel, &bookings, date),
            pool(&["DBL", "DBL"])
        );
    }

    // Allocations over H1's inventory of 2 DBL + 1 SGL
    #[rstest]
    #[case(1, &["DBL!"])]
    #[case(2, &["DBL"])]
    #[case(3, &["DBL", "DBL!"])]
    #[case(4, &["DBL", "DBL"])]
    #[case(5, &["DBL", "DBL", "SGL"])]
    #[case(0, &[])]
    fn test_allocate(#[case] party_size: u32, #[case] expected: &[&str]) {
        let assignments = allocate(
            &pool(&["DBL", "DBL", "SGL"]),
            party_size,
            &AllocationPolicy::default(),
        )
        .unwrap();
        assert_eq!(labels(&assignments), expected);
    }

    #[rstest]
    fn test_allocate_insufficient_capacity() {
        assert_eq!(
            allocate(&pool(&["DBL", "DBL", "SGL"]), 6, &AllocationPolicy::default()),
            Err(AllocationError::InsufficientCapacity)
        );
        assert_eq!(
            allocate(&[], 1, &AllocationPolicy::default()),
            Err(AllocationError::InsufficientCapacity)
        );
    }

    /// Doubles are consumed before singles even when the pool lists singles first
    #[rstest]
    fn test_allocate_prefers_larger_rooms() {
        let assignments = allocate(
            &pool(&["SGL", "DBL", "SGL"]),
            3,
            &AllocationPolicy::default(),
        )
        .unwrap();
        assert_eq!(labels(&assignments), ["DBL", "SGL"]);
    }

    /// The heuristic never reconsiders: two singles would seat a party of two exactly,
    /// but the double is taken first and marked underfilled
    #[rstest]
    fn test_allocate_is_greedy_not_optimal() {
        let assignments = allocate(
            &pool(&["SGL", "SGL", "DBL"]),
            1,
            &AllocationPolicy::default(),
        )
        .unwrap();
        assert_eq!(labels(&assignments), ["DBL!"]);
    }

    #[rstest]
    fn test_allocate_unknown_room_type_ignored() {
        // Suites are not in the default capacity table, so they are never offered
        assert_eq!(
            allocate(&pool(&["SUI", "SUI"]), 1, &AllocationPolicy::default()),
            Err(AllocationError::InsufficientCapacity)
        );
    }

    #[rstest]
    fn test_allocate_unknown_room_type_rejected() {
        let policy = AllocationPolicy {
            unknown_room_types: UnknownRoomTypePolicy::Reject,
            ..AllocationPolicy::default()
        };
        assert_eq!(
            allocate(&pool(&["DBL", "SUI"]), 1, &policy),
            Err(AllocationError::UnsupportedRoomType("SUI".into()))
        );
    }

    /// A capacity table with extra room types participates in the same greedy order
    #[rstest]
    fn test_allocate_custom_capacities() {
        let policy = AllocationPolicy {
            capacities: CapacityTable::from_entries([
                ("SGL".into(), 1),
                ("DBL".into(), 2),
                ("QUAD".into(), 4),
            ]),
            ..AllocationPolicy::default()
        };
        let assignments = allocate(&pool(&["DBL", "QUAD", "SGL"]), 5, &policy).unwrap();
        assert_eq!(labels(&assignments), ["QUAD", "DBL!"]);
    }

    /// Identical inputs always produce the identical assignment sequence
    #[rstest]
    fn test_allocate_deterministic(hotel: Hotel, date: NaiveDate) {
        let pool = available_pool(&hotel, &[], date);
        let policy = AllocationPolicy::default();
        let first = allocate(&pool, 3, &policy).unwrap();
        for _ in 0..10 {
            assert_eq!(allocate(&pool, 3, &policy).unwrap(), first);
        }
    }
}
