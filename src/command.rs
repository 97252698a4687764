//! The command dispatcher: evaluates free-text commands against the loaded snapshot.
//!
//! Commands have the shape `Name(arg1, arg2, ...)`. Dates are 8-digit `yyyyMMdd` strings,
//! optionally given as an inclusive range joined by `-`. Every failure aborts only the
//! current command; the caller prints the message and carries on with the session.
use crate::allocation::{AllocationError, AllocationPolicy, allocate, available_pool};
use crate::availability::available_rooms;
use crate::booking::date_format;
use crate::model::Model;
use chrono::NaiveDate;
use itertools::Itertools;
use std::fmt::Write;
use thiserror::Error;

/// The reply printed for a command name that isn't recognised
const INVALID_COMMAND_MSG: &str =
    "Invalid command. Supported commands: Availability, RoomTypes, Help";

/// An error raised while parsing or executing a single command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The requested hotel ID has no entry in the catalog
    #[error("Hotel not found.")]
    HotelNotFound,
    /// The allocator could not satisfy the request
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// Missing or misplaced parentheses
    #[error("Invalid {0} command format.")]
    InvalidFormat(String),
    /// The wrong number of arguments between the parentheses
    #[error("Expected {expected} arguments, got {actual}")]
    WrongArgCount {
        /// The number of arguments the command takes
        expected: usize,
        /// The number of arguments supplied
        actual: usize,
    },
    /// A date that is not an 8-digit `yyyyMMdd` string
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// A date range whose end precedes its start
    #[error("Date range end {1} is before start {0}")]
    ReversedDateRange(NaiveDate, NaiveDate),
    /// A party size that is not a non-negative integer
    #[error("Invalid party size: {0}")]
    InvalidPartySize(String),
}

/// Evaluate one line of user input, producing the line to print in reply.
///
/// Command names are matched case-insensitively, as in `Availability(H1, 20240901, SGL)`.
/// Errors are folded into one-line messages here so the session loop never aborts.
pub fn dispatch(model: &Model, policy: &AllocationPolicy, line: &str) -> String {
    let name = line
        .trim()
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or_default();

    if name.eq_ignore_ascii_case("Availability") {
        report("Availability", handle_availability(model, line))
    } else if name.eq_ignore_ascii_case("RoomTypes") {
        report("RoomTypes", handle_room_types(model, policy, line))
    } else if name.eq_ignore_ascii_case("Help") {
        help_text()
    } else {
        INVALID_COMMAND_MSG.to_string()
    }
}

/// Fold a command's outcome into the line to print
fn report(name: &str, outcome: Result<String, CommandError>) -> String {
    match outcome {
        Ok(reply) => reply,
        Err(err) => format!("Error processing {name} command: {err}"),
    }
}

/// Handle `Availability(hotelId, dateRange, roomType)`.
fn handle_availability(model: &Model, line: &str) -> Result<String, CommandError> {
    let [hotel_id, date_range, room_type] = parse_arguments(line, "Availability")?;
    let dates = parse_date_range(&date_range)?;
    let hotel = model
        .hotels
        .get(hotel_id.as_str())
        .ok_or(CommandError::HotelNotFound)?;

    let results: Vec<_> = dates
        .into_iter()
        .map(|date| {
            let count = available_rooms(hotel, &model.bookings, date, &room_type);
            format!("Available rooms: {count}")
        })
        .collect();

    // Only the first date of a range is reported; see DESIGN.md
    Ok(results
        .into_iter()
        .next()
        .unwrap_or_else(|| "No availability information.".to_string()))
}

/// Handle `RoomTypes(hotelId, dateRange, numPeople)`.
fn handle_room_types(
    model: &Model,
    policy: &AllocationPolicy,
    line: &str,
) -> Result<String, CommandError> {
    let [hotel_id, date_range, party_size] = parse_arguments(line, "RoomTypes")?;
    let dates = parse_date_range(&date_range)?;
    let party_size: u32 = party_size
        .parse()
        .map_err(|_| CommandError::InvalidPartySize(party_size.clone()))?;
    let hotel = model
        .hotels
        .get(hotel_id.as_str())
        .ok_or(CommandError::HotelNotFound)?;

    let results: Vec<_> = dates
        .into_iter()
        .map(|date| {
            let pool = available_pool(hotel, &model.bookings, date);
            let assignments = allocate(&pool, party_size, policy)?;
            Ok(assignments.iter().join(", "))
        })
        .collect::<Result<_, CommandError>>()?;

    // Only the first date of a range is reported; see DESIGN.md
    Ok(results
        .into_iter()
        .next()
        .unwrap_or_else(|| "No allocation information.".to_string()))
}

/// Split the arguments of a `Name(arg1, arg2, ...)` command into exactly `N` trimmed strings.
fn parse_arguments<const N: usize>(
    line: &str,
    name: &str,
) -> Result<[String; N], CommandError> {
    let open = line.find('(');
    let close = line.find(')');
    let (Some(open), Some(close)) = (open, close) else {
        return Err(CommandError::InvalidFormat(name.to_string()));
    };
    if close <= open + 1 {
        return Err(CommandError::InvalidFormat(name.to_string()));
    }

    let args: Vec<_> = line[open + 1..close]
        .split(',')
        .map(|arg| arg.trim().to_string())
        .collect();
    let actual = args.len();
    args.try_into().map_err(|_| CommandError::WrongArgCount {
        expected: N,
        actual,
    })
}

/// Parse a single 8-digit `yyyyMMdd` date.
fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    let s = s.trim();
    let invalid = || CommandError::InvalidDate(s.to_string());
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, date_format::FORMAT).map_err(|_| invalid())
}

/// Parse a date or date range into the list of calendar days it covers.
///
/// Either a single `yyyyMMdd` date, or two joined by `-`, expanded inclusively to every
/// day between them in ascending order. The result is never empty.
pub fn parse_date_range(s: &str) -> Result<Vec<NaiveDate>, CommandError> {
    let Some((start, end)) = s.split_once('-') else {
        return Ok(vec![parse_date(s)?]);
    };

    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end < start {
        return Err(CommandError::ReversedDateRange(start, end));
    }

    Ok(start.iter_days().take_while(|date| *date <= end).collect())
}

/// Usage information for one command, rendered into the help text.
struct CommandUsage {
    name: &'static str,
    args: &'static [&'static str],
    description: &'static str,
    examples: &'static [&'static str],
}

const USAGE: &[CommandUsage] = &[
    CommandUsage {
        name: "Availability",
        args: &["hotelId", "dateRange", "roomType"],
        description: "Check room availability.",
        examples: &[
            "Availability(H1, 20240901, SGL)",
            "Availability(H1, 20240901-20240903, DBL)",
        ],
    },
    CommandUsage {
        name: "RoomTypes",
        args: &["hotelId", "dateRange", "numPeople"],
        description: "List available room types.",
        examples: &[
            "RoomTypes(H1, 20240904, 3)",
            "RoomTypes(H1, 20240905-20240907, 5)",
        ],
    },
];

/// The static usage text printed for the `Help` command.
pub fn help_text() -> String {
    let mut out = "Available Commands:\n".to_string();
    for usage in USAGE {
        let args = usage.args.iter().map(|arg| format!("[{arg}]")).join(", ");
        writeln!(out, "\n  {}({args})", usage.name).unwrap();
        writeln!(out, "    {}", usage.description).unwrap();
        writeln!(out, "    Examples:").unwrap();
        for example in usage.examples {
            writeln!(out, "      - {example}").unwrap();
        }
    }

    out
}
