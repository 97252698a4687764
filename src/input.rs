//! Common routines for reading input data files.
//!
//! Both input files are JSON lists, the format the booking data is persisted in.
use crate::id::HasID;
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::BufReader;
use std::path::Path;

pub mod booking;
pub mod hotel;
pub use booking::read_bookings;
pub use hotel::read_hotels;

/// An error message for when an input file cannot be read
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read a series of type `T`s from a JSON file into a `Vec<T>`.
fn read_json<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let file = File::open(file_path).with_context(|| input_err_msg(file_path))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| input_err_msg(file_path))
}

/// Read a JSON file of records with IDs into a map keyed by ID, preserving file order.
///
/// Fails if two records share an ID, which would otherwise silently drop one of them.
fn read_json_id_file<T, ID>(file_path: &Path) -> Result<IndexMap<ID, T>>
where
    T: HasID<ID> + DeserializeOwned,
    ID: Hash + Eq + Clone + Display,
{
    let records: Vec<T> = read_json(file_path)?;
    let mut map = IndexMap::with_capacity(records.len());
    for record in records {
        let id = record.get_id().clone();
        ensure!(
            map.insert(id.clone(), record).is_none(),
            "Duplicate ID {id} in {}",
            file_path.display()
        );
    }

    Ok(map)
}
