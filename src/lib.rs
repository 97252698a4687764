//! Common functionality for hotelman.
#![warn(missing_docs)]
pub mod allocation;
pub mod availability;
pub mod booking;
pub mod cli;
pub mod command;
pub mod hotel;
pub mod id;
pub mod input;
pub mod log;
pub mod model;
pub mod settings;

#[cfg(test)]
mod fixture;

use std::path::PathBuf;

/// Get the path to the hotelman configuration directory.
pub fn get_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("hotelman");

    path
}
