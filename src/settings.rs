//! Code for loading program settings.
use crate::allocation::{AllocationPolicy, CapacityTable, UnknownRoomTypePolicy};
use crate::get_config_dir;
use crate::input::input_err_msg;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Get the path to where the settings file will be read from
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Program settings from config file
#[derive(Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seating capacity per room type (defaults to SGL = 1, DBL = 2)
    #[serde(default)]
    pub capacities: CapacityTable,
    /// How the allocator treats room types absent from the capacity table
    #[serde(default)]
    pub unknown_room_types: UnknownRoomTypePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            capacities: CapacityTable::default(),
            unknown_room_types: UnknownRoomTypePolicy::default(),
        }
    }
}

impl Settings {
    /// Read the settings file from the user's config directory.
    ///
    /// If the file is not present, default values for settings will be used
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Read the settings from the specified path, or defaults if no file exists there
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
        toml::from_str(&contents).with_context(|| input_err_msg(file_path))
    }

    /// The allocation policy these settings configure
    pub fn allocation_policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            capacities: self.capacities.clone(),
            unknown_room_types: self.unknown_room_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_settings_load_from_path_no_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME); // NB: doesn't exist
        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_settings_load_from_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(
                file,
                "log_level = \"warn\"\nunknown_room_types = \"reject\"\n\n[capacities]\nSGL = 1\nDBL = 2\nQUAD = 4"
            )
            .unwrap();
        }

        assert_eq!(
            Settings::load_from_path(&file_path).unwrap(),
            Settings {
                log_level: "warn".to_string(),
                capacities: CapacityTable::from_entries([
                    ("SGL".into(), 1),
                    ("DBL".into(), 2),
                    ("QUAD".into(), 4)
                ]),
                unknown_room_types: UnknownRoomTypePolicy::Reject,
            }
        );
    }

    #[test]
    fn test_settings_load_from_path_invalid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SETTINGS_FILE_NAME);
        File::create(&file_path)
            .unwrap()
            .write_all(b"log_level = 5")
            .unwrap();
        assert!(Settings::load_from_path(&file_path).is_err());
    }
}
