//! Configuration for hotel-store
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::model::RoomCatalog;

/// Main configuration for a ReservationStore
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── accounts.txt       (one account per line)
    ///     └── reservations.txt   (one reservation per line)
    pub data_dir: PathBuf,

    /// Load the record files when the store is opened
    pub load_on_open: bool,

    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Rooms available for booking (not persisted)
    pub catalog: RoomCatalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./hotel_data"),
            load_on_open: true,
            catalog: RoomCatalog::standard(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for the record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Load record files on open (default: true)
    pub fn load_on_open(mut self, load: bool) -> Self {
        self.config.load_on_open = load;
        self
    }

    /// Replace the standard room catalog
    pub fn catalog(mut self, catalog: RoomCatalog) -> Self {
        self.config.catalog = catalog;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
