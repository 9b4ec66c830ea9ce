use std::{fs, path::Path, sync::OnceLock};

use map_core::{CityTable, LatLong, MapSettings, Place};
use serde::Deserialize;

use crate::{config::StoreConfig, error::StoreError};

static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

pub fn init_store(config: StoreConfig) -> Result<(), StoreError> {
    STORE_CONFIG
        .set(config)
        .map_err(|_| StoreError::AlreadyInitialized)
}

pub fn get_config() -> Result<&'static StoreConfig, StoreError> {
    STORE_CONFIG.get().ok_or(StoreError::NotInitialized)
}

/// Contents of the places file: initial center, city presets and the
/// incidents themselves.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedData {
    pub center: LatLong,
    #[serde(default)]
    pub cities: CityTable,
    #[serde(default)]
    pub places: Vec<Place>,
}

pub fn parse_seed(json: &str) -> Result<SeedData, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads the places file from disk. Called on every refresh so edits show
/// up without a restart.
pub fn load_seed(path: &Path) -> Result<SeedData, StoreError> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

pub fn map_settings(config: &StoreConfig, seed: SeedData) -> MapSettings {
    MapSettings {
        tile_url: config.tile_url.clone(),
        credential: config.tile_token.clone(),
        attribution: config.attribution.clone(),
        center: seed.center,
        cities: seed.cities,
    }
}
