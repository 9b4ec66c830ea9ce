use leptos::prelude::*;
use leptos::server;
use map_core::{MapSettings, Place};

#[cfg(feature = "ssr")]
use crate::store::{get_config, load_seed, map_settings};

/// Reloads the incident list from the places file.
#[server]
pub async fn fetch_places() -> Result<Vec<Place>, ServerFnError> {
    let seed = get_config().and_then(|config| load_seed(&config.places_file));
    match seed {
        Ok(seed) => {
            tracing::debug!(count = seed.places.len(), "loaded places");
            Ok(seed.places)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load places");
            Err(ServerFnError::new(format!("Store error: {}", e)))
        }
    }
}

#[server]
pub async fn fetch_map_settings() -> Result<MapSettings, ServerFnError> {
    let settings = get_config().and_then(|config| {
        load_seed(&config.places_file).map(|seed| map_settings(config, seed))
    });
    match settings {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::error!(error = %e, "failed to load map settings");
            Err(ServerFnError::new(format!("Store error: {}", e)))
        }
    }
}
