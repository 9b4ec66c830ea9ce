use std::path::PathBuf;

use map_core::settings::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL};

pub const DEFAULT_PLACES_FILE: &str = "data/places.json";

/// Where the store reads its data from and how tiles are fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub places_file: PathBuf,
    pub tile_url: String,
    pub tile_token: Option<String>,
    pub attribution: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            places_file: var("PLACES_FILE")
                .unwrap_or_else(|| DEFAULT_PLACES_FILE.to_string())
                .into(),
            tile_url: var("MAP_TILE_URL").unwrap_or_else(|| DEFAULT_TILE_URL.to_string()),
            tile_token: var("MAP_TILE_TOKEN"),
            attribution: var("MAP_ATTRIBUTION").unwrap_or_else(|| DEFAULT_ATTRIBUTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[]));
        assert_eq!(config.places_file, PathBuf::from(DEFAULT_PLACES_FILE));
        assert_eq!(config.tile_url, DEFAULT_TILE_URL);
        assert_eq!(config.tile_token, None);
        assert_eq!(config.attribution, DEFAULT_ATTRIBUTION);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("PLACES_FILE", "/srv/incidents.json"),
            ("MAP_TILE_URL", "https://t.example/{z}/{x}/{y}.png?key={accessToken}"),
            ("MAP_TILE_TOKEN", "secret"),
        ]));
        assert_eq!(config.places_file, PathBuf::from("/srv/incidents.json"));
        assert_eq!(config.tile_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_token_is_unset() {
        let config = StoreConfig::from_lookup(lookup(&[("MAP_TILE_TOKEN", "  ")]));
        assert_eq!(config.tile_token, None);
    }
}
