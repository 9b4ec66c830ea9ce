use serde::{Deserialize, Serialize};

use crate::{cities::CityTable, geo::LatLong};

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const TOKEN_PLACEHOLDER: &str = "{accessToken}";

/// Everything the map view needs from the store besides the places.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapSettings {
    pub tile_url: String,
    pub credential: Option<String>,
    pub attribution: String,
    pub center: LatLong,
    pub cities: CityTable,
}

impl MapSettings {
    /// Tile URL with the credential filled in. Providers that need no token
    /// simply have no placeholder in their template.
    pub fn tile_url(&self) -> String {
        if !self.tile_url.contains(TOKEN_PLACEHOLDER) {
            return self.tile_url.clone();
        }
        match self.credential.as_deref() {
            Some(token) => self.tile_url.replace(TOKEN_PLACEHOLDER, token),
            None => {
                tracing::warn!("tile url expects a credential but none is configured");
                self.tile_url.replace(TOKEN_PLACEHOLDER, "")
            }
        }
    }
}
