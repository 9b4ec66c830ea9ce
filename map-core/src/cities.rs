use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{geo::LatLong, viewport::Viewport};

/// Zoom applied when jumping to a city.
pub const CITY_ZOOM: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityChoice {
    pub key: &'static str,
    pub label: &'static str,
}

pub const CITY_CHOICES: [CityChoice; 4] = [
    CityChoice {
        key: "madrid",
        label: "Madrid",
    },
    CityChoice {
        key: "malaga",
        label: "Málaga",
    },
    CityChoice {
        key: "paris",
        label: "París",
    },
    CityChoice {
        key: "berlin",
        label: "Berlín",
    },
];

/// Preset centers by city name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct CityTable(BTreeMap<String, LatLong>);

impl CityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, center: LatLong) -> Option<LatLong> {
        self.0.insert(name.into(), center)
    }

    pub fn get(&self, name: &str) -> Option<LatLong> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LatLong)> {
        self.0.iter().map(|(name, center)| (name.as_str(), *center))
    }
}

impl<S: Into<String>> FromIterator<(S, LatLong)> for CityTable {
    fn from_iter<T: IntoIterator<Item = (S, LatLong)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, center)| (name.into(), center))
                .collect(),
        )
    }
}

/// The city picked in the dropdown, applied on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityShortcut {
    chosen: Option<String>,
}

impl CityShortcut {
    pub fn new(chosen: Option<String>) -> Self {
        Self { chosen }
    }

    pub fn choose(&mut self, name: impl Into<String>) {
        self.chosen = Some(name.into());
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// Moves `viewport` to the chosen city. Does nothing when no city is
    /// chosen or the table has no entry for it.
    pub fn apply(&self, table: &CityTable, viewport: &mut Viewport) -> Option<LatLong> {
        let center = table.get(self.chosen()?)?;
        viewport.center = center;
        viewport.zoom = CITY_ZOOM;
        Some(center)
    }
}
