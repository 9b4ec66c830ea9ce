use serde::{Deserialize, Serialize};

use crate::geo::LatLong;

pub type PlaceId = String;

/// A reported incident shown as one marker on the map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub category: String,
    pub name: String,
    pub text: String,
    pub pos: LatLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    StreetRobbery,
    TrafficAccident,
    StreetFight,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::StreetRobbery,
        Category::TrafficAccident,
        Category::StreetFight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::StreetRobbery => "Robo-Asalto",
            Category::TrafficAccident => "Accidente-de-Transito",
            Category::StreetFight => "Pelea-Callejera",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            Category::StreetRobbery => "green",
            Category::TrafficAccident => "blue",
            Category::StreetFight => "red",
        }
    }
}

pub const DEFAULT_FILL_COLOR: &str = "#34495e";
pub const MARKER_STROKE_COLOR: &str = "white";
pub const MARKER_ICON_SIZE: (f64, f64) = (24.0, 24.0);
pub const MARKER_ICON_ANCHOR: (f64, f64) = (12.0, 12.0);

const MARKER_PATH: &str = "M12.75 0l-2.25 2.25 2.25 2.25-5.25 6h-5.25l4.125 4.125-6.375 8.452v0.923h0.923l8.452-6.375 4.125 4.125v-5.25l6-5.25 2.25 2.25 2.25-2.25-11.25-11.25zM10.5 12.75l-1.5-1.5 5.25-5.25 1.5 1.5-5.25 5.25z";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
}

impl MarkerStyle {
    /// Style for a category label. Unknown labels keep the default fill.
    pub fn for_category(label: &str) -> Self {
        let fill_color = match Category::from_label(label) {
            Some(category) => category.fill_color(),
            None => {
                tracing::debug!(category = label, "no color for category, using default");
                DEFAULT_FILL_COLOR
            }
        };

        Self {
            fill_color,
            fill_opacity: 1.0,
            stroke_color: MARKER_STROKE_COLOR,
            stroke_weight: 1.0,
        }
    }

    /// Inline SVG data URI usable as a marker icon.
    pub fn icon_url(&self) -> String {
        format!(
            "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24'%3E%3Cpath fill='{}' fill-opacity='{}' stroke='{}' stroke-width='{}' d='{}'/%3E%3C/svg%3E",
            escape_color(self.fill_color),
            self.fill_opacity,
            escape_color(self.stroke_color),
            self.stroke_weight,
            MARKER_PATH,
        )
    }
}

fn escape_color(color: &str) -> String {
    color.replace('#', "%23")
}
