use serde::{Deserialize, Serialize};

use crate::geo::{project, unproject, CanvasSize, LatLong, MapBounds};

pub const INITIAL_ZOOM: f64 = 5.0;

const EPSILON: f64 = 1e-9;

/// Where the map is looking.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLong,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLong) -> Self {
        Self {
            center,
            zoom: INITIAL_ZOOM,
        }
    }

    /// Raises the zoom to `floor` if it is below it. Returns whether it changed.
    pub fn raise_zoom_to(&mut self, floor: f64) -> bool {
        if self.zoom < floor {
            self.zoom = floor;
            true
        } else {
            false
        }
    }

    pub fn fit_bounds(&mut self, bounds: &MapBounds, size: CanvasSize, padding: f64) {
        self.center = bounds.center();
        self.zoom = bounds.fit_zoom(size, padding);
    }

    /// Geographic area shown on a canvas of `size` pixels.
    pub fn visible_bounds(&self, size: CanvasSize) -> MapBounds {
        let (x, y) = project(self.center, self.zoom);
        let (half_width, half_height) = (size.width / 2.0, size.height / 2.0);

        MapBounds {
            north_east: unproject(x + half_width, y - half_height, self.zoom),
            south_west: unproject(x - half_width, y + half_height, self.zoom),
        }
    }

    pub fn approx_eq(&self, other: &Viewport) -> bool {
        (self.center.lat - other.center.lat).abs() < EPSILON
            && (self.center.long - other.center.long).abs() < EPSILON
            && (self.zoom - other.zoom).abs() < EPSILON
    }
}
