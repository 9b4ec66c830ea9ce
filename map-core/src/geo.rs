use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;

// Web Mercator is undefined at the poles.
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct MapBounds {
    pub north_east: LatLong,
    pub south_west: LatLong,
}

impl MapBounds {
    pub fn from_point(pos: LatLong) -> Self {
        Self {
            north_east: pos,
            south_west: pos,
        }
    }

    /// Smallest bounds enclosing every position, or `None` for an empty set.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLong>,
    {
        let mut positions = positions.into_iter();
        let mut bounds = Self::from_point(positions.next()?);
        positions.for_each(|pos| bounds.extend(pos));
        Some(bounds)
    }

    pub fn extend(&mut self, pos: LatLong) {
        self.north_east.lat = self.north_east.lat.max(pos.lat);
        self.north_east.long = self.north_east.long.max(pos.long);
        self.south_west.lat = self.south_west.lat.min(pos.lat);
        self.south_west.long = self.south_west.long.min(pos.long);
    }

    pub fn contains(&self, pos: LatLong) -> bool {
        pos.lat >= self.south_west.lat
            && pos.lat <= self.north_east.lat
            && pos.long >= self.south_west.long
            && pos.long <= self.north_east.long
    }

    /// Center of the bounds in projected space, so that a viewport centered
    /// here shows equal margins above and below.
    pub fn center(&self) -> LatLong {
        let (x_ne, y_ne) = project(self.north_east, 0.0);
        let (x_sw, y_sw) = project(self.south_west, 0.0);
        unproject((x_ne + x_sw) / 2.0, (y_ne + y_sw) / 2.0, 0.0)
    }

    /// Largest integer zoom at which the bounds fit inside `size` once
    /// `padding` pixels are reserved on every side.
    pub fn fit_zoom(&self, size: CanvasSize, padding: f64) -> f64 {
        let available_width = size.width - 2.0 * padding;
        let available_height = size.height - 2.0 * padding;

        let mut best_zoom = MIN_ZOOM;
        for zoom in MIN_ZOOM..=MAX_ZOOM {
            let (x_ne, y_ne) = project(self.north_east, zoom as f64);
            let (x_sw, y_sw) = project(self.south_west, zoom as f64);

            let width = (x_ne - x_sw).abs();
            let height = (y_sw - y_ne).abs();
            if width <= available_width && height <= available_height {
                best_zoom = zoom;
            } else {
                break;
            }
        }
        best_zoom as f64
    }
}

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Web Mercator pixel coordinates at `zoom`, origin at the north-west corner.
pub(crate) fn project(pos: LatLong, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (pos.long + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

pub(crate) fn unproject(x: f64, y: f64, zoom: f64) -> LatLong {
    let size = world_size(zoom);

    let long = x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees();
    LatLong { lat, long }
}
