use std::mem;

use crate::place::Place;

/// Zoom level a selection raises the map to, at minimum.
pub const MIN_SELECTED_ZOOM: f64 = 13.0;

/// Selected place and whether its info window is open.
///
/// Once a place is selected there is no way back to `None`; closing the
/// info window keeps the selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Closed(Place),
    Open(Place),
}

impl Selection {
    pub fn selected(&self) -> Option<&Place> {
        match self {
            Selection::None => None,
            Selection::Closed(place) | Selection::Open(place) => Some(place),
        }
    }

    pub fn open_place(&self) -> Option<&Place> {
        match self {
            Selection::Open(place) => Some(place),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// Selects `place` and opens its info window. A window that was already
    /// open is closed first and returned.
    pub fn select(&mut self, place: Place) -> Option<Place> {
        let closed = match mem::take(self) {
            Selection::Open(previous) => Some(previous),
            _ => None,
        };
        *self = Selection::Open(place);
        closed
    }

    /// Closes the info window. Returns false if none was open.
    pub fn close(&mut self) -> bool {
        match mem::take(self) {
            Selection::Open(place) => {
                *self = Selection::Closed(place);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }
}
