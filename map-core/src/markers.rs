use std::collections::HashMap;

use crate::place::PlaceId;

/// Handles of the markers currently mounted on the map, keyed by place.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<H> {
    handles: HashMap<PlaceId, H>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> MarkerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the handle for a mounted marker, replacing any previous one.
    pub fn register(&mut self, place_id: impl Into<PlaceId>, handle: H) -> Option<H> {
        self.handles.insert(place_id.into(), handle)
    }

    pub fn unregister(&mut self, place_id: &str) -> Option<H> {
        self.handles.remove(place_id)
    }

    pub fn lookup(&self, place_id: &str) -> Option<&H> {
        self.handles.get(place_id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
