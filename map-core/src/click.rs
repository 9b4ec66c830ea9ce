use crate::geo::LatLong;

/// Last position clicked on the map background.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickTracker {
    last: Option<LatLong>,
}

impl ClickTracker {
    pub fn record(&mut self, pos: LatLong) {
        self.last = Some(pos);
    }

    pub fn last(&self) -> Option<LatLong> {
        self.last
    }

    pub fn label(&self) -> Option<String> {
        self.last
            .map(|pos| format!("You clicked: {}, {}", pos.lat, pos.long))
    }
}
