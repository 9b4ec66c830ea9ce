use std::fmt;

use crate::{
    cities::{CityShortcut, CityTable},
    click::ClickTracker,
    geo::{CanvasSize, LatLong, MapBounds},
    markers::MarkerRegistry,
    place::{Place, PlaceId},
    selection::{Selection, MIN_SELECTED_ZOOM},
    viewport::Viewport,
};

/// Pixels kept free around the places when fitting the initial view.
pub const FIT_PADDING: f64 = 20.0;

/// Emitted after every mutation of a [`MapState`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    ViewportChanged(Viewport),
    BoundsFitted(MapBounds),
    BoundsSkipped,
    InfoClosed(PlaceId),
    PlaceSelected(PlaceId),
    MarkerRegistered(PlaceId),
    MarkerUnregistered(PlaceId),
    CityChosen(String),
    CityApplied(String),
    CityIgnored(Option<String>),
    Clicked(LatLong),
}

impl MapEvent {
    /// Events for requests that were silently dropped.
    pub fn is_fallback(&self) -> bool {
        matches!(self, MapEvent::CityIgnored(_) | MapEvent::BoundsSkipped)
    }
}

pub type Subscriber = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// The open info window together with the marker it is anchored to.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoAnchor<H> {
    pub place: Place,
    pub handle: H,
    /// Bumped every time a window is opened, so reopening the same place
    /// is distinguishable from leaving it open.
    pub generation: u64,
}

/// View state of the incident map: viewport, selection, mounted markers,
/// city shortcut and last background click.
///
/// `H` is whatever the rendering layer uses to anchor an info window to a
/// marker.
pub struct MapState<H> {
    viewport: Viewport,
    selection: Selection,
    markers: MarkerRegistry<H>,
    city: CityShortcut,
    clicks: ClickTracker,
    generation: u64,
    subscribers: Vec<Subscriber>,
}

impl<H: fmt::Debug> fmt::Debug for MapState<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapState")
            .field("viewport", &self.viewport)
            .field("selection", &self.selection)
            .field("markers", &self.markers)
            .field("city", &self.city)
            .field("clicks", &self.clicks)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<H> MapState<H> {
    pub fn new(center: LatLong) -> Self {
        Self {
            viewport: Viewport::new(center),
            selection: Selection::default(),
            markers: MarkerRegistry::new(),
            city: CityShortcut::default(),
            clicks: ClickTracker::default(),
            generation: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&self, event: MapEvent) {
        self.subscribers.iter().for_each(|subscriber| subscriber(&event));
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn markers(&self) -> &MarkerRegistry<H> {
        &self.markers
    }

    pub fn chosen_city(&self) -> Option<&str> {
        self.city.chosen()
    }

    pub fn last_click(&self) -> Option<LatLong> {
        self.clicks.last()
    }

    pub fn click_label(&self) -> Option<String> {
        self.clicks.label()
    }

    /// Fits the viewport around every place. An empty list leaves the
    /// viewport where it is.
    pub fn fit_to_places(&mut self, places: &[Place], size: CanvasSize) -> Option<MapBounds> {
        let Some(bounds) = MapBounds::from_positions(places.iter().map(|place| place.pos)) else {
            tracing::debug!("no places to fit the map to");
            self.emit(MapEvent::BoundsSkipped);
            return None;
        };

        self.viewport.fit_bounds(&bounds, size, FIT_PADDING);
        self.emit(MapEvent::BoundsFitted(bounds));
        self.emit(MapEvent::ViewportChanged(self.viewport));
        Some(bounds)
    }

    /// Records a viewport change made directly on the map (pan, zoom).
    pub fn sync_viewport(&mut self, viewport: Viewport) {
        if self.viewport.approx_eq(&viewport) {
            return;
        }
        self.viewport = viewport;
        self.emit(MapEvent::ViewportChanged(self.viewport));
    }

    /// Marker click: closes any open info window, opens one for `place`,
    /// zooms in to at least [`MIN_SELECTED_ZOOM`] and centers on the place.
    pub fn select_place(&mut self, place: &Place) {
        if let Some(closed) = self.selection.select(place.clone()) {
            self.emit(MapEvent::InfoClosed(closed.id));
        }
        self.generation += 1;
        self.emit(MapEvent::PlaceSelected(place.id.clone()));

        self.viewport.raise_zoom_to(MIN_SELECTED_ZOOM);
        self.viewport.center = place.pos;
        self.emit(MapEvent::ViewportChanged(self.viewport));
    }

    pub fn close_info(&mut self) {
        if self.selection.close() {
            if let Some(place) = self.selection.selected() {
                self.emit(MapEvent::InfoClosed(place.id.clone()));
            }
        }
    }

    pub fn register_marker(&mut self, place_id: impl Into<PlaceId>, handle: H) {
        let place_id = place_id.into();
        self.markers.register(place_id.clone(), handle);
        self.emit(MapEvent::MarkerRegistered(place_id));
    }

    pub fn unregister_marker(&mut self, place_id: &str) {
        if self.markers.unregister(place_id).is_some() {
            self.emit(MapEvent::MarkerUnregistered(place_id.to_string()));
        }
    }

    pub fn choose_city(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.city.choose(name.clone());
        self.emit(MapEvent::CityChosen(name));
    }

    /// Jumps to the chosen city. Unknown cities are ignored.
    pub fn apply_city(&mut self, table: &CityTable) -> bool {
        match self.city.apply(table, &mut self.viewport) {
            Some(_) => {
                let name = self.city.chosen().unwrap_or_default().to_string();
                self.emit(MapEvent::CityApplied(name));
                self.emit(MapEvent::ViewportChanged(self.viewport));
                true
            }
            None => {
                tracing::debug!(city = ?self.city.chosen(), "city not in shortcut table");
                self.emit(MapEvent::CityIgnored(self.city.chosen().map(str::to_string)));
                false
            }
        }
    }

    pub fn record_click(&mut self, pos: LatLong) {
        self.clicks.record(pos);
        self.emit(MapEvent::Clicked(pos));
    }
}

impl<H: Clone> MapState<H> {
    /// The open info window and its marker handle, if both exist.
    pub fn info_anchor(&self) -> Option<InfoAnchor<H>> {
        let place = self.selection.open_place()?;
        let handle = self.markers.lookup(&place.id)?;
        Some(InfoAnchor {
            place: place.clone(),
            handle: handle.clone(),
            generation: self.generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{cities::CITY_ZOOM, viewport::INITIAL_ZOOM};

    fn place(id: &str, lat: f64, long: f64) -> Place {
        Place {
            id: id.to_string(),
            category: "Pelea-Callejera".to_string(),
            name: format!("Vecino {id}"),
            text: "Pelea a la salida del bar".to_string(),
            pos: LatLong::new(lat, long),
        }
    }

    fn state_with_markers(places: &[Place]) -> MapState<String> {
        let mut state = MapState::new(LatLong::new(40.0, -3.0));
        for place in places {
            state.register_marker(place.id.clone(), format!("marker-{}", place.id));
        }
        state
    }

    fn recorded(state: &mut MapState<String>) -> Arc<Mutex<Vec<MapEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        state.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_initial_state() {
        let state: MapState<()> = MapState::new(LatLong::new(40.0, -3.0));
        assert_eq!(state.selection(), &Selection::None);
        assert_eq!(state.viewport().zoom, INITIAL_ZOOM);
        assert_eq!(state.click_label(), None);
        assert!(state.info_anchor().is_none());
    }

    #[test]
    fn test_at_most_one_window_open() {
        let places = [place("a", 40.0, -3.0), place("b", 41.0, -4.0), place("c", 42.0, -5.0)];
        let mut state = state_with_markers(&places);

        for id in [0, 1, 1, 2, 0, 2] {
            state.select_place(&places[id]);
            assert!(state.selection().is_open());
            assert_eq!(state.selection().open_place(), Some(&places[id]));
        }
        state.close_info();
        assert!(!state.selection().is_open());
    }

    #[test]
    fn test_second_click_anchors_to_second_marker() {
        let places = [place("a", 40.0, -3.0), place("b", 41.0, -4.0)];
        let mut state = state_with_markers(&places);
        let events = recorded(&mut state);

        state.select_place(&places[0]);
        state.select_place(&places[1]);

        let anchor = state.info_anchor().unwrap();
        assert_eq!(anchor.handle, "marker-b");
        assert_eq!(anchor.place.id, "b");

        let events = events.lock().unwrap();
        let closed = events
            .iter()
            .position(|e| e == &MapEvent::InfoClosed("a".to_string()))
            .unwrap();
        let opened = events
            .iter()
            .position(|e| e == &MapEvent::PlaceSelected("b".to_string()))
            .unwrap();
        assert!(closed < opened);
    }

    #[test]
    fn test_reselect_bumps_generation() {
        let places = [place("a", 40.0, -3.0)];
        let mut state = state_with_markers(&places);

        state.select_place(&places[0]);
        let first = state.info_anchor().unwrap().generation;
        state.select_place(&places[0]);
        assert!(state.info_anchor().unwrap().generation > first);
    }

    #[test]
    fn test_close_keeps_selection() {
        let places = [place("a", 40.0, -3.0)];
        let mut state = state_with_markers(&places);

        state.select_place(&places[0]);
        state.close_info();
        assert_eq!(state.selection().selected(), Some(&places[0]));
        assert!(state.info_anchor().is_none());
    }

    #[test]
    fn test_no_anchor_without_marker() {
        let places = [place("a", 40.0, -3.0)];
        let mut state: MapState<String> = MapState::new(LatLong::default());
        state.select_place(&places[0]);
        assert!(state.selection().is_open());
        assert!(state.info_anchor().is_none());
    }

    #[test]
    fn test_unregister_drops_anchor() {
        let places = [place("a", 40.0, -3.0)];
        let mut state = state_with_markers(&places);
        state.select_place(&places[0]);
        state.unregister_marker("a");
        assert!(state.markers().is_empty());
        assert!(state.info_anchor().is_none());
    }

    #[test]
    fn test_select_raises_zoom_to_floor() {
        let places = [place("a", 40.4, -3.7)];
        let mut state = state_with_markers(&places);

        state.select_place(&places[0]);
        assert_eq!(state.viewport().zoom, MIN_SELECTED_ZOOM);
        assert_eq!(state.viewport().center, LatLong::new(40.4, -3.7));
    }

    #[test]
    fn test_select_keeps_higher_zoom() {
        let places = [place("a", 40.4, -3.7)];
        let mut state = state_with_markers(&places);
        state.sync_viewport(Viewport {
            center: LatLong::new(0.0, 0.0),
            zoom: 16.0,
        });

        state.select_place(&places[0]);
        assert_eq!(state.viewport().zoom, 16.0);
        assert_eq!(state.viewport().center, LatLong::new(40.4, -3.7));
    }

    #[test]
    fn test_fit_to_places_contains_all() {
        let places = [
            place("a", 40.4168, -3.7038),
            place("b", 36.7213, -4.4214),
            place("c", 48.8566, 2.3522),
        ];
        let size = CanvasSize::new(900.0, 600.0);
        let mut state: MapState<()> = MapState::new(LatLong::default());

        let bounds = state.fit_to_places(&places, size).unwrap();
        assert!(places.iter().all(|p| bounds.contains(p.pos)));

        let visible = state.viewport().visible_bounds(size);
        assert!(places.iter().all(|p| visible.contains(p.pos)));
    }

    #[test]
    fn test_fit_to_no_places_keeps_viewport() {
        let mut state: MapState<()> = MapState::new(LatLong::new(40.0, -3.0));
        let before = *state.viewport();
        assert_eq!(state.fit_to_places(&[], CanvasSize::new(800.0, 600.0)), None);
        assert_eq!(state.viewport(), &before);
    }

    #[test]
    fn test_apply_madrid() {
        let cities: CityTable = [("madrid", LatLong::new(40.4168, -3.7038))]
            .into_iter()
            .collect();
        let mut state: MapState<()> = MapState::new(LatLong::default());

        state.choose_city("madrid");
        assert!(state.apply_city(&cities));
        assert_eq!(state.viewport().center, LatLong::new(40.4168, -3.7038));
        assert_eq!(state.viewport().zoom, CITY_ZOOM);
    }

    #[test]
    fn test_apply_unlisted_city() {
        let cities: CityTable = [("madrid", LatLong::new(40.4168, -3.7038))]
            .into_iter()
            .collect();
        let mut state: MapState<String> = MapState::new(LatLong::new(1.0, 2.0));
        let events = recorded(&mut state);
        let before = *state.viewport();

        state.choose_city("roma");
        assert!(!state.apply_city(&cities));
        assert_eq!(state.viewport(), &before);
        assert!(events
            .lock()
            .unwrap()
            .contains(&MapEvent::CityIgnored(Some("roma".to_string()))));
    }

    #[test]
    fn test_marker_click_keeps_click_label() {
        let places = [place("a", 41.0, -4.0)];
        let mut state = state_with_markers(&places);

        state.record_click(LatLong::new(40.4, -3.7));
        assert_eq!(state.click_label().as_deref(), Some("You clicked: 40.4, -3.7"));

        state.select_place(&places[0]);
        assert_eq!(state.click_label().as_deref(), Some("You clicked: 40.4, -3.7"));
    }

    #[test]
    fn test_sync_viewport_ignores_tiny_drift() {
        let mut state: MapState<String> = MapState::new(LatLong::new(40.0, -3.0));
        let events = recorded(&mut state);
        let mut same = *state.viewport();
        same.center.lat += 1e-12;

        state.sync_viewport(same);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_background_click_keeps_open_window() {
        let places = [place("a", 41.0, -4.0)];
        let mut state = state_with_markers(&places);
        state.select_place(&places[0]);
        let before = state.info_anchor().unwrap();
        let events = recorded(&mut state);

        state.record_click(LatLong::new(40.4, -3.7));

        assert!(state.selection().is_open());
        assert_eq!(state.info_anchor(), Some(before));
        assert_eq!(
            *events.lock().unwrap(),
            vec![MapEvent::Clicked(LatLong::new(40.4, -3.7))]
        );
    }

    #[test]
    fn test_only_dropped_requests_are_fallbacks() {
        assert!(MapEvent::BoundsSkipped.is_fallback());
        assert!(MapEvent::CityIgnored(None).is_fallback());
        let viewport = Viewport::new(LatLong::new(40.0, -3.0));
        assert!(!MapEvent::ViewportChanged(viewport).is_fallback());
        assert!(!MapEvent::Clicked(LatLong::new(40.4, -3.7)).is_fallback());
        assert!(!MapEvent::PlaceSelected("a".to_string()).is_fallback());
    }
}
