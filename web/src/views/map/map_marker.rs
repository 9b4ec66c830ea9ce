use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use map_core::{
    place::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
    LatLong, MapState, MarkerStyle, Place,
};

/// What an info window needs to attach itself to a rendered marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHandle {
    pub anchor: LatLong,
}

pub type IncidentMapState = MapState<MarkerHandle>;

#[component]
pub fn MapMarker(place: Place, state: RwSignal<IncidentMapState>) -> impl IntoView {
    let icon_url = MarkerStyle::for_category(&place.category).icon_url();
    let position = Position::new(place.pos.lat, place.pos.long);

    let place_id = place.id.clone();
    let handle = MarkerHandle { anchor: place.pos };
    Effect::new(move |_| {
        state.update(|s| s.register_marker(place_id.clone(), handle));
    });

    let place_id = place.id.clone();
    on_cleanup(move || {
        state.try_update(|s| s.unregister_marker(&place_id));
    });

    let mouse_events = MouseEvents::new().on_click(move |_| {
        state.update(|s| s.select_place(&place));
    });

    view! {
        <Marker
            position=position
            draggable=false
            icon_url=Some(icon_url)
            icon_size=Some(MARKER_ICON_SIZE)
            icon_anchor=Some(MARKER_ICON_ANCHOR)
            mouse_events=mouse_events
        />
    }
}
