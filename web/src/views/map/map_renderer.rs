use leptos::{logging::warn, prelude::*};
use leptos_leaflet::{
    leaflet::{LatLng, Map},
    prelude::*,
};
use map_core::{
    viewport::INITIAL_ZOOM, CanvasSize, InfoAnchor, LatLong, MapEvent, MapSettings, MapState,
    Place, Viewport, CITY_CHOICES,
};

use crate::views::map::{
    drop_down_cities::DropDownCities,
    info_window::InfoWindow,
    map_marker::{IncidentMapState, MapMarker},
};

fn log_map_event(event: &MapEvent) {
    if event.is_fallback() {
        warn!("map request dropped: {:?}", event);
    }
}

#[component]
pub fn MapRenderer(places: Vec<Place>, settings: MapSettings) -> impl IntoView {
    let mut initial: IncidentMapState = MapState::new(settings.center);
    initial.subscribe(log_map_event);
    // The dropdown shows the first choice before the user touches it.
    initial.choose_city(CITY_CHOICES[0].key);
    let state = RwSignal::new(initial);

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    let viewport = Memo::new(move |_| state.with(|s| *s.viewport()));
    let info = Memo::new(move |_| state.with(|s| s.info_anchor()));
    let click_label = Memo::new(move |_| state.with(|s| s.click_label()));

    // Fit every place into view once the map is ready.
    let fitted = StoredValue::new(false);
    let fit_places = places.clone();
    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };
        if fitted.get_value() {
            return;
        }
        fitted.set_value(true);

        let size = map_instance.get_size();
        let canvas = CanvasSize::new(size.x(), size.y());
        state.update(|s| {
            s.fit_to_places(&fit_places, canvas);
        });
    });

    Effect::new(move |_| {
        let Viewport { center, zoom } = viewport.get();
        if let Some(map) = map.get_untracked() {
            map.set_view(&LatLng::new(center.lat, center.long), zoom);
        }
    });

    // Keep the state in step with pans and zooms done on the map itself.
    let events = MapEvents::new()
        .move_end(move |_| {
            let Some(map) = map.get_untracked() else {
                return;
            };
            let center = map.get_center();
            let current = Viewport {
                center: LatLong::new(center.lat(), center.lng()),
                zoom: map.get_zoom(),
            };
            if state.with_untracked(|s| !s.viewport().approx_eq(&current)) {
                state.update(|s| s.sync_viewport(current));
            }
        })
        .mouse_click(move |event| {
            let clicked = event.lat_lng();
            state.update(|s| s.record_click(LatLong::new(clicked.lat(), clicked.lng())));
        });

    let close_info = Callback::new(move |_| state.update(|s| s.close_info()));

    let center = Position::new(settings.center.lat, settings.center.long);
    let tile_url = settings.tile_url();
    let attribution = settings.attribution;
    let cities = settings.cities;

    view! {
        <MapContainer
            style="height: 70vh; width: 100%"
            center=center
            zoom=INITIAL_ZOOM
            set_view=true
            map=map.write_only()
            events=events
        >
            <TileLayer url=tile_url attribution=attribution />
            {places.into_iter().map(|place| {
                view! { <MapMarker place=place state=state /> }
            }).collect_view()}
            {move || info.get().map(|InfoAnchor { place, handle, .. }| {
                view! {
                    // Only the window's own button closes it, so the state never goes stale.
                    <Popup
                        position=Position::new(handle.anchor.lat, handle.anchor.long)
                        close_button=false
                        close_on_click=false
                        close_on_escape_key=false
                    >
                        <InfoWindow place=place on_close=close_info />
                    </Popup>
                }
            })}
        </MapContainer>

        {move || click_label.get().map(|label| view! { <h3>{label}</h3> })}

        <DropDownCities state=state cities=cities />
    }
}
