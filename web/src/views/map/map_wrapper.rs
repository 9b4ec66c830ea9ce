use leptos::{logging::warn, prelude::*};

use crate::{
    server::{fetch_map_settings, fetch_places},
    views::map::map_renderer::MapRenderer,
};

/// Loads the store and renders the map once everything is available.
/// Until then, and on any load failure, nothing is rendered.
#[component]
pub fn IncidentMap() -> impl IntoView {
    // Refreshes the store on mount.
    let places = Resource::new(|| (), |_| async move { fetch_places().await });
    let settings = Resource::new(|| (), |_| async move { fetch_map_settings().await });

    view! {
        <Suspense fallback=|| view! {}>
            {move ||
                match (places.get(), settings.get()) {
                    (Some(Ok(places)), Some(Ok(settings))) => view! {
                        <MapRenderer places=places settings=settings />
                    }.into_any(),
                    (Some(Err(err)), _) | (_, Some(Err(err))) => {
                        warn!("Incident map unavailable: {}", err);
                        view! {}.into_any()
                    },
                    _ => view! {}.into_any(),
                }
            }
        </Suspense>
    }
}
