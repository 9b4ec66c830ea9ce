use leptos::prelude::*;
use map_core::Place;
use thaw::{Button, ButtonSize};

#[component]
pub fn InfoWindow(place: Place, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="info-window">
            <p>
                <strong>{place.id}</strong>
            </p>
            <div>
                <p>
                    {place.category}
                    <br/>
                    "- "{place.name}": "
                    <br/>
                    {place.text}
                </p>
            </div>
            <Button size=ButtonSize::Small on_click=move |_| on_close.run(())>
                "Cerrar"
            </Button>
        </div>
    }
}
