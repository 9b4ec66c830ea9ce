use leptos::prelude::*;
use map_core::{CityTable, CITY_CHOICES};
use thaw::{Button, ButtonAppearance, Combobox, ComboboxOption, Flex, FlexAlign, Label};

use crate::views::map::map_marker::IncidentMapState;

#[component]
pub fn DropDownCities(state: RwSignal<IncidentMapState>, cities: CityTable) -> impl IntoView {
    let selected_options: RwSignal<Option<String>> =
        RwSignal::new(state.with_untracked(|s| s.chosen_city().map(str::to_string)));
    Effect::new(move |_| {
        if let Some(val) = selected_options.get() {
            state.update(|s| s.choose_city(val));
        }
    });

    let change_city = move |_| {
        state.update(|s| {
            s.apply_city(&cities);
        });
    };

    view! {
        <Flex align=FlexAlign::End>
            <Flex vertical=true align=FlexAlign::Start>
                <Label>"Ciudad"</Label>
                <Combobox selected_options placeholder="Elige una ciudad">
                    {CITY_CHOICES.into_iter().map(|choice| {
                        view! {
                            <ComboboxOption value=choice.key text=choice.label />
                        }
                    }).collect_view()}
                </Combobox>
            </Flex>
            <Button appearance=ButtonAppearance::Primary on_click=change_city>
                "Cambiar ciudad"
            </Button>
        </Flex>
    }
}
