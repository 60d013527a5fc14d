use crate::domain::a001_area::api::fetch_areas;
use crate::shared::components::ui::select::{Select, SelectChild, SelectItem};
use contracts::domain::a001_area::aggregate::Area;
use leptos::prelude::*;

/// Active areas as select items, in API order
pub fn area_items(areas: &[Area]) -> Vec<SelectChild> {
    areas
        .iter()
        .filter(|a| a.is_active)
        .map(|a| SelectItem::new(a.id.clone(), a.display_name()).into())
        .collect()
}

/// Searchable area picker; loads areas on mount
#[component]
pub fn AreaSelect(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let (areas, set_areas) = signal::<Vec<Area>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_areas().await {
            Ok(list) => {
                set_areas.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load areas: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="picker-field">
            <Select
                value=value
                on_value_change=on_change
                placeholder=Signal::derive(move || Some(
                    if loading.get() { "Loading areas..." } else { "Select area" }.to_string()
                ))
                items=Signal::derive(move || areas.with(|a| area_items(a)))
                disabled=Signal::derive(move || Some(loading.get() || disabled.get().unwrap_or(false)))
                searchable=true
                search_placeholder="Search area..."
            />
            {move || error.get().map(|e| view! { <div class="picker-error">{e}</div> })}
        </div>
    }
}
