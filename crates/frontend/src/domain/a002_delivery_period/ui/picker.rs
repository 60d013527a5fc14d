use crate::domain::a002_delivery_period::api::fetch_delivery_periods;
use crate::shared::components::ui::select::{Content, Select, SelectChild, SelectItem};
use contracts::domain::a002_delivery_period::aggregate::{Availability, DeliveryPeriod};
use leptos::prelude::*;

pub fn availability_modifier(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "available",
        Availability::Limited => "limited",
        Availability::Full => "full",
    }
}

/// Period text followed by a capacity badge
pub fn period_label(period: &DeliveryPeriod) -> Content {
    let availability = period.availability();
    let badge_text = match availability {
        Availability::Full => availability.display_name().to_string(),
        _ => format!("{}%", period.used_percent()),
    };
    Content::row(vec![
        Content::text(period.label()),
        Content::badge(badge_text, availability_modifier(availability)),
    ])
}

/// Periods grouped per day, chronological. Full or closed periods are
/// listed but cannot be picked.
pub fn period_items(periods: &[DeliveryPeriod]) -> Vec<SelectChild> {
    let mut sorted: Vec<&DeliveryPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| (p.day, p.starts_at));

    let mut out = Vec::new();
    let mut day_items: Vec<SelectItem> = Vec::new();
    let mut current_day = None;
    for period in sorted {
        if current_day != Some(period.day) {
            if let Some(day) = current_day.take() {
                out.push(SelectChild::group(day_title(day), std::mem::take(&mut day_items)));
            }
            current_day = Some(period.day);
        }
        day_items.push(
            SelectItem::new(period.id.clone(), period_label(period))
                .disabled(period.availability() == Availability::Full),
        );
    }
    if let Some(day) = current_day {
        out.push(SelectChild::group(day_title(day), day_items));
    }
    out
}

fn day_title(day: chrono::NaiveDate) -> String {
    day.format("%A %d %B").to_string()
}

/// Delivery period picker with capacity badges
#[component]
pub fn DeliveryPeriodSelect(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let (periods, set_periods) = signal::<Vec<DeliveryPeriod>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_delivery_periods().await {
            Ok(list) => {
                set_periods.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load delivery periods: {}", e);
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
                    if loading.get() { "Loading periods..." } else { "Select delivery period" }.to_string()
                ))
                items=Signal::derive(move || periods.with(|p| period_items(p)))
                disabled=Signal::derive(move || Some(loading.get() || disabled.get().unwrap_or(false)))
                searchable=true
                search_placeholder="Search day or time..."
            />
            {move || error.get().map(|e| view! { <div class="picker-error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::ui::select::{extract_text, filter_options, flatten};
    use chrono::{NaiveDate, NaiveTime};

    fn period(id: &str, day: u32, hour: u32, percent: u8) -> DeliveryPeriod {
        DeliveryPeriod {
            id: id.into(),
            day: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            starts_at: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(hour + 4, 0, 0).unwrap(),
            capacity_used_percent: percent,
            is_open: true,
        }
    }

    #[test]
    fn test_grouped_by_day_in_order() {
        let periods = vec![
            period("fri-pm", 6, 16, 10),
            period("thu-am", 5, 10, 20),
            period("fri-am", 6, 10, 100),
        ];
        let children = period_items(&periods);
        assert_eq!(children.len(), 2);
        let flat = flatten(&children);
        let values: Vec<&str> = flat.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["thu-am", "fri-am", "fri-pm"]);
        assert!(flat[1].disabled);
        assert!(!flat[2].disabled);
    }

    #[test]
    fn test_label_carries_badge() {
        let label = period_label(&period("p", 5, 10, 85));
        assert_eq!(extract_text(&label), "Thu 05 Jun · 10:00–14:00 85%");

        let full = period_label(&period("p", 5, 10, 100));
        assert!(extract_text(&full).ends_with("Full"));
    }

    #[test]
    fn test_search_by_badge_and_time() {
        let flat = flatten(&period_items(&[
            period("a", 5, 10, 100),
            period("b", 5, 16, 30),
        ]));
        assert_eq!(filter_options(&flat, "full").len(), 1);
        assert_eq!(filter_options(&flat, "16:00")[0].value, "b");
    }

    #[test]
    fn test_empty() {
        assert!(period_items(&[]).is_empty());
    }
}
