use crate::domain::a002_delivery_period::api::fetch_delivery_periods;
use contracts::domain::a002_delivery_period::aggregate::{Availability, DeliveryPeriod};
use leptos::prelude::*;
use thaw::*;

fn badge_color(availability: Availability) -> BadgeColor {
    match availability {
        Availability::Available => BadgeColor::Success,
        Availability::Limited => BadgeColor::Warning,
        Availability::Full => BadgeColor::Danger,
    }
}

/// Read-only capacity overview of all delivery periods
#[component]
pub fn PeriodAvailabilityList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DeliveryPeriod>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_delivery_periods().await {
                Ok(mut list) => {
                    list.sort_by_key(|p| (p.day, p.starts_at));
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load delivery periods: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page period-list">
            <div class="page__header">
                <h2>"Delivery periods"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=loading
                >
                    "Refresh"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || loading.get().then(|| view! { <Spinner /> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Day"</TableHeaderCell>
                        <TableHeaderCell>"Window"</TableHeaderCell>
                        <TableHeaderCell>"Capacity used"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|p| p.id.clone()
                        children=move |p: DeliveryPeriod| {
                            let availability = p.availability();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{p.day.format("%a %d %b %Y").to_string()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format!("{}–{}", p.starts_at.format("%H:%M"), p.ends_at.format("%H:%M"))}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format!("{}%", p.used_percent())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=badge_color(availability)>
                                                {availability.display_name()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
