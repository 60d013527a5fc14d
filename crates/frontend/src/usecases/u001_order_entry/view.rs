use super::form::parse_quantity;
use super::view_model::OrderEntryViewModel;
use crate::domain::a001_area::ui::AreaSelect;
use crate::domain::a002_delivery_period::ui::DeliveryPeriodSelect;
use crate::domain::a004_product::ui::{use_product_catalog, ProductCatalog};
use crate::shared::components::ui::select::Select;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn OrderEntryPage() -> impl IntoView {
    let vm = OrderEntryViewModel::new();
    let catalog = use_product_catalog();

    let line_keys = move || vm.form.with(|f| f.lines.iter().map(|l| l.key).collect::<Vec<_>>());

    view! {
        <div class="page order-entry">
            <div class="page__header">
                <h2>"New order"</h2>
            </div>

            {move || vm.created.get().map(|created| view! {
                <div class="success" on:click=move |_| vm.dismiss_created()>
                    "Order " {created.number} " created"
                </div>
            })}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="customer_name">"Customer name"</label>
                    <input
                        type="text"
                        id="customer_name"
                        prop:value=move || vm.form.with(|f| f.customer_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.customer_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="customer_phone">"Phone"</label>
                    <input
                        type="tel"
                        id="customer_phone"
                        placeholder="05xxxxxxxx"
                        prop:value=move || vm.form.with(|f| f.customer_phone.clone())
                        on:input=move |ev| vm.form.update(|f| f.customer_phone = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Area"</label>
                    <AreaSelect
                        value=Signal::derive(move || vm.form.with(|f| f.area_id.clone()))
                        on_change=Callback::new(move |id: String| vm.form.update(|f| f.area_id = Some(id)))
                    />
                </div>

                <div class="form-group">
                    <label>"Delivery period"</label>
                    <DeliveryPeriodSelect
                        value=Signal::derive(move || vm.form.with(|f| f.period_id.clone()))
                        on_change=Callback::new(move |id: String| vm.form.update(|f| f.period_id = Some(id)))
                    />
                </div>

                <div class="form-group">
                    <label>"Items"</label>
                    {move || catalog.error.get().map(|e| view! { <div class="picker-error">{e}</div> })}
                    <For
                        each=line_keys
                        key=|key| *key
                        children=move |line_key| view! {
                            <OrderLineRow line_key=line_key vm=vm catalog=catalog />
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.form.update(|f| {
                            f.add_line();
                        })
                    >
                        "+ Add item"
                    </Button>
                </div>

                <div class="form-group">
                    <label for="notes">"Notes"</label>
                    <textarea
                        id="notes"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.notes.clone())
                        on:input=move |ev| vm.form.update(|f| f.notes = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command()
                    disabled=vm.submitting
                >
                    {move || if vm.submitting.get() { "Submitting..." } else { "Submit order" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn OrderLineRow(line_key: u32, vm: OrderEntryViewModel, catalog: ProductCatalog) -> impl IntoView {
    let product = Signal::derive(move || {
        vm.form
            .with(|f| f.line(line_key).and_then(|l| l.product_id.clone()))
    });
    let quantity = move || {
        vm.form
            .with(|f| f.line(line_key).map(|l| l.quantity).unwrap_or(0))
    };

    view! {
        <div class="order-line">
            <Select
                value=product
                on_value_change=Callback::new(move |id: String| {
                    vm.form.update(|f| f.set_line_product(line_key, id))
                })
                placeholder="Select product"
                items=catalog.items
                disabled=Signal::derive(move || Some(catalog.loading.get()))
                searchable=true
                search_placeholder="Search product..."
                class="order-line__product"
            />
            <input
                type="number"
                min="1"
                class="order-line__qty"
                prop:value=move || quantity().to_string()
                on:input=move |ev| {
                    let qty = parse_quantity(&event_target_value(&ev));
                    vm.form.update(|f| f.set_line_quantity(line_key, qty));
                }
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.form.update(|f| f.remove_line(line_key))
            >
                "Remove"
            </Button>
        </div>
    }
}
