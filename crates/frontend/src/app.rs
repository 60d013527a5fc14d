use crate::domain::a002_delivery_period::ui::PeriodAvailabilityList;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use crate::usecases::u001_order_entry::OrderEntryPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            view! {
                {move || match ctx.page.get() {
                    AppPage::OrderEntry => view! { <OrderEntryPage /> }.into_any(),
                    AppPage::PeriodAvailability => view! { <PeriodAvailabilityList /> }.into_any(),
                }}
            }
            .into_any()
        } />
    }
}
