use crate::layout::global_context::{AppGlobalContext, AppPage};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Eid Orders"</span>
                <nav class="header__nav">
                    {AppPage::all().into_iter().map(|page| view! {
                        <button
                            class="button button--ghost"
                            class:button--active=move || ctx.page.get() == page
                            on:click=move |_| ctx.open(page)
                        >
                            {page.title()}
                        </button>
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
