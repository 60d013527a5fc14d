pub mod global_context;
pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application frame: header on top, current page below.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {center()}
            </main>
        </div>
    }
}
