use super::anchor::AnchorRect;
use super::content::Content;
use super::controller::{selected_item, SelectController};
use super::dom::{event_target_node, measure_trigger, subtree_contains, DomListenerHost, DomSubscription};
use super::filter::filter_options;
use super::outside::PointerTarget;
use super::registry::{flatten, SelectChild};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::portal::Portal;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Renders a label tree; elements become `<span>`s
pub fn render_content(content: &Content) -> AnyView {
    match content {
        Content::Empty => ().into_any(),
        Content::Text(text) => text.clone().into_any(),
        Content::Number(n) => n.to_string().into_any(),
        Content::Element { class, children } => {
            let children = children.iter().map(render_content).collect_view();
            view! { <span class=class.clone()>{children}</span> }.into_any()
        }
    }
}

/// Searchable dropdown with a floating panel.
///
/// The panel is portalled to `<body>` and positioned `fixed` under the trigger.
/// The selection is owned by the caller: `value` comes in, `on_value_change`
/// goes out.
#[component]
pub fn Select(
    /// Committed value
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Called once per user selection with the chosen value
    #[prop(into)]
    on_value_change: Callback<String>,
    /// Trigger text when nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Items and groups
    #[prop(into)]
    items: Signal<Vec<SelectChild>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Show the search box
    #[prop(optional)]
    searchable: bool,
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let controller = StoredValue::new_local(SelectController::<DomSubscription>::new());
    let is_open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let anchor = RwSignal::new(None::<AnchorRect>);

    let trigger_ref = NodeRef::<html::Button>::new();
    let panel_ref = NodeRef::<html::Div>::new();

    let options = Memo::new(move |_| items.with(|children| flatten(children)));
    let is_disabled = move || disabled.get().unwrap_or(false);

    // Mirror controller state into signals after each transition
    let sync = move || {
        let Some((open, q, rect)) =
            controller.try_with_value(|c| (c.is_open(), c.query().to_string(), c.anchor()))
        else {
            return;
        };
        if is_open.get_untracked() != open {
            is_open.set(open);
        }
        if query.with_untracked(|current| *current != q) {
            query.set(q);
        }
        if anchor.get_untracked() != rect {
            anchor.set(rect);
        }
    };

    let measure = move || {
        trigger_ref
            .get_untracked()
            .and_then(|el| measure_trigger(&el))
    };

    let host = StoredValue::new_local(DomListenerHost::new(
        move || {
            if controller
                .try_update_value(|c| c.reposition(measure()))
                .is_some()
            {
                sync();
            }
        },
        move |ev: web_sys::Event| {
            let target = event_target_node(&ev);
            let trigger: Option<web_sys::Element> = trigger_ref.get_untracked().map(Into::into);
            let panel: Option<web_sys::Element> = panel_ref.get_untracked().map(Into::into);
            let hit = PointerTarget::classify(
                subtree_contains(trigger.as_ref(), target.as_ref()),
                subtree_contains(panel.as_ref(), target.as_ref()),
            );
            if !hit.is_outside() {
                return;
            }
            // Closing drops this listener; defer until dispatch has finished
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                if controller
                    .try_update_value(|c| c.pointer_down(hit))
                    .is_some()
                {
                    sync();
                }
            });
        },
    ));

    let on_trigger_click = move |_: leptos::ev::MouseEvent| {
        let disabled_now = is_disabled();
        let bounds = measure();
        host.with_value(|h| {
            controller.update_value(|c| {
                c.toggle(disabled_now, bounds, h);
            })
        });
        sync();
    };

    let on_row_click = move |value: String| {
        let chosen = options.with_untracked(|opts| {
            controller.try_update_value(|c| c.choose(opts, &value, |v| on_value_change.run(v)))
        });
        if chosen == Some(true) {
            sync();
        }
    };

    Effect::new(move |_| {
        if is_disabled() {
            controller.update_value(|c| c.sync_disabled(true));
            sync();
        }
    });

    on_cleanup(move || {
        controller.try_update_value(|c| c.close());
    });

    let trigger_label = move || {
        let current = value.get();
        options.with(|opts| selected_item(opts, current.as_deref()).map(|item| item.label.clone()))
    };

    let rows = move || {
        let q = query.get();
        let current = value.get();
        options.with(|opts| {
            let visible = filter_options(opts, &q);
            if visible.is_empty() {
                return view! { <div class="select__empty">"No results"</div> }.into_any();
            }
            visible
                .into_iter()
                .map(|item| {
                    let is_selected = current.as_deref() == Some(item.value.as_str());
                    let item_disabled = item.disabled;
                    let item_value = item.value.clone();
                    view! {
                        <div
                            class="select__option"
                            class:select__option--selected=is_selected
                            class:select__option--disabled=item_disabled
                            role="option"
                            aria-selected=is_selected.to_string()
                            aria-disabled=item_disabled.to_string()
                            on:click=move |_| on_row_click(item_value.clone())
                        >
                            <span class="select__check">{if is_selected { "✓" } else { "" }}</span>
                            {render_content(&item.label)}
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class=move || format!("select {}", class.get().unwrap_or_default())>
            <button
                type="button"
                class="select__trigger"
                class:select__trigger--open=move || is_open.get()
                node_ref=trigger_ref
                disabled=is_disabled
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
                on:click=on_trigger_click
            >
                {move || match trigger_label() {
                    Some(label) => view! {
                        <span class="select__value">{render_content(&label)}</span>
                    }.into_any(),
                    None => view! {
                        <span class="select__placeholder">{placeholder.get().unwrap_or_default()}</span>
                    }.into_any(),
                }}
                <span class="select__chevron">{move || if is_open.get() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || is_open.get()>
                <Portal>
                    <div
                        class="select__panel"
                        node_ref=panel_ref
                        style=move || anchor.get().map(|a| a.to_style()).unwrap_or_default()
                    >
                        {searchable.then(|| view! {
                            <input
                                type="text"
                                class="select__search"
                                placeholder=move || search_placeholder.get().unwrap_or_else(|| "Search...".to_string())
                                prop:value=move || query.get()
                                on:input=move |ev| {
                                    let q = event_target_value(&ev);
                                    controller.update_value(|c| c.set_query(q));
                                    sync();
                                }
                            />
                        })}
                        <div class="select__options" role="listbox">
                            {rows}
                        </div>
                    </div>
                </Portal>
            </Show>
        </div>
    }
}
