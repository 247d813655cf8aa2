use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::AppState;

fn copy_page_link() {
    if let Some(window) = web_sys::window() {
        let href = window.location().href().unwrap_or_default();
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(&href);
    }
}

/// Install the document-level dismiss handlers: capture-phase click outside
/// the button/popover, and Escape. Page-lifetime listeners.
fn init_dismiss_handlers(state: AppState) {
    let document = web_sys::window().unwrap().document().unwrap();

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !state.share_popover_open.get_untracked() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                el.closest(".share-button").ok().flatten().is_some()
                    || el.closest(".share-popover").ok().flatten().is_some()
            })
            .unwrap_or(false);
        if !inside {
            state.share_popover_open.set(false);
        }
    });
    let _ = document
        .add_event_listener_with_callback_and_bool("click", on_click.as_ref().unchecked_ref(), true);
    on_click.forget();

    let on_keydown =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && state.share_popover_open.get_untracked() {
                state.share_popover_open.set(false);
            }
        });
    let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Share button plus its popover. Re-clicking the button toggles the
/// popover; clicking elsewhere or pressing Escape closes it.
#[component]
pub fn ShareControls() -> impl IntoView {
    let state = expect_context::<AppState>();

    init_dismiss_handlers(state);

    let on_share = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.share_popover_open.update(|open| *open = !*open);
    };

    let on_copy = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        copy_page_link();
        state.share_popover_open.set(false);
    };

    view! {
        <div class="share-container">
            <button class="share-button" on:click=on_share>"Share"</button>
            <div class=move || {
                if state.share_popover_open.get() { "share-popover visible" } else { "share-popover" }
            }>
                <button class="share-popover-copy" on:click=on_copy>
                    "Copy link to this recording"
                </button>
            </div>
        </div>
    }
}
