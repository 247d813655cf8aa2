use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::audio::player;
use crate::components::transcript::scroll_clip_into_view;
use crate::state::AppState;

/// How often to re-sync the navigation state with the playback position.
/// Runs while paused too, so manual seeks land on the right marker.
const SYNC_INTERVAL_MS: i32 = 200;

/// Hide the navigation once the reader has scrolled past the transcript:
/// the last annotated clip is above this fraction of the viewport and the
/// container bottom has left the viewport.
const LAST_CLIP_VIEWPORT_FRACTION: f64 = 2.0 / 3.0;

fn update_visibility(state: AppState) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let Some(container) = document.get_element_by_id("transcript-container") else {
        return;
    };
    let last_clip_index = state
        .behaviors
        .with_untracked(|t| t.markers().last().map(|m| m.clip_index));
    let Some(last_clip_index) = last_clip_index else {
        return;
    };
    let Some(last_el) = document.get_element_by_id(&format!("transcript-clip-{last_clip_index}"))
    else {
        return;
    };

    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let past_last_clip =
        last_el.get_bounding_client_rect().top() < viewport * LAST_CLIP_VIEWPORT_FRACTION;
    let past_container = container.get_bounding_client_rect().bottom() < viewport;

    state.nav_visible.set(!(past_last_clip && past_container));
}

/// Floating previous/next links over the detected-behavior markers.
#[component]
pub fn BehaviorNavLinks() -> impl IntoView {
    let state = expect_context::<AppState>();

    let has_markers = !state.behaviors.with_untracked(|t| t.is_empty());

    if has_markers {
        let window = web_sys::window().unwrap();

        let sync = Closure::<dyn FnMut()>::new(move || {
            let time = player::current_time();
            let mut nav = state.behavior_nav.get_untracked();
            let changed = state
                .behaviors
                .with_untracked(|track| nav.sync_to_time(track, time));
            if changed {
                state.behavior_nav.set(nav);
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            sync.as_ref().unchecked_ref(),
            SYNC_INTERVAL_MS,
        ) {
            Ok(handle) => {
                on_cleanup(move || {
                    web_sys::window().unwrap().clear_interval_with_handle(handle);
                });
            }
            Err(e) => log::warn!("Failed to start behavior sync interval: {e:?}"),
        }
        sync.forget();

        let on_viewport_change = Closure::<dyn FnMut()>::new(move || {
            update_visibility(state);
        });
        let _ = window.add_event_listener_with_callback(
            "scroll",
            on_viewport_change.as_ref().unchecked_ref(),
        );
        let _ = window.add_event_listener_with_callback(
            "resize",
            on_viewport_change.as_ref().unchecked_ref(),
        );
        on_viewport_change.forget();

        // First visibility check once the transcript has rendered.
        let initial = Closure::once(move || update_visibility(state));
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            initial.as_ref().unchecked_ref(),
            100,
        );
        initial.forget();
    }

    let navigate_to = move |marker_index: usize| {
        let marker = state
            .behaviors
            .with_untracked(|t| t.get(marker_index).cloned());
        if let Some(marker) = marker {
            state.auto_scroll_enabled.set(true);
            scroll_clip_into_view(state, marker.clip_index);
            player::play_from(state, marker.start_time);
        }
    };

    let on_next = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let mut nav = state.behavior_nav.get_untracked();
        let target = state.behaviors.with_untracked(|track| nav.advance(track));
        if let Some(target) = target {
            state.behavior_nav.set(nav);
            navigate_to(target);
        }
    };

    let on_previous = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let mut nav = state.behavior_nav.get_untracked();
        if let Some(target) = nav.retreat() {
            state.behavior_nav.set(nav);
            navigate_to(target);
        }
    };

    let previous_class = move || {
        if state.behavior_nav.get().can_retreat() {
            "clip-link previous-clip-link"
        } else {
            "clip-link previous-clip-link disabled"
        }
    };
    let next_class = move || {
        let can = state
            .behaviors
            .with(|track| state.behavior_nav.get().can_advance(track));
        if can {
            "clip-link next-clip-link"
        } else {
            "clip-link next-clip-link disabled"
        }
    };

    view! {
        <div
            class=move || {
                if state.nav_visible.get() { "next-clip-wrapper visible" } else { "next-clip-wrapper" }
            }
            style:display=move || if has_markers { "" } else { "none" }
        >
            <div class=previous_class>
                <a href="#" class="previous-clip-link" on:click=on_previous>
                    "Previous detected behaviour \u{2196}"
                </a>
            </div>
            <div class=next_class>
                <a href="#" class="next-clip-link" on:click=on_next>
                    {move || state.behavior_nav.get().next_label()}
                </a>
            </div>
        </div>
    }
}
