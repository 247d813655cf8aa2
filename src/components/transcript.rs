use std::cell::RefCell;
use std::rc::Rc;

use debrief_core::autoscroll::{ScrollTracker, ScrollVerdict, PROGRAMMATIC_SCROLL_SETTLE_MS};
use debrief_core::emotion;
use debrief_core::timecode::format_time;
use debrief_core::ClipAnnotation;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::audio::player;
use crate::state::AppState;

fn clip_element_id(clip_index: usize) -> String {
    format!("transcript-clip-{clip_index}")
}

/// Smooth-scroll a transcript clip to the viewport center, flagging the
/// scroll as programmatic until smooth scrolling has settled so the user
/// scroll watcher ignores it.
pub fn scroll_clip_into_view(state: AppState, clip_index: usize) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let Some(el) = document.get_element_by_id(&clip_element_id(clip_index)) else {
        return;
    };

    state.programmatic_scroll.set(true);

    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);

    let clear = Closure::once(move || state.programmatic_scroll.set(false));
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.as_ref().unchecked_ref(),
        PROGRAMMATIC_SCROLL_SETTLE_MS,
    );
    clear.forget();
}

/// Jump playback and view to the first clip annotated with `name`.
pub fn jump_to_behavior(state: AppState, name: &str) {
    let marker = state
        .behaviors
        .with_untracked(|t| t.first_with_name(name).cloned());
    let Some(marker) = marker else { return };

    state.auto_scroll_enabled.set(true);
    scroll_clip_into_view(state, marker.clip_index);
    player::play_from(state, marker.start_time);
}

/// Watch window scrolling and turn follow-along off when the user
/// deliberately scrolls away. Page-lifetime listener.
fn init_user_scroll_watch(state: AppState) {
    let window = web_sys::window().unwrap();
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(
        window.page_y_offset().unwrap_or(0.0),
        js_sys::Date::now(),
    )));

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if state.programmatic_scroll.get_untracked() {
            return;
        }
        let window = web_sys::window().unwrap();
        let position = window.page_y_offset().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let verdict = tracker
            .borrow_mut()
            .observe(position, js_sys::Date::now(), viewport);
        if verdict == ScrollVerdict::DisableAutoScroll {
            state.auto_scroll_enabled.set(false);
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// Transcript list: one entry per clip in document order, synchronized with
/// the visualization strip through the shared hover/current signals.
#[component]
pub fn Transcript() -> impl IntoView {
    let state = expect_context::<AppState>();

    let clips: Vec<ClipAnnotation> = state
        .recording
        .with_untracked(|r| r.as_ref().map(|r| r.clips.clone()).unwrap_or_default());

    init_user_scroll_watch(state);

    // Follow playback: center the playing clip while auto-scroll is on.
    Effect::new(move || {
        let Some(current) = state.current_clip.get() else {
            return;
        };
        if !state.auto_scroll_enabled.get_untracked() {
            return;
        }
        scroll_clip_into_view(state, current);
    });

    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        state.transcript_visible.update(|v| *v = !*v);
    };

    view! {
        <div class="transcript-header-wrapper">
            <h2 class="transcript-heading">"Transcript"</h2>
            <SpeakerLegend />
            <button class="transcript-toggle-button" on:click=on_toggle>
                {move || if state.transcript_visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
        <div
            class="transcript-container"
            id="transcript-container"
            style:display=move || if state.transcript_visible.get() { "" } else { "none" }
        >
            {clips
                .into_iter()
                .enumerate()
                .map(|(index, clip)| view! { <TranscriptClip index=index clip=clip /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TranscriptClip(index: usize, clip: ClipAnnotation) -> impl IntoView {
    let state = expect_context::<AppState>();

    let speaker = clip.speaker;
    let has_behaviors = !clip.behaviors.is_empty();
    let emotion_name = clip.emotion.clone();

    let clip_class = move || {
        let mut cls = format!(
            "transcript-clip {}{}",
            emotion::css_class(&emotion_name),
            if has_behaviors { " evidence" } else { "" }
        );
        if state.hovered_clip.get() == Some(index) {
            cls.push_str(" hover");
        }
        if state.current_clip.get() == Some(index) {
            cls.push_str(" playing");
        }
        cls
    };

    let speaker_name = move || {
        state
            .speaker_names
            .with(|names| names.get(speaker.saturating_sub(1)).cloned())
            .unwrap_or_else(|| format!("Speaker {speaker}"))
    };

    let on_click = move |_: web_sys::MouseEvent| {
        player::seek_to_clip(state, index);
        scroll_clip_into_view(state, index);
    };
    let on_enter = move |_: web_sys::MouseEvent| {
        state.hovered_clip.set(Some(index));
    };
    let on_leave = move |_: web_sys::MouseEvent| {
        state.hovered_clip.set(None);
    };

    let behavior_labels = clip
        .behaviors
        .iter()
        .map(|name| {
            let name = name.clone();
            let label = name.clone();
            let on_label_click = move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                // Keep the click from seeking to the clip underneath.
                ev.stop_propagation();
                jump_to_behavior(state, &name);
            };
            view! {
                <span class="behaviour-label">
                    <a href="#" class="behaviour" on:click=on_label_click>
                        <span>{label}</span>
                    </a>
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class=clip_class
            id=clip_element_id(index)
            on:click=on_click
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class="clip-caption">
                <span class="name">{speaker_name}</span>
                <span class="time">{format_time(clip.start_time)}</span>
                <span class="duration">{format!("{:.0}s", clip.duration)}</span>
                {behavior_labels}
            </div>
            <div class="clip-text">
                <p>{clip.text.clone()}</p>
            </div>
        </div>
    }
}

/// Editable display names for the document's speakers. Edits propagate to
/// every clip immediately; Escape restores the last committed name.
#[component]
fn SpeakerLegend() -> impl IntoView {
    let state = expect_context::<AppState>();
    let names = state.speaker_names.get_untracked();

    view! {
        <div class="speaker-legend">
            {names
                .into_iter()
                .enumerate()
                .map(|(index, name)| view! { <SpeakerNameInput index=index initial=name /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn SpeakerNameInput(index: usize, initial: String) -> impl IntoView {
    let state = expect_context::<AppState>();

    let value = RwSignal::new(initial.clone());
    let committed = RwSignal::new(initial);

    let publish = move |name: String| {
        state.speaker_names.update(|names| {
            if let Some(slot) = names.get_mut(index) {
                *slot = name;
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().unchecked_into();
        let name = input.value();
        value.set(name.clone());
        publish(name);
    };

    let on_blur = move |_: web_sys::FocusEvent| {
        let trimmed = value.get_untracked().trim().to_string();
        let restored = if trimmed.is_empty() {
            committed.get_untracked()
        } else {
            trimmed
        };
        value.set(restored.clone());
        committed.set(restored.clone());
        publish(restored);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
            let original = committed.get_untracked();
            value.set(original.clone());
            publish(original);
            let input: web_sys::HtmlInputElement = ev.target().unwrap().unchecked_into();
            let _ = input.blur();
        }
    };

    view! {
        <input
            class="speaker-name-input"
            maxlength="50"
            prop:value=move || value.get()
            on:input=on_input
            on:blur=on_blur
            on:keydown=on_keydown
        />
    }
}
