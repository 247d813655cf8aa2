//! Control of the page's single HTML5 audio element.
//!
//! The element streams the recording; decoding stays in the browser. All
//! play/pause/seek paths route through here so the playback signals and the
//! position poll stay consistent with the element's actual state.

use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

use crate::audio::position;
use crate::state::AppState;

thread_local! {
    static AUDIO: RefCell<Option<HtmlAudioElement>> = RefCell::new(None);
}

/// Create the audio element for a loaded document and wire its lifecycle
/// events into the app state.
pub fn load(state: AppState, src: &str) {
    unload();

    let el = match HtmlAudioElement::new_with_src(src) {
        Ok(el) => el,
        Err(e) => {
            log::error!("Failed to create audio element for {src}: {e:?}");
            return;
        }
    };
    el.set_preload("metadata");

    let el_meta = el.clone();
    let on_loaded = Closure::<dyn FnMut()>::new(move || {
        let duration = el_meta.duration();
        if duration.is_finite() {
            state.duration.set(duration);
        }
    });
    el.set_onloadedmetadata(Some(on_loaded.as_ref().unchecked_ref()));
    on_loaded.forget();

    let on_ended = Closure::<dyn FnMut()>::new(move || {
        position::cancel();
        state.is_playing.set(false);
        state.playhead_time.set(0.0);
        state.current_clip.set(None);
    });
    el.set_onended(Some(on_ended.as_ref().unchecked_ref()));
    on_ended.forget();

    let on_error = Closure::<dyn FnMut()>::new(move || {
        log::error!("Error loading audio");
        position::cancel();
        state.is_playing.set(false);
    });
    el.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    AUDIO.with(|a| *a.borrow_mut() = Some(el));
}

fn unload() {
    position::cancel();
    AUDIO.with(|a| {
        if let Some(el) = a.borrow_mut().take() {
            let _ = el.pause();
            el.set_onloadedmetadata(None);
            el.set_onended(None);
            el.set_onerror(None);
        }
    });
}

pub fn current_time() -> f64 {
    AUDIO.with(|a| {
        a.borrow()
            .as_ref()
            .map(|el| el.current_time())
            .unwrap_or(0.0)
    })
}

pub fn play(state: AppState) {
    let started = AUDIO.with(|a| {
        let borrow = a.borrow();
        let Some(el) = borrow.as_ref() else {
            return false;
        };
        let _ = el.play();
        true
    });
    if !started {
        return;
    }
    state.auto_scroll_enabled.set(true);
    state.is_playing.set(true);
    resolve_now(state);
    position::start(state);
}

/// Pause playback. The current-clip highlight clears while paused.
pub fn pause(state: AppState) {
    position::cancel();
    AUDIO.with(|a| {
        if let Some(el) = a.borrow().as_ref() {
            let _ = el.pause();
        }
    });
    state.is_playing.set(false);
    state.current_clip.set(None);
}

pub fn toggle_play(state: AppState) {
    if state.is_playing.get_untracked() {
        pause(state);
    } else {
        play(state);
    }
}

pub fn toggle_mute(state: AppState) {
    AUDIO.with(|a| {
        if let Some(el) = a.borrow().as_ref() {
            let muted = !el.muted();
            el.set_muted(muted);
            state.is_muted.set(muted);
        }
    });
}

pub fn seek(state: AppState, time: f64) {
    AUDIO.with(|a| {
        if let Some(el) = a.borrow().as_ref() {
            el.set_current_time(time);
        }
    });
    state.playhead_time.set(time);
    resolve_now(state);
}

/// Seek to `time` and make sure playback is running. Any deliberate jump
/// re-enables follow-along scrolling.
pub fn play_from(state: AppState, time: f64) {
    state.auto_scroll_enabled.set(true);
    seek(state, time);
    if !state.is_playing.get_untracked() {
        play(state);
    }
}

/// Click-to-seek entry point: jump to the start of a clip by document index.
pub fn seek_to_clip(state: AppState, clip_index: usize) {
    let start = state.recording.with_untracked(|r| {
        r.as_ref()
            .and_then(|r| r.clips.get(clip_index))
            .map(|c| c.start_time)
    });
    if let Some(start) = start {
        play_from(state, start);
    }
}

/// Re-resolve the current clip at the element's position, updating the
/// signal only on change.
pub fn resolve_now(state: AppState) {
    let time = current_time();
    let resolved = state.timeline.with_untracked(|t| t.resolve_at(time));
    if resolved != state.current_clip.get_untracked() {
        state.current_clip.set(resolved);
    }
}
