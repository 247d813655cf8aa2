//! Per-animation-frame poll of the playback position.
//!
//! Runs only while sound is actively playing; re-schedules itself each frame
//! and is cancelled immediately on pause/stop so no orphaned frames remain.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::audio::player;
use crate::state::AppState;

thread_local! {
    static FRAME_HANDLE: RefCell<Option<i32>> = RefCell::new(None);
}

pub fn start(state: AppState) {
    cancel();

    // Recursive rAF loop via a self-referencing Closure.
    let cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let cb_clone = cb.clone();

    *cb.borrow_mut() = Some(Closure::new(move || {
        if !state.is_playing.get_untracked() {
            return;
        }

        let time = player::current_time();
        state.playhead_time.set(time);

        let resolved = state.timeline.with_untracked(|t| t.resolve_at(time));
        if resolved != state.current_clip.get_untracked() {
            state.current_clip.set(resolved);
        }

        let handle = web_sys::window()
            .unwrap()
            .request_animation_frame(
                cb_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            )
            .unwrap();
        FRAME_HANDLE.with(|h| {
            *h.borrow_mut() = Some(handle);
        });
    }));

    let handle = web_sys::window()
        .unwrap()
        .request_animation_frame(cb.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .unwrap();
    FRAME_HANDLE.with(|h| {
        *h.borrow_mut() = Some(handle);
    });
}

pub fn cancel() {
    FRAME_HANDLE.with(|h| {
        if let Some(handle) = h.borrow_mut().take() {
            let _ = web_sys::window().unwrap().cancel_animation_frame(handle);
        }
    });
}
