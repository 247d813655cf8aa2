use debrief_core::timecode::format_time;
use leptos::prelude::*;

use crate::audio::player;
use crate::state::AppState;

/// Transport controls and time readout. The play/pause button shows the
/// action it will perform; the mute button shows the current status.
#[component]
pub fn PlayerBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_play_pause = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        player::toggle_play(state);
    };

    let on_mute = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        player::toggle_mute(state);
    };

    view! {
        <div class="player-controls">
            <button
                class="player-button play-pause"
                on:click=on_play_pause
                title=move || if state.is_playing.get() { "Pause" } else { "Play" }
            >
                {move || if state.is_playing.get() { "\u{23F8}" } else { "\u{25B6}" }}
            </button>
            <button
                class="player-button mute-unmute"
                on:click=on_mute
                title=move || if state.is_muted.get() { "Unmute" } else { "Mute" }
            >
                {move || if state.is_muted.get() { "\u{1F507}" } else { "\u{1F50A}" }}
            </button>
            <span class="player-time">
                <span class="current-time">
                    {move || format_time(state.playhead_time.get())}
                </span>
                " / "
                <span class="total-time">{move || format_time(state.duration.get())}</span>
            </span>
        </div>
    }
}
