use leptos::prelude::*;

use crate::audio::player;
use crate::components::behavior_nav::BehaviorNavLinks;
use crate::components::player_bar::PlayerBar;
use crate::components::share_popover::ShareControls;
use crate::components::transcript::Transcript;
use crate::components::visualization::PlayerVisualization;
use crate::data;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    let load_failed = RwSignal::new(false);

    wasm_bindgen_futures::spawn_local(async move {
        match data::load_recording(data::RECORDING_URL).await {
            Ok(recording) => {
                player::load(state, &recording.audio_src);
                state.install_recording(recording);
            }
            Err(e) => {
                log::error!("Failed to load recording: {e}");
                load_failed.set(true);
            }
        }
    });

    view! {
        <div class="app">
            {move || {
                if state.recording.get().is_some() {
                    view! { <ReviewPage /> }.into_any()
                } else if load_failed.get() {
                    view! {
                        <div class="empty-state">"Could not load the recording."</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="empty-state">"Loading recording\u{2026}"</div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ReviewPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let title = state
        .recording
        .with_untracked(|r| r.as_ref().map(|r| r.title.clone()))
        .unwrap_or_default();

    view! {
        <div class="media-box">
            <header class="player-header">
                <h1 class="recording-title">{title}</h1>
                <ShareControls />
            </header>
            <PlayerVisualization />
            <PlayerBar />
        </div>
        <Transcript />
        <BehaviorNavLinks />
    }
}
