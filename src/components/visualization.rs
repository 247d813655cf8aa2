use debrief_core::emotion;
use debrief_core::ClipAnnotation;
use leptos::prelude::*;

use crate::audio::player;
use crate::components::transcript::scroll_clip_into_view;
use crate::state::AppState;

/// At most this many behavior indicators per clip.
const MAX_INDICATORS: usize = 3;

/// Proportional strip of the recording's clips above the transport bar.
/// Each clip is a block spanning its share of the recording, colored by
/// emotion; hovering reveals the emotion/text captions and any behavior
/// indicators, clicking seeks playback to the clip.
#[component]
pub fn PlayerVisualization() -> impl IntoView {
    let state = expect_context::<AppState>();

    let clips: Vec<ClipAnnotation> = state
        .recording
        .with_untracked(|r| r.as_ref().map(|r| r.clips.clone()).unwrap_or_default());

    // Caption content outlives its visibility so the fade-out keeps its text.
    let caption: RwSignal<Option<(String, String)>> = RwSignal::new(None);
    let caption_visible = RwSignal::new(false);

    let total = move || state.total_duration().max(f64::EPSILON);

    let clip_views = clips
        .iter()
        .enumerate()
        .map(|(index, clip)| {
            let start = clip.start_time;
            let duration = clip.duration;
            let emotion_name = clip.emotion.clone();
            let caption_emotion = clip.emotion.clone();
            let caption_text = clip.text.clone();
            let title = clip.text.clone();

            let clip_class = move || {
                let mut cls = format!("transcript-clip {}", emotion::css_class(&emotion_name));
                if state.hovered_clip.get() == Some(index) {
                    cls.push_str(" hover");
                }
                if state.current_clip.get() == Some(index) {
                    cls.push_str(" playing");
                }
                cls
            };

            let on_enter = move |_: web_sys::MouseEvent| {
                state.hovered_clip.set(Some(index));
                caption.set(Some((caption_emotion.clone(), caption_text.clone())));
                caption_visible.set(true);
            };
            let on_leave = move |_: web_sys::MouseEvent| {
                state.hovered_clip.set(None);
            };
            let on_click = move |_: web_sys::MouseEvent| {
                player::seek_to_clip(state, index);
                scroll_clip_into_view(state, index);
            };

            view! {
                <div
                    class=clip_class
                    style:left=move || format!("{:.4}%", (start / total() * 100.0).clamp(0.0, 100.0))
                    style:width=move || format!("{:.4}%", (duration / total() * 100.0).clamp(0.0, 100.0))
                    title=title
                    on:mouseenter=on_enter
                    on:mouseleave=on_leave
                    on:click=on_click
                ></div>
            }
        })
        .collect_view();

    let indicator_views = clips
        .iter()
        .enumerate()
        .filter(|(_, clip)| !clip.behaviors.is_empty())
        .flat_map(|(index, clip)| {
            let start = clip.start_time;
            clip.behaviors
                .iter()
                .take(MAX_INDICATORS)
                .map(move |name| {
                    let name = name.clone();
                    let indicator_class = move || {
                        if state.hovered_clip.get() == Some(index) {
                            "behaviour-indicator visible hover"
                        } else {
                            "behaviour-indicator"
                        }
                    };
                    view! {
                        <div
                            class=indicator_class
                            style:left=move || {
                                format!("{:.4}%", (start / total() * 100.0).clamp(0.0, 100.0))
                            }
                        >
                            <span class="behaviour-label-text">{name}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect_view();

    let on_strip_leave = move |_: web_sys::MouseEvent| {
        caption_visible.set(false);
    };

    view! {
        <div class="player-visualization" on:mouseleave=on_strip_leave>
            {clip_views}
            <div
                class="player-position-indicator"
                style:left=move || {
                    let pct = state.playhead_time.get() / total() * 100.0;
                    format!("{:.4}%", pct.clamp(0.0, 100.0))
                }
            ></div>
        </div>
        <div class="behaviour-indicators">{indicator_views}</div>
        <div class="status-caption">
            <span
                class=move || {
                    if caption_visible.get() { "emotion-caption visible" } else { "emotion-caption" }
                }
                style:color=move || {
                    caption
                        .get()
                        .map(|(emotion, _)| format!("rgba(var(--emotion-{emotion}-RGB), 1)"))
                        .unwrap_or_default()
                }
            >
                {move || caption.get().map(|(emotion, _)| emotion).unwrap_or_default()}
            </span>
            <span
                class=move || {
                    let has_text = caption.with(|c| {
                        c.as_ref().map(|(_, text)| !text.is_empty()).unwrap_or(false)
                    });
                    if caption_visible.get() && has_text {
                        "clip-text-caption visible"
                    } else {
                        "clip-text-caption"
                    }
                }
            >
                <span>{move || caption.get().map(|(_, text)| text).unwrap_or_default()}</span>
            </span>
        </div>
    }
}
