use debrief_core::{BehaviorNav, BehaviorTrack, ClipTimeline, Recording};
use leptos::prelude::*;

/// All shared UI state, one signal per concern. Read and written only from
/// the browser's single UI thread; the derived lookup structures (timeline,
/// behavior track) are replaced wholesale when a document loads and treated
/// as read-only afterwards.
#[derive(Clone, Copy)]
pub struct AppState {
    pub recording: RwSignal<Option<Recording>>,
    pub timeline: RwSignal<ClipTimeline>,
    pub behaviors: RwSignal<BehaviorTrack>,
    pub speaker_names: RwSignal<Vec<String>>,

    pub playhead_time: RwSignal<f64>,
    pub duration: RwSignal<f64>,
    pub is_playing: RwSignal<bool>,
    pub is_muted: RwSignal<bool>,

    pub current_clip: RwSignal<Option<usize>>,
    pub hovered_clip: RwSignal<Option<usize>>,

    pub auto_scroll_enabled: RwSignal<bool>,
    pub programmatic_scroll: RwSignal<bool>,

    pub transcript_visible: RwSignal<bool>,
    pub share_popover_open: RwSignal<bool>,
    pub behavior_nav: RwSignal<BehaviorNav>,
    pub nav_visible: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            recording: RwSignal::new(None),
            timeline: RwSignal::new(ClipTimeline::default()),
            behaviors: RwSignal::new(BehaviorTrack::default()),
            speaker_names: RwSignal::new(Vec::new()),
            playhead_time: RwSignal::new(0.0),
            duration: RwSignal::new(0.0),
            is_playing: RwSignal::new(false),
            is_muted: RwSignal::new(false),
            current_clip: RwSignal::new(None),
            hovered_clip: RwSignal::new(None),
            auto_scroll_enabled: RwSignal::new(true),
            programmatic_scroll: RwSignal::new(false),
            transcript_visible: RwSignal::new(true),
            share_popover_open: RwSignal::new(false),
            behavior_nav: RwSignal::new(BehaviorNav::new()),
            nav_visible: RwSignal::new(true),
        }
    }

    /// Install a freshly loaded document and derive its read-only lookup
    /// structures.
    pub fn install_recording(&self, recording: Recording) {
        self.timeline.set(recording.timeline());
        self.behaviors.set(recording.behavior_track());
        self.speaker_names.set(recording.speaker_names());
        self.recording.set(Some(recording));
    }

    /// Full span of the recording in seconds: the audio duration once known,
    /// otherwise the annotated timeline's extent.
    pub fn total_duration(&self) -> f64 {
        let duration = self.duration.get();
        if duration > 0.0 {
            duration
        } else {
            self.timeline.with(|t| t.total_end())
        }
    }
}
