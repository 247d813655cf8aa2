//! The annotated recording document: one audio file plus its transcript
//! clips with speaker, emotion, and behavior annotations.
//!
//! Loaded once per page, sanitized at construction so the timeline and
//! behavior track only ever see well-formed data.

use serde::{Deserialize, Serialize};

use crate::behavior::{BehaviorMarker, BehaviorTrack};
use crate::timeline::ClipTimeline;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
}

/// One transcript segment as annotated by the analysis pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClipAnnotation {
    /// 1-based speaker index, matching the document's speaker list order.
    pub speaker: usize,
    pub start_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_emotion")]
    pub emotion: String,
    #[serde(default)]
    pub behaviors: Vec<String>,
}

fn default_emotion() -> String {
    "neutral".to_string()
}

impl ClipAnnotation {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// The behavior shown in navigation and labels; clips may carry more,
    /// shown only as indicators.
    pub fn primary_behavior(&self) -> Option<&str> {
        self.behaviors.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Recording {
    pub title: String,
    pub audio_src: String,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub clips: Vec<ClipAnnotation>,
}

impl Recording {
    /// Parse and sanitize a recording document. Clips whose start time is
    /// not a finite number are dropped here, so downstream consumers never
    /// see malformed intervals; bad durations are clamped to zero.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut recording: Recording = serde_json::from_str(json)?;
        recording.sanitize();
        Ok(recording)
    }

    fn sanitize(&mut self) {
        let before = self.clips.len();
        self.clips.retain(|c| c.start_time.is_finite());
        let dropped = before - self.clips.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} clip(s) with unparseable start time");
        }
        for clip in &mut self.clips {
            if !clip.duration.is_finite() || clip.duration < 0.0 {
                clip.duration = 0.0;
            }
        }
    }

    /// Timeline over the (sanitized) clips, in document order.
    pub fn timeline(&self) -> ClipTimeline {
        ClipTimeline::from_entries(self.clips.iter().map(|c| (c.start_time, c.duration)))
    }

    /// One navigation marker per clip that carries a behavior.
    pub fn behavior_track(&self) -> BehaviorTrack {
        BehaviorTrack::from_markers(self.clips.iter().enumerate().filter_map(
            |(clip_index, clip)| {
                let name = clip.primary_behavior()?;
                Some(BehaviorMarker {
                    clip_index,
                    start_time: clip.start_time,
                    name: name.to_string(),
                })
            },
        ))
    }

    /// Display names for the document's speakers, in order.
    pub fn speaker_names(&self) -> Vec<String> {
        self.speakers.iter().map(|s| s.name.clone()).collect()
    }

    /// Name for a clip's speaker, falling back to a positional label when
    /// the document's speaker list is short.
    pub fn speaker_name(&self, clip: &ClipAnnotation) -> String {
        self.speakers
            .get(clip.speaker.saturating_sub(1))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Speaker {}", clip.speaker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Weekly one-on-one",
        "audio_src": "/assets/audio/session-042.mp3",
        "speakers": [{"name": "Dana"}, {"name": "Robin"}],
        "clips": [
            {"speaker": 1, "start_time": 0.0, "duration": 4.2,
             "text": "So, how did the launch go?", "emotion": "curious"},
            {"speaker": 2, "start_time": 4.4, "duration": 6.1,
             "text": "Honestly? Not great.", "emotion": "stressed",
             "behaviors": ["deflecting", "hedging"]},
            {"speaker": 1, "start_time": 11.0, "duration": 2.0,
             "text": "Walk me through it.", "emotion": "calm"}
        ]
    }"#;

    #[test]
    fn parses_sample_document() {
        let rec = Recording::from_json(SAMPLE).unwrap();
        assert_eq!(rec.clips.len(), 3);
        assert_eq!(rec.speakers.len(), 2);
        assert_eq!(rec.clips[1].primary_behavior(), Some("deflecting"));
        assert_eq!(rec.clips[0].emotion, "curious");
        assert_eq!(rec.speaker_name(&rec.clips[1]), "Robin");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let rec = Recording::from_json(
            r#"{"title":"t","audio_src":"a.mp3",
                "clips":[{"speaker":1,"start_time":1.5}]}"#,
        )
        .unwrap();
        let clip = &rec.clips[0];
        assert_eq!(clip.duration, 0.0);
        assert_eq!(clip.emotion, "neutral");
        assert!(clip.behaviors.is_empty());
        assert_eq!(rec.speaker_name(clip), "Speaker 1");
    }

    #[test]
    fn sanitize_clamps_negative_duration() {
        let rec = Recording::from_json(
            r#"{"title":"t","audio_src":"a.mp3",
                "clips":[{"speaker":1,"start_time":2.0,"duration":-3.0}]}"#,
        )
        .unwrap();
        assert_eq!(rec.clips[0].duration, 0.0);
    }

    #[test]
    fn timeline_matches_clip_order() {
        let rec = Recording::from_json(SAMPLE).unwrap();
        let timeline = rec.timeline();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.resolve_at(5.0), Some(1));
        assert_eq!(timeline.total_end(), 13.0);
        assert_eq!(rec.clips[2].end_time(), 13.0);
    }

    #[test]
    fn behavior_track_uses_primary_behavior() {
        let rec = Recording::from_json(SAMPLE).unwrap();
        let track = rec.behavior_track();
        assert_eq!(track.len(), 1);
        let marker = track.get(0).unwrap();
        assert_eq!(marker.clip_index, 1);
        assert_eq!(marker.name, "deflecting");
        assert_eq!(marker.start_time, 4.4);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(Recording::from_json("{").is_err());
        assert!(Recording::from_json(r#"{"title":1}"#).is_err());
    }
}
