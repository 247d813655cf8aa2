//! Detected-behavior markers and prev/next navigation state.
//!
//! A marker is one transcript clip carrying a behavioral annotation. The
//! track is chronological; navigation walks it while playback position
//! keeps the current index in sync even when the user seeks manually.

#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorMarker {
    pub clip_index: usize,
    pub start_time: f64,
    pub name: String,
}

/// Behavior markers sorted by start time.
#[derive(Clone, Debug, Default)]
pub struct BehaviorTrack {
    markers: Vec<BehaviorMarker>,
}

impl BehaviorTrack {
    /// Markers with a non-finite start time are dropped.
    pub fn from_markers<I>(markers: I) -> Self
    where
        I: IntoIterator<Item = BehaviorMarker>,
    {
        let mut markers: Vec<BehaviorMarker> = markers
            .into_iter()
            .filter(|m| m.start_time.is_finite())
            .collect();
        markers.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        Self { markers }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> &[BehaviorMarker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&BehaviorMarker> {
        self.markers.get(index)
    }

    /// Index of the last marker that has started by `time`, `None` before
    /// the first.
    pub fn index_at(&self, time: f64) -> Option<usize> {
        self.markers
            .iter()
            .rposition(|m| m.start_time <= time)
    }

    /// First (chronological) marker carrying `name`.
    pub fn first_with_name(&self, name: &str) -> Option<&BehaviorMarker> {
        let name = name.trim();
        self.markers.iter().find(|m| m.name == name)
    }
}

/// Explicit navigation state: which marker was last visited and whether the
/// user (or playback) has reached any marker yet. `current` of `None` means
/// playback is before every marker and nothing has been visited.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BehaviorNav {
    current: Option<usize>,
    has_navigated: bool,
}

impl BehaviorNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn has_navigated(&self) -> bool {
        self.has_navigated
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    pub fn can_advance(&self, track: &BehaviorTrack) -> bool {
        match self.current {
            Some(i) => i + 1 < track.len(),
            None => !track.is_empty(),
        }
    }

    /// Move to the next marker, returning its index when the move is valid.
    pub fn advance(&mut self, track: &BehaviorTrack) -> Option<usize> {
        let next = self.current.map_or(0, |i| i + 1);
        if next >= track.len() {
            return None;
        }
        self.visit(next);
        Some(next)
    }

    /// Move to the previous marker, returning its index when the move is
    /// valid.
    pub fn retreat(&mut self) -> Option<usize> {
        let current = self.current?;
        if current == 0 {
            return None;
        }
        self.visit(current - 1);
        Some(current - 1)
    }

    /// Jump directly to a marker (behavior-label click).
    pub fn visit(&mut self, index: usize) {
        self.current = Some(index);
        self.has_navigated = true;
    }

    /// Adopt the marker corresponding to the playback position. Returns
    /// whether the current index changed. Moving back before every marker
    /// clears `current` but keeps `has_navigated`.
    pub fn sync_to_time(&mut self, track: &BehaviorTrack, time: f64) -> bool {
        let new_index = track.index_at(time);
        if new_index == self.current {
            return false;
        }
        self.current = new_index;
        if new_index.is_some() {
            self.has_navigated = true;
        }
        true
    }

    /// Label for the forward link: "first" until anything has been visited.
    pub fn next_label(&self) -> &'static str {
        if self.has_navigated {
            "Next detected behaviour \u{2198}"
        } else {
            "First detected behaviour \u{2198}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> BehaviorTrack {
        BehaviorTrack::from_markers([
            BehaviorMarker { clip_index: 7, start_time: 30.0, name: "deflecting".into() },
            BehaviorMarker { clip_index: 2, start_time: 10.0, name: "interrupting".into() },
            BehaviorMarker { clip_index: 4, start_time: 20.0, name: "interrupting".into() },
        ])
    }

    #[test]
    fn track_sorts_chronologically() {
        let t = track();
        let starts: Vec<f64> = t.markers().iter().map(|m| m.start_time).collect();
        assert_eq!(starts, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn index_at_is_last_started_marker() {
        let t = track();
        assert_eq!(t.index_at(5.0), None);
        assert_eq!(t.index_at(10.0), Some(0));
        assert_eq!(t.index_at(25.0), Some(1));
        assert_eq!(t.index_at(99.0), Some(2));
    }

    #[test]
    fn first_with_name_finds_earliest() {
        let t = track();
        let m = t.first_with_name("interrupting").unwrap();
        assert_eq!(m.clip_index, 2);
        assert_eq!(t.first_with_name(" deflecting "), t.get(2));
        assert!(t.first_with_name("stonewalling").is_none());
    }

    #[test]
    fn nav_advances_and_clamps() {
        let t = track();
        let mut nav = BehaviorNav::new();
        assert!(!nav.can_retreat());
        assert!(nav.can_advance(&t));

        assert_eq!(nav.advance(&t), Some(0));
        assert_eq!(nav.advance(&t), Some(1));
        assert_eq!(nav.advance(&t), Some(2));
        assert!(!nav.can_advance(&t));
        assert_eq!(nav.advance(&t), None);

        assert_eq!(nav.retreat(), Some(1));
        assert_eq!(nav.retreat(), Some(0));
        assert!(!nav.can_retreat());
        assert_eq!(nav.retreat(), None);
    }

    #[test]
    fn nav_label_switches_after_first_visit() {
        let t = track();
        let mut nav = BehaviorNav::new();
        assert_eq!(nav.next_label(), "First detected behaviour \u{2198}");
        nav.advance(&t);
        assert_eq!(nav.next_label(), "Next detected behaviour \u{2198}");
    }

    #[test]
    fn sync_follows_playback_position() {
        let t = track();
        let mut nav = BehaviorNav::new();

        assert!(nav.sync_to_time(&t, 15.0));
        assert_eq!(nav.current(), Some(0));
        assert!(nav.has_navigated());

        // Unchanged position reports no change.
        assert!(!nav.sync_to_time(&t, 16.0));

        // Seeking back before every marker clears current but not the
        // navigated flag.
        assert!(nav.sync_to_time(&t, 0.0));
        assert_eq!(nav.current(), None);
        assert!(nav.has_navigated());
    }

    #[test]
    fn empty_track_never_navigates() {
        let t = BehaviorTrack::default();
        let mut nav = BehaviorNav::new();
        assert!(!nav.can_advance(&t));
        assert_eq!(nav.advance(&t), None);
        assert!(!nav.sync_to_time(&t, 50.0));
    }

    #[test]
    fn non_finite_starts_are_dropped() {
        let t = BehaviorTrack::from_markers([
            BehaviorMarker { clip_index: 0, start_time: f64::NAN, name: "x".into() },
            BehaviorMarker { clip_index: 1, start_time: 4.0, name: "y".into() },
        ]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(0).unwrap().clip_index, 1);
    }
}
