//! Emotion taxonomy: individual detected-emotion labels grouped into six
//! display families. The family drives both the color scheme (CSS suffix)
//! and sort priority in summaries.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmotionGroup {
    AttackRejection,
    ThreatUncertainty,
    ExcitedEngaged,
    LowEnergyNegative,
    CalmGrounded,
    Neutral,
}

impl EmotionGroup {
    /// Display sort priority, 1 (most salient) to 6.
    pub fn priority(self) -> u8 {
        match self {
            Self::AttackRejection => 1,
            Self::ThreatUncertainty => 2,
            Self::ExcitedEngaged => 3,
            Self::LowEnergyNegative => 4,
            Self::CalmGrounded => 5,
            Self::Neutral => 6,
        }
    }

    /// Suffix of the group's CSS color variable.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::AttackRejection => "angry",
            Self::ThreatUncertainty => "fear",
            Self::ExcitedEngaged => "positive-high-energy",
            Self::CalmGrounded => "positive-low-energy",
            Self::LowEnergyNegative => "sad",
            Self::Neutral => "neutral",
        }
    }
}

/// Group an individual emotion label. Unknown labels are neutral.
pub fn group_for(name: &str) -> EmotionGroup {
    match name {
        "angry" | "contemptuous" | "disgusted" => EmotionGroup::AttackRejection,
        "afraid" | "anxious" | "stressed" | "surprised" | "ashamed" | "frustrated" | "fear" => {
            EmotionGroup::ThreatUncertainty
        }
        "affectionate" | "amused" | "excited" | "happy" | "hopeful" | "proud" | "relieved"
        | "curious" => EmotionGroup::ExcitedEngaged,
        "sad" | "disappointed" | "bored" | "tired" | "concerned" | "confused" => {
            EmotionGroup::LowEnergyNegative
        }
        "calm" | "confident" | "interested" => EmotionGroup::CalmGrounded,
        _ => EmotionGroup::Neutral,
    }
}

/// Class name carried by a clip element, e.g. `emotion-angry`.
pub fn css_class(name: &str) -> String {
    format!("emotion-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cover_known_labels() {
        assert_eq!(group_for("contemptuous"), EmotionGroup::AttackRejection);
        assert_eq!(group_for("anxious"), EmotionGroup::ThreatUncertainty);
        assert_eq!(group_for("curious"), EmotionGroup::ExcitedEngaged);
        assert_eq!(group_for("tired"), EmotionGroup::LowEnergyNegative);
        assert_eq!(group_for("interested"), EmotionGroup::CalmGrounded);
        assert_eq!(group_for("neutral"), EmotionGroup::Neutral);
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral() {
        assert_eq!(group_for("unknown"), EmotionGroup::Neutral);
        assert_eq!(group_for("euphoric"), EmotionGroup::Neutral);
        assert_eq!(group_for(""), EmotionGroup::Neutral);
    }

    #[test]
    fn priorities_are_ordered_and_distinct() {
        let groups = [
            EmotionGroup::AttackRejection,
            EmotionGroup::ThreatUncertainty,
            EmotionGroup::ExcitedEngaged,
            EmotionGroup::LowEnergyNegative,
            EmotionGroup::CalmGrounded,
            EmotionGroup::Neutral,
        ];
        let priorities: Vec<u8> = groups.iter().map(|g| g.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn css_class_uses_label_verbatim() {
        assert_eq!(css_class("happy"), "emotion-happy");
        assert_eq!(group_for("happy").css_suffix(), "positive-high-energy");
    }
}
