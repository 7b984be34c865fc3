//! Emotion Output Type
//!
//! The closed set of faces the robot can show. This is the only thing the
//! core hands to a rendering surface: the surface maps an [`EmotionType`] to
//! whatever drawable it owns (vector face, sprite, 3D mesh).

use serde::{Deserialize, Serialize};

use crate::keyed::impl_keyed_enum;

/// Robot emotions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmotionType {
    /// Suspicious, dissatisfied or angry
    Suspicious,
    /// Happy and friendly
    Happy,
    /// Satisfied and calm
    Satisfied,
    /// Neutral standby face
    #[default]
    Neutral,
    /// Panic, emergency, alarmed
    Panic,
    /// Under repair or maintenance
    Repair,
}

impl_keyed_enum!(EmotionType, "emotion", {
    Suspicious => "suspicious",
    Happy => "happy",
    Satisfied => "satisfied",
    Neutral => "neutral",
    Panic => "panic",
    Repair => "repair",
});

impl EmotionType {
    /// Animation state name a renderer should switch to for this emotion
    #[must_use]
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Suspicious => "suspicious",
            Self::Happy => "happy",
            Self::Satisfied => "satisfied",
            Self::Neutral => "neutral",
            Self::Panic => "panic",
            Self::Repair => "repair",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Suspicious => "Suspicious",
            Self::Happy => "Happy",
            Self::Satisfied => "Satisfied",
            Self::Neutral => "Neutral",
            Self::Panic => "Panic",
            Self::Repair => "Repair",
        }
    }

    /// Whether this is one of the alarmed faces (panic or suspicious)
    #[must_use]
    pub fn is_alarmed(&self) -> bool {
        matches!(self, Self::Panic | Self::Suspicious)
    }
}
