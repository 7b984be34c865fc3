//! Simple Emotion Manager
//!
//! Strategy-less alternative to [`EmotionStrategyManager`](crate::EmotionStrategyManager):
//! each reported event maps straight to an emotion with the default table's
//! per-facet mappings. Nothing is retained between events and no precedence
//! applies, so the last event always wins.

use tracing::debug;

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};
use crate::strategy::{
    emotion_for_environment, emotion_for_interaction, emotion_for_status, emotion_for_task,
};

/// Maps business events directly to emotions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleEmotionManager {
    current: EmotionType,
}

impl SimpleEmotionManager {
    /// Start at NEUTRAL
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emotion currently shown
    #[must_use]
    pub fn current_emotion(&self) -> EmotionType {
        self.current
    }

    /// Show `emotion`
    pub fn set_emotion(&mut self, emotion: EmotionType) {
        if emotion != self.current {
            debug!(from = %self.current, to = %emotion, "Simple emotion changed");
        }
        self.current = emotion;
    }

    /// React to a user interaction
    pub fn handle_user_interaction(&mut self, interaction: UserInteractionType) -> EmotionType {
        self.set_emotion(emotion_for_interaction(interaction));
        self.current
    }

    /// React to a system status change
    pub fn handle_system_status(&mut self, status: SystemStatusType) -> EmotionType {
        self.set_emotion(emotion_for_status(status));
        self.current
    }

    /// React to a finished task
    pub fn handle_task_completion(&mut self, success: bool, complexity: TaskComplexity) -> EmotionType {
        self.set_emotion(emotion_for_task(success, complexity));
        self.current
    }

    /// React to a detected environment
    pub fn handle_environment_detection(&mut self, environment: EnvironmentType) -> EmotionType {
        self.set_emotion(emotion_for_environment(environment));
        self.current
    }
}
