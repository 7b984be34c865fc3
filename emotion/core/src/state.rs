//! Emotion State
//!
//! Immutable snapshot of every factor that may influence emotion selection.
//! Changing a facet produces a new value through the `with_*` methods; a
//! state is never edited in place, so a reader holding a snapshot never sees
//! a half-applied update.
//!
//! Unset facets are `None`. Strategies treat `None` as "this factor does not
//! apply", which is different from a facet that happens to map to
//! [`EmotionType::Neutral`].

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};

/// All factors that may affect emotion selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionState {
    /// Most recent user interaction
    pub user_interaction: Option<UserInteractionType>,
    /// Reported system status
    pub system_status: Option<SystemStatusType>,
    /// Outcome of the last task
    pub task_success: Option<bool>,
    /// Complexity of the last task
    pub task_complexity: Option<TaskComplexity>,
    /// Perceived environment
    pub environment_type: Option<EnvironmentType>,
    /// Battery level, 0-100 expected (not validated)
    pub battery_level: Option<i32>,
    /// Whether the robot is on a charger
    pub is_charging: Option<bool>,
    /// Maintenance mode overrides every other factor
    pub is_in_maintenance_mode: bool,
    /// Emotion currently displayed, used by the "keep current" fallback
    pub current_emotion: EmotionType,
}

impl EmotionState {
    /// All facets unset, not in maintenance, showing [`EmotionType::Neutral`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with the user interaction replaced
    #[must_use]
    pub fn with_user_interaction(self, interaction: Option<UserInteractionType>) -> Self {
        Self {
            user_interaction: interaction,
            ..self
        }
    }

    /// Copy with the system status replaced
    #[must_use]
    pub fn with_system_status(self, status: Option<SystemStatusType>) -> Self {
        Self {
            system_status: status,
            ..self
        }
    }

    /// Copy with the task outcome and complexity replaced
    #[must_use]
    pub fn with_task(self, success: Option<bool>, complexity: Option<TaskComplexity>) -> Self {
        Self {
            task_success: success,
            task_complexity: complexity,
            ..self
        }
    }

    /// Copy with the environment replaced
    #[must_use]
    pub fn with_environment(self, environment: Option<EnvironmentType>) -> Self {
        Self {
            environment_type: environment,
            ..self
        }
    }

    /// Copy with battery level and charging flag replaced
    #[must_use]
    pub fn with_battery(self, level: Option<i32>, is_charging: Option<bool>) -> Self {
        Self {
            battery_level: level,
            is_charging,
            ..self
        }
    }

    /// Copy with the maintenance flag replaced
    #[must_use]
    pub fn with_maintenance(self, in_maintenance: bool) -> Self {
        Self {
            is_in_maintenance_mode: in_maintenance,
            ..self
        }
    }

    /// Copy with the current emotion replaced
    #[must_use]
    pub fn with_current_emotion(self, emotion: EmotionType) -> Self {
        Self {
            current_emotion: emotion,
            ..self
        }
    }

    /// Whether none of the facets a strategy dispatches on is set
    ///
    /// Battery, charging and maintenance are not counted: they only ever act
    /// as overrides ahead of the facet cascade.
    #[must_use]
    pub fn has_no_facets(&self) -> bool {
        self.user_interaction.is_none()
            && self.system_status.is_none()
            && self.task_success.is_none()
            && self.environment_type.is_none()
    }
}
