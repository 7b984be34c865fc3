//! Facet Updates
//!
//! One value per manager write operation, so a sequence of updates can be
//! stored, replayed, or sent across a boundary. Upstream code that calls the
//! manager directly never needs this type; it exists for scripted input.
//!
//! Serialized with an internal `facet` tag:
//!
//! ```json
//! {"facet": "battery", "level": 10, "charging": false}
//! {"facet": "task", "success": true, "complexity": "high"}
//! {"facet": "reset"}
//! ```

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};

/// A single change to the manager's retained state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", rename_all = "snake_case")]
pub enum FacetUpdate {
    /// User interaction reported (or cleared with `None`)
    Interaction {
        /// New interaction
        #[serde(default)]
        interaction: Option<UserInteractionType>,
    },
    /// System status reported
    Status {
        /// New status
        #[serde(default)]
        status: Option<SystemStatusType>,
    },
    /// Task finished
    Task {
        /// Whether it succeeded
        #[serde(default)]
        success: Option<bool>,
        /// How hard it was
        #[serde(default)]
        complexity: TaskComplexity,
    },
    /// Environment detected
    Environment {
        /// New environment
        #[serde(default)]
        environment: Option<EnvironmentType>,
    },
    /// Battery reading
    Battery {
        /// Charge level, 0-100 expected
        #[serde(default)]
        level: Option<i32>,
        /// Whether a charger is connected
        #[serde(default)]
        charging: Option<bool>,
    },
    /// Maintenance mode entered or left
    Maintenance {
        /// New maintenance flag
        enabled: bool,
    },
    /// Clear every facet
    Reset,
    /// Force an emotion, bypassing the strategy
    Override {
        /// Emotion to show
        emotion: EmotionType,
    },
}

impl FacetUpdate {
    /// Short name of the facet this update touches, for logs
    #[must_use]
    pub fn facet_name(&self) -> &'static str {
        match self {
            Self::Interaction { .. } => "interaction",
            Self::Status { .. } => "status",
            Self::Task { .. } => "task",
            Self::Environment { .. } => "environment",
            Self::Battery { .. } => "battery",
            Self::Maintenance { .. } => "maintenance",
            Self::Reset => "reset",
            Self::Override { .. } => "override",
        }
    }
}
