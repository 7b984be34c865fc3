//! Expressive strategy: amplified reactions.

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, UserInteractionType};
use crate::state::EmotionState;

/// Battery level below which the expressive face reacts at all
const LOW_BATTERY_THRESHOLD: i32 = 20;

/// Expressive rule table
///
/// Below the battery threshold the face is SATISFIED on the charger and
/// PANIC otherwise, including when the charging state is unknown.
#[must_use]
pub fn expressive_emotion(state: &EmotionState) -> EmotionType {
    if state.is_in_maintenance_mode {
        return EmotionType::Repair;
    }

    if state.system_status == Some(SystemStatusType::Error) {
        return EmotionType::Panic;
    }

    if let Some(level) = state.battery_level {
        if level < LOW_BATTERY_THRESHOLD {
            return if state.is_charging == Some(true) {
                EmotionType::Satisfied
            } else {
                EmotionType::Panic
            };
        }
    }

    match (
        state.user_interaction,
        state.task_success,
        state.environment_type,
    ) {
        (Some(UserInteractionType::Greeting), _, _) => EmotionType::Happy,
        (Some(UserInteractionType::Question), _, _) => EmotionType::Suspicious,
        (Some(UserInteractionType::ComplexQuery), _, _) => EmotionType::Panic,
        (Some(UserInteractionType::Appreciation), _, _) => EmotionType::Happy,
        (_, Some(true), _) => EmotionType::Happy,
        (_, Some(false), _) => EmotionType::Suspicious,
        (_, _, Some(EnvironmentType::Unfamiliar)) => EmotionType::Panic,
        (_, _, Some(EnvironmentType::Optimal)) => EmotionType::Happy,
        _ => state.current_emotion,
    }
}
