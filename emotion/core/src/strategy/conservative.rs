//! Conservative strategy: muted expressions.
//!
//! Maintenance still shows REPAIR, everything else is toned down: errors and
//! hazards read as SUSPICIOUS, good news as SATISFIED, failures as NEUTRAL.
//! PANIC and HAPPY are never produced. Unlike the default table this is a
//! flat cascade, and an unmatched state is NEUTRAL rather than "keep current".

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, UserInteractionType};
use crate::state::EmotionState;

/// Conservative rule table
#[must_use]
pub fn conservative_emotion(state: &EmotionState) -> EmotionType {
    if state.is_in_maintenance_mode {
        return EmotionType::Repair;
    }

    if state.system_status == Some(SystemStatusType::Error) {
        EmotionType::Suspicious
    } else if matches!(
        state.user_interaction,
        Some(UserInteractionType::Greeting | UserInteractionType::Appreciation)
    ) {
        EmotionType::Satisfied
    } else if state.task_success == Some(true) {
        EmotionType::Satisfied
    } else if state.task_success == Some(false) {
        EmotionType::Neutral
    } else if state.environment_type == Some(EnvironmentType::Hazardous) {
        EmotionType::Suspicious
    } else {
        EmotionType::Neutral
    }
}
