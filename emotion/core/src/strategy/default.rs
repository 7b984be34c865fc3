//! Default strategy: direct mapping from the current state.
//!
//! Overrides come first (maintenance, system error, low battery off the
//! charger). After that the first set facet, in the order interaction,
//! system status, task outcome, environment, decides through its own mapping.
//! With no facet set the current emotion is kept.

use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};
use crate::state::EmotionState;

/// Battery level below which the robot looks worried when not charging
const LOW_BATTERY_THRESHOLD: i32 = 15;

/// Default rule table
#[must_use]
pub fn default_emotion(state: &EmotionState) -> EmotionType {
    if state.is_in_maintenance_mode {
        return EmotionType::Repair;
    }

    if state.system_status == Some(SystemStatusType::Error) {
        return EmotionType::Panic;
    }

    // Unknown charging state does not count as "not charging"
    if let Some(level) = state.battery_level {
        if level < LOW_BATTERY_THRESHOLD && state.is_charging == Some(false) {
            return EmotionType::Suspicious;
        }
    }

    if let Some(interaction) = state.user_interaction {
        emotion_for_interaction(interaction)
    } else if let Some(status) = state.system_status {
        emotion_for_status(status)
    } else if let Some(success) = state.task_success {
        emotion_for_task(success, state.task_complexity.unwrap_or_default())
    } else if let Some(environment) = state.environment_type {
        emotion_for_environment(environment)
    } else {
        state.current_emotion
    }
}

/// Direct mapping for a user interaction
#[must_use]
pub fn emotion_for_interaction(interaction: UserInteractionType) -> EmotionType {
    match interaction {
        UserInteractionType::Greeting => EmotionType::Happy,
        UserInteractionType::Question => EmotionType::Neutral,
        UserInteractionType::ComplexQuery => EmotionType::Suspicious,
        UserInteractionType::Appreciation => EmotionType::Satisfied,
    }
}

/// Direct mapping for a system status
#[must_use]
pub fn emotion_for_status(status: SystemStatusType) -> EmotionType {
    match status {
        SystemStatusType::Normal => EmotionType::Neutral,
        SystemStatusType::Error => EmotionType::Panic,
        SystemStatusType::Maintenance => EmotionType::Repair,
        SystemStatusType::LowBattery => EmotionType::Suspicious,
        SystemStatusType::Charging => EmotionType::Satisfied,
    }
}

/// Direct mapping for a task outcome
///
/// Only high complexity is amplified: a hard success is HAPPY, a hard
/// failure is PANIC.
#[must_use]
pub fn emotion_for_task(success: bool, complexity: TaskComplexity) -> EmotionType {
    match (success, complexity) {
        (true, TaskComplexity::High) => EmotionType::Happy,
        (true, _) => EmotionType::Satisfied,
        (false, TaskComplexity::High) => EmotionType::Panic,
        (false, _) => EmotionType::Suspicious,
    }
}

/// Direct mapping for an environment
#[must_use]
pub fn emotion_for_environment(environment: EnvironmentType) -> EmotionType {
    match environment {
        EnvironmentType::Normal => EmotionType::Neutral,
        EnvironmentType::Hazardous => EmotionType::Panic,
        EnvironmentType::Unfamiliar => EmotionType::Suspicious,
        EnvironmentType::Optimal => EmotionType::Happy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_beats_error() {
        let state = EmotionState::new()
            .with_maintenance(true)
            .with_system_status(Some(SystemStatusType::Error));
        assert_eq!(default_emotion(&state), EmotionType::Repair);
    }

    #[test]
    fn test_error_beats_interaction() {
        let state = EmotionState::new()
            .with_system_status(Some(SystemStatusType::Error))
            .with_user_interaction(Some(UserInteractionType::Greeting));
        assert_eq!(default_emotion(&state), EmotionType::Panic);
    }

    #[test]
    fn test_low_battery_not_charging() {
        let state = EmotionState::new().with_battery(Some(10), Some(false));
        assert_eq!(default_emotion(&state), EmotionType::Suspicious);
    }

    #[test]
    fn test_low_battery_threshold_is_exclusive() {
        let state = EmotionState::new()
            .with_battery(Some(15), Some(false))
            .with_current_emotion(EmotionType::Happy);
        assert_eq!(default_emotion(&state), EmotionType::Happy);
    }

    #[test]
    fn test_low_battery_unknown_charging_is_ignored() {
        let state = EmotionState::new()
            .with_battery(Some(3), None)
            .with_user_interaction(Some(UserInteractionType::Greeting));
        assert_eq!(default_emotion(&state), EmotionType::Happy);
    }

    #[test]
    fn test_low_battery_charging_falls_through() {
        let state = EmotionState::new()
            .with_battery(Some(3), Some(true))
            .with_environment(Some(EnvironmentType::Optimal));
        assert_eq!(default_emotion(&state), EmotionType::Happy);
    }

    #[test]
    fn test_greeting_is_happy() {
        let state = EmotionState::new().with_user_interaction(Some(UserInteractionType::Greeting));
        assert_eq!(default_emotion(&state), EmotionType::Happy);
    }

    #[test]
    fn test_interaction_beats_status() {
        let state = EmotionState::new()
            .with_system_status(Some(SystemStatusType::Charging))
            .with_user_interaction(Some(UserInteractionType::ComplexQuery));
        assert_eq!(default_emotion(&state), EmotionType::Suspicious);
    }

    #[test]
    fn test_status_beats_task_and_environment() {
        let state = EmotionState::new()
            .with_system_status(Some(SystemStatusType::Normal))
            .with_task(Some(true), Some(TaskComplexity::High))
            .with_environment(Some(EnvironmentType::Hazardous));
        assert_eq!(default_emotion(&state), EmotionType::Neutral);
    }

    #[test]
    fn test_task_outcomes() {
        let hard_win = EmotionState::new().with_task(Some(true), Some(TaskComplexity::High));
        let win = EmotionState::new().with_task(Some(true), Some(TaskComplexity::Medium));
        let hard_loss = EmotionState::new().with_task(Some(false), Some(TaskComplexity::High));
        let loss = EmotionState::new().with_task(Some(false), Some(TaskComplexity::Low));

        assert_eq!(default_emotion(&hard_win), EmotionType::Happy);
        assert_eq!(default_emotion(&win), EmotionType::Satisfied);
        assert_eq!(default_emotion(&hard_loss), EmotionType::Panic);
        assert_eq!(default_emotion(&loss), EmotionType::Suspicious);
    }

    #[test]
    fn test_task_without_complexity_assumes_medium() {
        let state = EmotionState::new().with_task(Some(true), None);
        assert_eq!(default_emotion(&state), EmotionType::Satisfied);
    }

    #[test]
    fn test_environment_mapping() {
        let expected = [
            (EnvironmentType::Normal, EmotionType::Neutral),
            (EnvironmentType::Hazardous, EmotionType::Panic),
            (EnvironmentType::Unfamiliar, EmotionType::Suspicious),
            (EnvironmentType::Optimal, EmotionType::Happy),
        ];
        for (environment, emotion) in expected {
            let state = EmotionState::new().with_environment(Some(environment));
            assert_eq!(default_emotion(&state), emotion);
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(emotion_for_status(SystemStatusType::Maintenance), EmotionType::Repair);
        assert_eq!(
            emotion_for_status(SystemStatusType::LowBattery),
            EmotionType::Suspicious
        );
        assert_eq!(
            emotion_for_status(SystemStatusType::Charging),
            EmotionType::Satisfied
        );
    }

    #[test]
    fn test_no_facets_keeps_current() {
        let state = EmotionState::new().with_current_emotion(EmotionType::Satisfied);
        assert_eq!(default_emotion(&state), EmotionType::Satisfied);
    }
}
