//! Emotion Strategies
//!
//! A strategy is a named, pure rule table from [`EmotionState`] to
//! [`EmotionType`]. The set is closed: [`StrategyKind`] names the three
//! tables and dispatches to them with a `match`, so every cascade can be read
//! top to bottom in its own module.
//!
//! | Key | Behaviour |
//! |-----|-----------|
//! | `default` | Direct mapping, overrides first, then the first set facet |
//! | `conservative` | Never PANIC or HAPPY, unknown situations read as NEUTRAL |
//! | `expressive` | Amplified reactions, reacts to battery below 20% |
//!
//! Rule order inside each table is significant. The tables are priority
//! cascades, not independent predicates: a state matching several rules gets
//! the first one.

mod conservative;
mod default;
mod expressive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emotion::EmotionType;
use crate::state::EmotionState;

pub use conservative::conservative_emotion;
pub use default::{
    default_emotion, emotion_for_environment, emotion_for_interaction, emotion_for_status,
    emotion_for_task,
};
pub use expressive::expressive_emotion;

/// Returned when a strategy key is not in the registry
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown emotion strategy '{key}' (available: default, conservative, expressive)")]
pub struct UnknownStrategyError {
    /// The rejected key
    pub key: String,
}

/// The registered emotion strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Direct mapping from the current state
    #[default]
    Default,
    /// Muted expressions, avoids extremes
    Conservative,
    /// Stronger, more varied reactions
    Expressive,
}

impl StrategyKind {
    /// Registry order, as reported by
    /// [`available_strategies`](crate::EmotionStrategyManager::available_strategies)
    pub const ALL: [Self; 3] = [Self::Default, Self::Conservative, Self::Expressive];

    /// Registry key
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Conservative => "conservative",
            Self::Expressive => "expressive",
        }
    }

    /// Human-readable strategy name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default Emotion Strategy",
            Self::Conservative => "Conservative Emotion Strategy",
            Self::Expressive => "Expressive Emotion Strategy",
        }
    }

    /// Look up a strategy by registry key
    ///
    /// Keys match exactly: `"Default"` or `" default"` are not registered.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStrategyError`] if the key is not registered.
    pub fn from_key(key: &str) -> Result<Self, UnknownStrategyError> {
        match key {
            "default" => Ok(Self::Default),
            "conservative" => Ok(Self::Conservative),
            "expressive" => Ok(Self::Expressive),
            _ => Err(UnknownStrategyError {
                key: key.to_string(),
            }),
        }
    }

    /// Select the emotion for `state` under this strategy
    ///
    /// Pure and deterministic: the result depends on `state` alone.
    #[must_use]
    pub fn evaluate(&self, state: &EmotionState) -> EmotionType {
        match self {
            Self::Default => default_emotion(state),
            Self::Conservative => conservative_emotion(state),
            Self::Expressive => expressive_emotion(state),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};

    /// A spread of states that hit every rule of every table at least once
    fn sample_states() -> Vec<EmotionState> {
        let mut states = vec![EmotionState::new(), EmotionState::new().with_maintenance(true)];
        for interaction in UserInteractionType::ALL {
            states.push(EmotionState::new().with_user_interaction(Some(*interaction)));
        }
        for status in SystemStatusType::ALL {
            states.push(EmotionState::new().with_system_status(Some(*status)));
        }
        for complexity in TaskComplexity::ALL {
            for success in [true, false] {
                states.push(EmotionState::new().with_task(Some(success), Some(*complexity)));
            }
        }
        for environment in EnvironmentType::ALL {
            states.push(EmotionState::new().with_environment(Some(*environment)));
        }
        for level in [5, 14, 15, 19, 20, 100] {
            for charging in [None, Some(true), Some(false)] {
                states.push(EmotionState::new().with_battery(Some(level), charging));
            }
        }
        states
    }

    #[test]
    fn test_registry_keys() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_key(kind.key()), Ok(kind));
        }
    }

    #[test]
    fn test_registry_keys_match_exactly() {
        for key in [" Conservative ", "CONSERVATIVE", "Default", "expressive ", "express-ive"] {
            let err = StrategyKind::from_key(key).unwrap_err();
            assert_eq!(err.key, key);
        }
        assert!("Expressive".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = StrategyKind::from_key("nonexistent").unwrap_err();
        assert_eq!(err.key, "nonexistent");
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(StrategyKind::Default.name(), "Default Emotion Strategy");
        assert_eq!(
            StrategyKind::Conservative.name(),
            "Conservative Emotion Strategy"
        );
        assert_eq!(
            StrategyKind::Expressive.name(),
            "Expressive Emotion Strategy"
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for kind in StrategyKind::ALL {
            for state in sample_states() {
                assert_eq!(kind.evaluate(&state), kind.evaluate(&state));
            }
        }
    }

    #[test]
    fn test_maintenance_wins_for_every_strategy() {
        for kind in StrategyKind::ALL {
            for state in sample_states() {
                let state = state
                    .with_maintenance(true)
                    .with_system_status(Some(SystemStatusType::Error));
                assert_eq!(kind.evaluate(&state), EmotionType::Repair, "{kind}");
            }
        }
    }

    #[test]
    fn test_dispatch_matches_table_functions() {
        for state in sample_states() {
            assert_eq!(StrategyKind::Default.evaluate(&state), default_emotion(&state));
            assert_eq!(
                StrategyKind::Conservative.evaluate(&state),
                conservative_emotion(&state)
            );
            assert_eq!(
                StrategyKind::Expressive.evaluate(&state),
                expressive_emotion(&state)
            );
        }
    }
}
