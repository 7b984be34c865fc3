//! Emotion Connector
//!
//! A cloneable handle that lets several components share one
//! [`EmotionStrategyManager`] (and one [`SimpleEmotionManager`]) without a
//! process-wide singleton. Construct it once where the application is wired
//! together and hand clones to whoever reports events or renders the face.
//!
//! ```
//! use emotion_core::{EmotionConnector, EmotionType, UserInteractionType};
//!
//! let connector = EmotionConnector::new();
//! let renderer_side = connector.clone();
//!
//! connector.handle_user_interaction(UserInteractionType::Greeting);
//! assert_eq!(renderer_side.current_emotion(), EmotionType::Happy);
//! ```
//!
//! Every call takes the internal lock for its duration only. Callbacks
//! registered on the manager run while the lock is held and must not call
//! back into the connector.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::config::EmotionConfig;
use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};
use crate::manager::{EmotionChange, EmotionStrategyManager};
use crate::simple::SimpleEmotionManager;
use crate::strategy::UnknownStrategyError;

/// Shared access to the emotion managers
#[derive(Clone, Debug, Default)]
pub struct EmotionConnector {
    manager: Arc<Mutex<EmotionStrategyManager>>,
    simple: Arc<Mutex<SimpleEmotionManager>>,
}

impl EmotionConnector {
    /// Connector around a fresh default manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connector around a manager built from configuration
    #[must_use]
    pub fn from_config(config: &EmotionConfig) -> Self {
        Self::from_manager(EmotionStrategyManager::from_config(config))
    }

    /// Connector around an existing manager
    #[must_use]
    pub fn from_manager(manager: EmotionStrategyManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            simple: Arc::default(),
        }
    }

    /// Emotion currently shown by the strategy manager
    #[must_use]
    pub fn current_emotion(&self) -> EmotionType {
        self.manager.lock().current_emotion()
    }

    /// Force an emotion on the strategy manager
    pub fn set_emotion(&self, emotion: EmotionType) -> Option<EmotionChange> {
        self.manager.lock().set_emotion(emotion)
    }

    /// Report a user interaction
    pub fn handle_user_interaction(&self, interaction: UserInteractionType) -> Option<EmotionChange> {
        self.manager.lock().update_user_interaction(Some(interaction))
    }

    /// Report a system status
    pub fn handle_system_status(&self, status: SystemStatusType) -> Option<EmotionChange> {
        self.manager.lock().update_system_status(Some(status))
    }

    /// Report a finished task
    pub fn handle_task_completion(
        &self,
        success: bool,
        complexity: TaskComplexity,
    ) -> Option<EmotionChange> {
        self.manager
            .lock()
            .update_task_completion(Some(success), complexity)
    }

    /// Report a detected environment
    pub fn handle_environment_detection(&self, environment: EnvironmentType) -> Option<EmotionChange> {
        self.manager.lock().update_environment(Some(environment))
    }

    /// Switch strategy by registry key
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStrategyError`] for an unregistered key.
    pub fn switch_strategy(&self, key: &str) -> Result<Option<EmotionChange>, UnknownStrategyError> {
        self.manager.lock().switch_strategy(key)
    }

    /// Name of the active strategy
    #[must_use]
    pub fn current_strategy_name(&self) -> &'static str {
        self.manager.lock().current_strategy_name()
    }

    /// Watch the strategy manager's emotion
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EmotionType> {
        self.manager.lock().subscribe()
    }

    /// Run `f` with exclusive access to the strategy manager
    pub fn with_manager<R>(&self, f: impl FnOnce(&mut EmotionStrategyManager) -> R) -> R {
        f(&mut self.manager.lock())
    }

    // =========================================================================
    // Simple manager
    // =========================================================================

    /// Emotion currently shown by the simple manager
    #[must_use]
    pub fn simple_current_emotion(&self) -> EmotionType {
        self.simple.lock().current_emotion()
    }

    /// Report a user interaction to the simple manager
    pub fn simple_handle_user_interaction(&self, interaction: UserInteractionType) -> EmotionType {
        self.simple.lock().handle_user_interaction(interaction)
    }

    /// Report a system status to the simple manager
    pub fn simple_handle_system_status(&self, status: SystemStatusType) -> EmotionType {
        self.simple.lock().handle_system_status(status)
    }

    /// Report a finished task to the simple manager
    pub fn simple_handle_task_completion(&self, success: bool, complexity: TaskComplexity) -> EmotionType {
        self.simple.lock().handle_task_completion(success, complexity)
    }

    /// Report a detected environment to the simple manager
    pub fn simple_handle_environment_detection(&self, environment: EnvironmentType) -> EmotionType {
        self.simple.lock().handle_environment_detection(environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_clones_share_state() {
        let connector = EmotionConnector::new();
        let other = connector.clone();

        connector.handle_system_status(SystemStatusType::Error);
        assert_eq!(other.current_emotion(), EmotionType::Panic);
    }

    #[test]
    fn test_switch_strategy() {
        let connector = EmotionConnector::new();
        connector.handle_task_completion(false, TaskComplexity::Medium);
        assert_eq!(connector.current_emotion(), EmotionType::Suspicious);

        assert!(connector.switch_strategy("conservative").is_ok());
        assert_eq!(connector.current_strategy_name(), "Conservative Emotion Strategy");
        assert_eq!(connector.current_emotion(), EmotionType::Neutral);

        assert!(connector.switch_strategy("bogus").is_err());
        assert_eq!(connector.current_strategy_name(), "Conservative Emotion Strategy");
    }

    #[test]
    fn test_simple_and_strategy_managers_are_independent() {
        let connector = EmotionConnector::new();
        connector.simple_handle_environment_detection(EnvironmentType::Hazardous);

        assert_eq!(connector.simple_current_emotion(), EmotionType::Panic);
        assert_eq!(connector.current_emotion(), EmotionType::Neutral);
    }

    #[test]
    fn test_with_manager() {
        let connector = EmotionConnector::new();
        let battery = connector.with_manager(|m| {
            m.update_battery_status(Some(12), Some(false));
            m.state().battery_level
        });
        assert_eq!(battery, Some(12));
        assert_eq!(connector.current_emotion(), EmotionType::Suspicious);
    }

    #[test]
    fn test_subscribe_through_connector() {
        let connector = EmotionConnector::from_manager(EmotionStrategyManager::with_strategy(
            StrategyKind::Expressive,
        ));
        let mut rx = connector.subscribe();

        connector.handle_user_interaction(UserInteractionType::ComplexQuery);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), EmotionType::Panic);
    }

    #[test]
    fn test_shared_across_threads() {
        let connector = EmotionConnector::new();
        let worker = connector.clone();

        std::thread::spawn(move || {
            worker.handle_user_interaction(UserInteractionType::Appreciation);
        })
        .join()
        .unwrap();

        assert_eq!(connector.current_emotion(), EmotionType::Satisfied);
    }
}
