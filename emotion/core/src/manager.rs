//! Emotion Strategy Manager
//!
//! Owns the retained [`EmotionState`], the active [`StrategyKind`] and the
//! emotion currently shown. Every write merges one facet into the retained
//! state (copy-with-changes) and recomputes the emotion under the active
//! strategy.
//!
//! # Change notification
//!
//! Recomputing is compute-and-diff: observers hear about a new emotion only
//! when it differs from the one already shown. Two ways to observe:
//!
//! - [`on_change`](EmotionStrategyManager::on_change) callbacks, invoked
//!   synchronously in registration order with an [`EmotionChange`]
//! - [`subscribe`](EmotionStrategyManager::subscribe), a
//!   `tokio::sync::watch` receiver that a render loop can poll with
//!   `has_changed()` or await with `changed()`
//!
//! # Threading
//!
//! The manager performs no locking. It is `Send`, so it can be moved to the
//! thread that owns the UI loop, or shared behind a mutex
//! (see [`EmotionConnector`](crate::EmotionConnector)).

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::config::EmotionConfig;
use crate::emotion::EmotionType;
use crate::facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};
use crate::state::EmotionState;
use crate::strategy::{StrategyKind, UnknownStrategyError};
use crate::updates::FacetUpdate;

/// What caused the shown emotion to change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "strategy", rename_all = "snake_case")]
pub enum ChangeCause {
    /// Recomputed by the named strategy
    Strategy(StrategyKind),
    /// Forced through [`EmotionStrategyManager::set_emotion`]
    Override,
}

/// Emitted when the shown emotion changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionChange {
    /// Emotion shown before the change
    pub from: EmotionType,
    /// Emotion shown after the change
    pub to: EmotionType,
    /// Why it changed
    pub cause: ChangeCause,
}

/// Callback type for emotion changes
pub type EmotionCallback = Box<dyn Fn(&EmotionChange) + Send + Sync>;

/// Holds current state, strategy and emotion; recomputes on every update
pub struct EmotionStrategyManager {
    /// Active rule table
    strategy: StrategyKind,
    /// Retained facets
    state: EmotionState,
    /// Emotion currently shown
    current: EmotionType,
    /// Change listeners, in registration order
    listeners: Vec<EmotionCallback>,
    /// Watch channel mirroring `current`
    watch: watch::Sender<EmotionType>,
}

impl EmotionStrategyManager {
    /// Default strategy, all facets unset, showing NEUTRAL
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(StrategyKind::default())
    }

    /// Start with the given strategy
    #[must_use]
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self::with_initial(strategy, EmotionType::default())
    }

    /// Start with the strategy and initial emotion from configuration
    #[must_use]
    pub fn from_config(config: &EmotionConfig) -> Self {
        Self::with_initial(config.strategy, config.initial_emotion)
    }

    fn with_initial(strategy: StrategyKind, initial: EmotionType) -> Self {
        let (watch, _) = watch::channel(initial);
        Self {
            strategy,
            state: EmotionState::default(),
            current: initial,
            listeners: Vec::new(),
            watch,
        }
    }

    // =========================================================================
    // Strategy selection
    // =========================================================================

    /// Switch to the strategy registered under `key` and recompute
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStrategyError`] for an unregistered key. Nothing is
    /// changed in that case.
    pub fn switch_strategy(&mut self, key: &str) -> Result<Option<EmotionChange>, UnknownStrategyError> {
        match StrategyKind::from_key(key) {
            Ok(kind) => Ok(self.switch_to(kind)),
            Err(e) => {
                warn!(key = %key, current = %self.strategy, "Rejected unknown emotion strategy");
                Err(e)
            }
        }
    }

    /// Switch to `strategy` and recompute against the retained state
    pub fn switch_to(&mut self, strategy: StrategyKind) -> Option<EmotionChange> {
        info!(from = %self.strategy, to = %strategy, "Switching emotion strategy");
        self.strategy = strategy;
        self.recompute()
    }

    /// Active strategy
    #[must_use]
    pub fn current_strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Human-readable name of the active strategy
    #[must_use]
    pub fn current_strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// `(key, name)` for every registered strategy, in registry order
    #[must_use]
    pub fn available_strategies(&self) -> Vec<(&'static str, &'static str)> {
        StrategyKind::ALL
            .iter()
            .map(|kind| (kind.key(), kind.name()))
            .collect()
    }

    // =========================================================================
    // Facet updates
    // =========================================================================

    /// Record a user interaction (`None` clears it)
    pub fn update_user_interaction(
        &mut self,
        interaction: Option<UserInteractionType>,
    ) -> Option<EmotionChange> {
        self.state = self.state.with_user_interaction(interaction);
        self.recompute()
    }

    /// Record the system status (`None` clears it)
    pub fn update_system_status(&mut self, status: Option<SystemStatusType>) -> Option<EmotionChange> {
        self.state = self.state.with_system_status(status);
        self.recompute()
    }

    /// Record a task outcome together with its complexity
    pub fn update_task_completion(
        &mut self,
        success: Option<bool>,
        complexity: TaskComplexity,
    ) -> Option<EmotionChange> {
        self.state = self.state.with_task(success, Some(complexity));
        self.recompute()
    }

    /// Record the detected environment (`None` clears it)
    pub fn update_environment(&mut self, environment: Option<EnvironmentType>) -> Option<EmotionChange> {
        self.state = self.state.with_environment(environment);
        self.recompute()
    }

    /// Record a battery reading
    pub fn update_battery_status(
        &mut self,
        level: Option<i32>,
        is_charging: Option<bool>,
    ) -> Option<EmotionChange> {
        self.state = self.state.with_battery(level, is_charging);
        self.recompute()
    }

    /// Enter or leave maintenance mode
    pub fn set_maintenance_mode(&mut self, in_maintenance: bool) -> Option<EmotionChange> {
        self.state = self.state.with_maintenance(in_maintenance);
        self.recompute()
    }

    /// Clear every facet and recompute
    pub fn reset_state(&mut self) -> Option<EmotionChange> {
        self.state = EmotionState::default();
        self.recompute()
    }

    /// Apply one scripted update
    pub fn apply(&mut self, update: FacetUpdate) -> Option<EmotionChange> {
        trace!(facet = update.facet_name(), "Applying facet update");
        match update {
            FacetUpdate::Interaction { interaction } => self.update_user_interaction(interaction),
            FacetUpdate::Status { status } => self.update_system_status(status),
            FacetUpdate::Task {
                success,
                complexity,
            } => self.update_task_completion(success, complexity),
            FacetUpdate::Environment { environment } => self.update_environment(environment),
            FacetUpdate::Battery { level, charging } => self.update_battery_status(level, charging),
            FacetUpdate::Maintenance { enabled } => self.set_maintenance_mode(enabled),
            FacetUpdate::Reset => self.reset_state(),
            FacetUpdate::Override { emotion } => self.set_emotion(emotion),
        }
    }

    // =========================================================================
    // Emotion
    // =========================================================================

    /// Force the shown emotion, bypassing the strategy
    ///
    /// The retained state is not touched. The next recompute starts from the
    /// forced emotion, so a strategy that keeps the current emotion keeps it.
    pub fn set_emotion(&mut self, emotion: EmotionType) -> Option<EmotionChange> {
        self.transition(emotion, ChangeCause::Override)
    }

    /// Emotion currently shown
    #[must_use]
    pub fn current_emotion(&self) -> EmotionType {
        self.current
    }

    /// Retained facets
    ///
    /// The `current_emotion` field of the retained state is not maintained;
    /// use [`current_emotion`](Self::current_emotion) or
    /// [`snapshot`](Self::snapshot).
    #[must_use]
    pub fn state(&self) -> &EmotionState {
        &self.state
    }

    /// Retained facets with the shown emotion filled in, as a strategy sees them
    #[must_use]
    pub fn snapshot(&self) -> EmotionState {
        self.state.with_current_emotion(self.current)
    }

    fn recompute(&mut self) -> Option<EmotionChange> {
        let next = self.strategy.evaluate(&self.snapshot());
        self.transition(next, ChangeCause::Strategy(self.strategy))
    }

    fn transition(&mut self, next: EmotionType, cause: ChangeCause) -> Option<EmotionChange> {
        if next == self.current {
            trace!(emotion = %next, "Emotion unchanged");
            return None;
        }

        let change = EmotionChange {
            from: self.current,
            to: next,
            cause,
        };
        self.current = next;

        debug!(from = %change.from, to = %change.to, cause = ?change.cause, "Emotion changed");

        for listener in &self.listeners {
            listener(&change);
        }
        self.watch.send_replace(next);

        Some(change)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback for emotion changes
    ///
    /// Callbacks are invoked in registration order, only when the emotion
    /// actually changes.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&EmotionChange) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(callback));
    }

    /// Number of registered callbacks
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove all registered callbacks
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Watch the shown emotion
    ///
    /// The receiver starts at the current emotion, marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EmotionType> {
        self.watch.subscribe()
    }
}

impl Default for EmotionStrategyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmotionStrategyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionStrategyManager")
            .field("strategy", &self.strategy)
            .field("state", &self.state)
            .field("current", &self.current)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
