//! Emotion Core - Rule-Based Face Selection for Robots
//!
//! This crate decides which face a robot shows. Upstream application logic
//! reports what is happening (user interaction, system status, task outcome,
//! environment, battery); the core folds those reports into an
//! [`EmotionState`] and runs it through a rule table to pick one
//! [`EmotionType`]. Drawing the face is left to whoever consumes the result.
//!
//! # Architecture
//!
//! ```text
//!   application / business logic
//!              │
//!              │ update_* / FacetUpdate
//!              ▼
//! ┌──────────────────────────────────────────────┐
//! │            EmotionStrategyManager            │
//! │  ┌──────────────┐      ┌──────────────────┐  │
//! │  │ EmotionState │ ───▶ │   StrategyKind   │  │
//! │  │  (retained)  │      │ default          │  │
//! │  └──────────────┘      │ conservative     │  │
//! │                        │ expressive       │  │
//! │                        └────────┬─────────┘  │
//! │                    compute-and-diff          │
//! └─────────────────────────────────┼────────────┘
//!                                   │ EmotionChange (only on change)
//!                                   ▼
//!                  renderer (vector face, sprite, ...)
//! ```
//!
//! # Key Types
//!
//! - [`EmotionStrategyManager`]: owns state, strategy and shown emotion
//! - [`StrategyKind`]: the three registered rule tables
//! - [`EmotionState`]: immutable snapshot of every decision factor
//! - [`EmotionConnector`]: cloneable shared handle to a manager
//! - [`SimpleEmotionManager`]: direct event-to-emotion mapping without strategies
//! - [`FacetUpdate`]: serializable form of the manager's write operations
//!
//! # Quick Start
//!
//! ```
//! use emotion_core::{EmotionStrategyManager, EmotionType, TaskComplexity, UserInteractionType};
//!
//! let mut manager = EmotionStrategyManager::new();
//! manager.on_change(|change| println!("{} -> {}", change.from, change.to));
//!
//! manager.update_user_interaction(Some(UserInteractionType::Greeting));
//! assert_eq!(manager.current_emotion(), EmotionType::Happy);
//!
//! manager.switch_strategy("conservative").unwrap();
//! assert_eq!(manager.current_emotion(), EmotionType::Satisfied);
//!
//! manager.update_user_interaction(None);
//! manager.update_task_completion(Some(false), TaskComplexity::Medium);
//! assert_eq!(manager.current_emotion(), EmotionType::Neutral);
//! ```
//!
//! # No Rendering Dependencies
//!
//! Nothing here draws, loads assets or animates. The only output is an
//! [`EmotionType`], plus [`EmotionType::state_name`] for renderers driven by
//! named animation states.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod keyed;

pub mod config;
pub mod connector;
pub mod emotion;
pub mod facets;
pub mod manager;
pub mod simple;
pub mod state;
pub mod strategy;
pub mod updates;

// Re-exports for convenience
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with_env, ConfigError,
    ConfigOverrides, ConfigSource, EmotionConfig, EmotionKitToml,
};
pub use connector::EmotionConnector;
pub use emotion::EmotionType;
pub use facets::{EnvironmentType, SystemStatusType, TaskComplexity, UserInteractionType};
pub use keyed::ParseEnumError;
pub use manager::{ChangeCause, EmotionCallback, EmotionChange, EmotionStrategyManager};
pub use simple::SimpleEmotionManager;
pub use state::EmotionState;
pub use strategy::{StrategyKind, UnknownStrategyError};
pub use updates::FacetUpdate;
