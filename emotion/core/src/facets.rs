//! Input Facets
//!
//! Enumerated inputs that upstream application logic reports to the manager.
//! Each enumeration is one facet of [`EmotionState`](crate::EmotionState);
//! battery level, charging and maintenance are plain values and live directly
//! on the state.

use serde::{Deserialize, Serialize};

use crate::keyed::impl_keyed_enum;

/// Kinds of user interaction with the robot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInteractionType {
    /// User greeted the robot
    Greeting,
    /// Plain question
    Question,
    /// Query the robot finds hard to handle
    ComplexQuery,
    /// User thanked or praised the robot
    Appreciation,
}

impl_keyed_enum!(UserInteractionType, "interaction", {
    Greeting => "greeting",
    Question => "question",
    ComplexQuery => "complex_query",
    Appreciation => "appreciation",
});

/// Overall system status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatusType {
    /// Everything nominal
    Normal,
    /// System fault
    Error,
    /// Scheduled maintenance
    Maintenance,
    /// Battery reported low by the system
    LowBattery,
    /// Connected to a charger
    Charging,
}

impl_keyed_enum!(SystemStatusType, "system status", {
    Normal => "normal",
    Error => "error",
    Maintenance => "maintenance",
    LowBattery => "low_battery",
    Charging => "charging",
});

/// Complexity of a finished task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskComplexity {
    /// Routine task
    Low,
    /// Ordinary task (assumed when a task outcome carries no complexity)
    #[default]
    Medium,
    /// Demanding task
    High,
}

impl_keyed_enum!(TaskComplexity, "task complexity", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Perceived surroundings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentType {
    /// Ordinary surroundings
    Normal,
    /// Dangerous surroundings
    Hazardous,
    /// Surroundings the robot has not seen before
    Unfamiliar,
    /// Ideal operating conditions
    Optimal,
}

impl_keyed_enum!(EnvironmentType, "environment", {
    Normal => "normal",
    Hazardous => "hazardous",
    Unfamiliar => "unfamiliar",
    Optimal => "optimal",
});
