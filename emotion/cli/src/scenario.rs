//! Scenario Files
//!
//! A scenario is a TOML file with an optional starting strategy and emotion
//! and a list of facet updates to replay in order:
//!
//! ```toml
//! strategy = "expressive"
//! initial = "neutral"
//!
//! [[steps]]
//! facet = "interaction"
//! interaction = "greeting"
//!
//! [[steps]]
//! facet = "battery"
//! level = 12
//! charging = false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use emotion_core::{EmotionChange, EmotionStrategyManager, EmotionType, FacetUpdate, StrategyKind};

/// Parsed scenario file
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Strategy to replay under (falls back to configuration)
    pub strategy: Option<StrategyKind>,
    /// Emotion shown before the first step (falls back to configuration)
    pub initial: Option<EmotionType>,
    /// Updates, applied in order
    pub steps: Vec<FacetUpdate>,
}

/// Outcome of one replayed step
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepReport {
    /// 1-based step number
    pub step: usize,
    /// Facet the step touched
    pub facet: &'static str,
    /// Emotion shown after the step
    pub emotion: EmotionType,
    /// The change, if the step produced one
    pub change: Option<EmotionChange>,
}

impl StepReport {
    /// Tab-separated line for plain output
    pub fn to_line(&self) -> String {
        let marker = if self.change.is_some() { "changed" } else { "-" };
        format!("{}\t{}\t{}\t{}", self.step, self.facet, self.emotion, marker)
    }
}

/// Parse scenario TOML
pub fn parse_scenario(content: &str) -> Result<Scenario, toml::de::Error> {
    toml::from_str(content)
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
    let scenario = parse_scenario(&content)
        .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;
    debug!(path = %path.display(), steps = scenario.steps.len(), "Loaded scenario");
    Ok(scenario)
}

/// Apply every step to `manager`, reporting the emotion after each one
pub fn replay(manager: &mut EmotionStrategyManager, steps: &[FacetUpdate]) -> Vec<StepReport> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, update)| {
            let change = manager.apply(*update);
            StepReport {
                step: idx + 1,
                facet: update.facet_name(),
                emotion: manager.current_emotion(),
                change,
            }
        })
        .collect()
}
