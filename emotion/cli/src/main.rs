//! Emotion CLI - Drive the Decision Core From a Shell
//!
//! Evaluates single states and replays scripted sessions against the
//! emotion strategies, so rule tables can be checked without a robot.
//!
//! # Usage
//!
//! ```bash
//! # List registered strategies
//! emotion-cli strategies
//!
//! # Evaluate one state
//! emotion-cli evaluate --interaction greeting
//! emotion-cli evaluate --strategy expressive --battery 12 --charging false --json
//!
//! # Replay a scenario file
//! emotion-cli replay session.toml
//!
//! # Verbose logging
//! RUST_LOG=debug emotion-cli replay session.toml
//! ```

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use emotion_core::{
    default_config_path, load_config_from_path, ConfigOverrides, EmotionConfig, EmotionState,
    EmotionStrategyManager, EmotionType, EnvironmentType, StrategyKind, SystemStatusType,
    TaskComplexity, UnknownStrategyError, UserInteractionType,
};

use scenario::{load_scenario, replay};

/// Emotion CLI - evaluate and replay robot emotion strategies
#[derive(Parser, Debug)]
#[command(name = "emotion-cli")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, env = "EMOTIONKIT_CONFIG", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short = 'l',
        long,
        env = "EMOTIONKIT_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: String,

    /// Strategy key, overrides configuration
    #[arg(short = 's', long, value_name = "KEY", global = true, value_parser = parse_strategy_arg)]
    strategy: Option<StrategyKind>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered strategies
    Strategies,
    /// Evaluate one state and print the selected emotion
    Evaluate(EvaluateArgs),
    /// Replay a TOML scenario file step by step
    Replay {
        /// Scenario file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Facets of the state to evaluate; anything omitted stays unset
#[derive(ClapArgs, Debug, Default)]
struct EvaluateArgs {
    /// User interaction (greeting, question, complex_query, appreciation)
    #[arg(long)]
    interaction: Option<UserInteractionType>,

    /// System status (normal, error, maintenance, low_battery, charging)
    #[arg(long)]
    status: Option<SystemStatusType>,

    /// Task outcome
    #[arg(long, value_name = "BOOL")]
    task_success: Option<bool>,

    /// Task complexity (low, medium, high)
    #[arg(long)]
    complexity: Option<TaskComplexity>,

    /// Environment (normal, hazardous, unfamiliar, optimal)
    #[arg(long)]
    environment: Option<EnvironmentType>,

    /// Battery level
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    battery: Option<i32>,

    /// Whether a charger is connected
    #[arg(long, value_name = "BOOL")]
    charging: Option<bool>,

    /// Robot is in maintenance mode
    #[arg(long)]
    maintenance: bool,

    /// Emotion currently shown (defaults to the configured initial emotion)
    #[arg(long, value_name = "EMOTION")]
    current: Option<EmotionType>,
}

impl EvaluateArgs {
    fn to_state(&self, current: EmotionType) -> EmotionState {
        EmotionState::new()
            .with_user_interaction(self.interaction)
            .with_system_status(self.status)
            .with_task(self.task_success, self.complexity)
            .with_environment(self.environment)
            .with_battery(self.battery, self.charging)
            .with_maintenance(self.maintenance)
            .with_current_emotion(current)
    }
}

#[derive(Serialize)]
struct StrategyEntry {
    key: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct Evaluation {
    strategy: StrategyKind,
    emotion: EmotionType,
    state_name: &'static str,
    state: EmotionState,
}

/// Accepts `Expressive` or ` conservative` on the command line
///
/// The registry itself only knows the exact lowercase keys.
fn parse_strategy_arg(raw: &str) -> Result<StrategyKind, UnknownStrategyError> {
    StrategyKind::from_key(&raw.trim().to_lowercase().replace('-', "_"))
}

/// Initialize logging with the specified level
///
/// Logs go to stderr so stdout stays parseable.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("emotion_cli={level},emotion_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration and apply the CLI overrides
fn resolve_config(args: &Args, overrides: &ConfigOverrides) -> Result<EmotionConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(path).context("Failed to load configuration")?;
    overrides.apply(&mut config);

    debug!(
        strategy = %config.strategy,
        initial = %config.initial_emotion,
        source = %config.source(),
        "Resolved configuration"
    );
    Ok(config)
}

fn cli_overrides(args: &Args) -> ConfigOverrides {
    let mut overrides = ConfigOverrides::new();
    if let Some(strategy) = args.strategy {
        overrides = overrides.with_strategy(strategy);
    }
    overrides
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn run_strategies(args: &Args) -> Result<()> {
    if args.json {
        let entries: Vec<StrategyEntry> = StrategyKind::ALL
            .iter()
            .map(|kind| StrategyEntry {
                key: kind.key(),
                name: kind.name(),
            })
            .collect();
        return print_json(&entries);
    }

    for kind in StrategyKind::ALL {
        println!("{}\t{}", kind.key(), kind.name());
    }
    Ok(())
}

fn evaluate(config: &EmotionConfig, facets: &EvaluateArgs) -> Evaluation {
    let state = facets.to_state(facets.current.unwrap_or(config.initial_emotion));
    let emotion = config.strategy.evaluate(&state);
    Evaluation {
        strategy: config.strategy,
        emotion,
        state_name: emotion.state_name(),
        state,
    }
}

fn run_evaluate(args: &Args, facets: &EvaluateArgs) -> Result<()> {
    let config = resolve_config(args, &cli_overrides(args))?;
    let evaluation = evaluate(&config, facets);

    info!(
        strategy = %evaluation.strategy,
        emotion = %evaluation.emotion,
        "Evaluated state"
    );

    if args.json {
        print_json(&evaluation)
    } else {
        println!("{}", evaluation.emotion);
        Ok(())
    }
}

fn run_replay(args: &Args, file: &std::path::Path) -> Result<()> {
    let scenario = load_scenario(file)?;

    // --strategy beats the scenario, which beats configuration
    let mut overrides = cli_overrides(args);
    if overrides.strategy.is_none() {
        overrides.strategy = scenario.strategy;
    }
    overrides.initial_emotion = scenario.initial;

    let config = resolve_config(args, &overrides)?;
    let mut manager = EmotionStrategyManager::from_config(&config);

    info!(
        strategy = %manager.current_strategy(),
        steps = scenario.steps.len(),
        "Replaying scenario"
    );

    let reports = replay(&mut manager, &scenario.steps);

    if args.json {
        print_json(&reports)
    } else {
        for report in &reports {
            println!("{}", report.to_line());
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging first
    init_logging(&args.log_level);

    debug!(version = env!("CARGO_PKG_VERSION"), "emotion-cli starting");

    match &args.command {
        Command::Strategies => run_strategies(&args),
        Command::Evaluate(facets) => run_evaluate(&args, facets),
        Command::Replay { file } => run_replay(&args, file),
    }
}
