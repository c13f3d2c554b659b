//! msgwin - Entry Point
//!
//! Evaluates a JSON scenario (page store snapshot + measured geometry) and
//! prints the resulting window plan.

use clap::Parser;
use msgwin::config::OutputFormat;
use msgwin::model::AppError;
use msgwin::window::WindowPlan;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Compute windowing decisions for a message list snapshot
#[derive(Parser, Debug)]
#[command(name = "msgwin")]
#[command(version)]
#[command(about = "Compute page eviction, visibility and proximity for a message list snapshot")]
pub struct Args {
    /// Path to a JSON scenario file
    pub scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Viewport heights of content to keep when evicting
    #[arg(short, long)]
    pub multiplier: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = msgwin::config::load_config_with_precedence(args.config.clone())?;
        let merged = msgwin::config::merge_config(config_file);
        let with_env = msgwin::config::apply_env_overrides(merged)?;
        msgwin::config::apply_cli_overrides(with_env, args.format, args.multiplier).validate()?
    };

    msgwin::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let path = args.scenario;
    let scenario = msgwin::scenario::load_scenario(&path)?;
    let state = scenario.state()?;
    let surface = scenario.surface();

    info!(
        scenario = %path.display(),
        pages = state.ordering().len(),
        messages = state.message_count(),
        "Evaluating scenario"
    );

    let plan = WindowPlan::compute(&state, &surface, config.eviction_policy());

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Text => writeln!(stdout, "{plan}")?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).map_err(std::io::Error::other)?;
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
