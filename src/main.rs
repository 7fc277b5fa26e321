//! Nutrilytics CLI
//!
//! Computes an analytics snapshot from a JSON input bundle.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use nutrilytics::build_info::{self, BuildInfo};
use nutrilytics::report::render_text;
use nutrilytics::{AnalyticsConfig, AnalyticsEngine, AnalyticsInput};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "nutrilytics", version, about = "Nutrition and goal-progress analytics")]
struct Cli {
    /// JSON bundle with `plan`, `completedMeals`, `profile` and optional `today`
    input: PathBuf,

    /// Evaluate as of this date (YYYY-MM-DD); overrides the bundle's `today`
    #[arg(long)]
    today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Skip the startup banner
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrilytics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.quiet {
        build_info::print_startup_banner();
    }

    let config = AnalyticsConfig::from_env()?;
    let engine = AnalyticsEngine::new(config);
    tracing::info!(
        build = %BuildInfo::current().label(),
        loss_target = engine.config().loss_target_calories,
        gain_target = engine.config().gain_target_calories,
        "engine configured"
    );

    tracing::info!(path = %cli.input.display(), "loading input bundle");
    let mut input = AnalyticsInput::from_path(&cli.input)?;

    if cli.today.is_some() {
        input.today = cli.today;
    }
    let today = input
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let snapshot = engine.snapshot_from_input(&input, today);
    tracing::info!(
        %today,
        plan_days = input.plan.days().len(),
        completed_meals = input.completed_meals.len(),
        "snapshot ready"
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print!("{}", render_text(&snapshot, today)),
    }

    Ok(())
}
