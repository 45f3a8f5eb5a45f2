use analytics::{AnalysisOptions, analyze_sales_data};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use configuration::{Config, load_config};
use core_types::{BonusStrategyId, ResultRecord, RevenueStrategyId};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use strategies::{create_bonus_strategy, create_revenue_strategy};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the sales analytics application.
fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller revenue, profit, bonus and best-seller report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a JSON dataset of sellers, products and purchase records.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the JSON dataset (`sellers`, `products`, `purchase_records`).
    #[arg(long, short)]
    data: PathBuf,

    /// Optional TOML file selecting strategies and bonus rates.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the configured revenue strategy (e.g. `simple`).
    #[arg(long)]
    revenue_strategy: Option<RevenueStrategyId>,

    /// Override the configured bonus strategy (e.g. `profit_rank`).
    #[arg(long)]
    bonus_strategy: Option<BonusStrategyId>,

    /// How to render the results.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the rendered results here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of a single analysis run.
fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut config =
        load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(id) = args.revenue_strategy {
        config.strategies.revenue = id;
    }
    if let Some(id) = args.bonus_strategy {
        config.strategies.bonus = id;
    }
    let options = build_options(&config)?;
    let data = read_dataset(&args.data)?;

    tracing::info!(
        dataset = %args.data.display(),
        revenue_strategy = %config.strategies.revenue,
        bonus_strategy = %config.strategies.bonus,
        "Starting sales analysis."
    );

    let results = analyze_sales_data(Some(&data), Some(&options))
        .with_context(|| format!("Failed to analyze {}", args.data.display()))?;

    let rendered = match args.format {
        OutputFormat::Table => render_table(&results),
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "Results written.");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Builds the injected strategies selected by the configuration.
fn build_options(config: &Config) -> Result<AnalysisOptions> {
    let settings = &config.strategies;
    let revenue = create_revenue_strategy(settings.revenue)?;
    let bonus = create_bonus_strategy(settings.bonus, settings)?;
    Ok(AnalysisOptions::new()
        .with_boxed_revenue_strategy(revenue)
        .with_boxed_bonus_strategy(bonus))
}

fn read_dataset(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn render_table(results: &[ResultRecord]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top product",
        ]);

    for (rank, r) in results.iter().enumerate() {
        let top = r
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            (rank + 1).to_string(),
            r.seller_id.clone(),
            r.name.clone(),
            format!("{:.2}", r.revenue),
            format!("{:.2}", r.profit),
            r.sales_count.to_string(),
            format!("{:.2}", r.bonus),
            top,
        ]);
    }

    for column in [3, 4, 5, 6] {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}
