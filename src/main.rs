use analytics::{DashboardEngine, FilterCriteria, FilterOptions};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use core_types::YearRange;
use rust_decimal::Decimal;
use std::path::PathBuf;

mod render;

/// The main entry point for the Marquee box-office dashboard.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _telemetry = configuration::init_tracing(&settings.logging)?;

    // The table is loaded once and shared read-only by every view.
    let data_path = cli.data.unwrap_or(settings.data.path);
    let table = dataset::load_cached(&data_path)
        .with_context(|| format!("Failed to load dataset from {}", data_path.display()))?;
    let engine = DashboardEngine::new(table, settings.dashboard.top_n);

    // Execute the appropriate command
    match cli.command {
        Commands::Summary(args) => handle_summary(&engine, args),
        Commands::View(args) => handle_view(&engine, args),
        Commands::Options(args) => handle_options(&engine, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Box-office analytics over a dataset of theatrical releases.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file. Defaults to ./marquee.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset to load, overriding the configured path.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline statistics for the filtered releases.
    Summary(ViewArgs),
    /// Every dashboard view for the filtered releases.
    View(ViewArgs),
    /// The values each filter can take.
    Options(OutputArgs),
}

#[derive(Args)]
struct ViewArgs {
    #[command(flatten)]
    filters: FilterArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// First release year to include. Defaults to the earliest in the dataset.
    #[arg(long)]
    from_year: Option<i32>,

    /// Last release year to include. Defaults to the latest in the dataset.
    #[arg(long)]
    to_year: Option<i32>,

    /// Genre to include; repeat for several. Defaults to every genre.
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// MPAA rating to include; repeat for several. Defaults to every rating.
    #[arg(long = "rating")]
    ratings: Vec<String>,

    /// Select no genres at all, which empties every view.
    #[arg(long, conflicts_with = "genres")]
    clear_genres: bool,

    /// Select no ratings at all, which empties every view.
    #[arg(long, conflicts_with = "ratings")]
    clear_ratings: bool,

    /// Minimum total gross, inclusive.
    #[arg(long, conflicts_with = "revenue_tier")]
    min_revenue: Option<Decimal>,

    /// Minimum total gross by selector label, e.g. "Median ($12,345)".
    #[arg(long)]
    revenue_tier: Option<String>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_summary(engine: &DashboardEngine, args: ViewArgs) -> Result<()> {
    let criteria = build_criteria(&args.filters, &engine.options())?;
    let view = engine.render(&criteria);

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&view.summary)?);
    } else {
        println!("{}", render::summary_table(&view.summary));
    }
    Ok(())
}

fn handle_view(engine: &DashboardEngine, args: ViewArgs) -> Result<()> {
    let criteria = build_criteria(&args.filters, &engine.options())?;
    let view = engine.render(&criteria);

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_dashboard(&view);
    }
    Ok(())
}

fn handle_options(engine: &DashboardEngine, args: OutputArgs) -> Result<()> {
    let options = engine.options();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        println!("{}", render::options_table(&options));
    }
    Ok(())
}

/// Turns the command-line selections into filter criteria. Anything left
/// unspecified keeps the dashboard's initial "everything selected" state.
fn build_criteria(args: &FilterArgs, options: &FilterOptions) -> Result<FilterCriteria> {
    let mut criteria = options.select_all();

    let (first, last) = options
        .years
        .map(|years| (years.min(), years.max()))
        .unwrap_or((i32::MIN, i32::MAX));
    criteria.years = YearRange::new(
        args.from_year.unwrap_or(first),
        args.to_year.unwrap_or(last),
    )?;

    if args.clear_genres {
        criteria.genres.clear();
    } else if !args.genres.is_empty() {
        criteria.genres = args.genres.iter().cloned().collect();
    }

    if args.clear_ratings {
        criteria.ratings.clear();
    } else if !args.ratings.is_empty() {
        criteria.ratings = args.ratings.iter().cloned().collect();
    }

    criteria.min_revenue = match (args.min_revenue, &args.revenue_tier) {
        (Some(amount), _) => amount,
        (None, Some(label)) => options.revenue.resolve(label)?,
        (None, None) => Decimal::ZERO,
    };

    tracing::info!(
        from = criteria.years.min(),
        to = criteria.years.max(),
        genres = criteria.genres.len(),
        ratings = criteria.ratings.len(),
        min_revenue = %criteria.min_revenue,
        "Filter selections."
    );
    Ok(criteria)
}
