use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use datasets::DatasetSources;
use omdb_client::OmdbClient;
use report::{ReportOptions, build_report, write_report};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Top250 - IMDb Top 250 report builder
#[derive(Parser)]
#[command(name = "top250")]
#[command(about = "Builds an enriched IMDb Top 250 movies CSV report", long_about = None)]
struct Cli {
    /// Where to write the finished CSV report
    #[arg(short, long, default_value = "IMDb_Top_250_With_Details.csv")]
    output: PathBuf,

    /// OMDb API key (falls back to the OMDB_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Read the IMDb .tsv.gz files from this directory instead of
    /// downloading them
    #[arg(long)]
    datasets_dir: Option<PathBuf>,

    /// Number of ranked titles to keep
    #[arg(long, default_value = "250")]
    limit: usize,

    /// Number of billed actors per title
    #[arg(long, default_value = "3")]
    top_actors: usize,

    /// Pause after each OMDb call, in milliseconds
    #[arg(long, default_value = "250")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let api_key = match cli.api_key {
        Some(key) => key,
        None => std::env::var("OMDB_API_KEY")
            .map_err(|_| anyhow!("No OMDb API key: pass --api-key or set OMDB_API_KEY"))?,
    };

    let sources = match &cli.datasets_dir {
        Some(dir) => DatasetSources::local_dir(dir),
        None => DatasetSources::default(),
    };

    println!("Loading IMDb datasets...");
    let start = Instant::now();
    let data = datasets::fetch::load(&sources)
        .await
        .context("Failed to load IMDb datasets")?;
    let (basics, ratings, crew, names, principals) = data.counts();
    println!(
        "{} Loaded {} basics, {} ratings, {} crew, {} names, {} principals in {:?}",
        "✓".green(),
        basics,
        ratings,
        crew,
        names,
        principals,
        start.elapsed()
    );

    let client = OmdbClient::new(api_key).context("Failed to build the OMDb client")?;
    let options = ReportOptions {
        limit: cli.limit,
        top_actors: cli.top_actors,
        delay: Duration::from_millis(cli.delay_ms),
    };

    println!("Building the report (OMDb enrichment is rate-limited, this takes a while)...");
    let start = Instant::now();
    let rows = build_report(&data, &client, &options).await;
    println!(
        "{} Built {} report rows in {:?}",
        "✓".green(),
        rows.len(),
        start.elapsed()
    );

    write_report(&cli.output, &rows)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!(
        "{} Report saved to {}",
        "✓".green(),
        cli.output.display().to_string().bold()
    );

    Ok(())
}
