use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use runboard_core::charts::ChartData;
use runboard_core::dashboard::Dashboard;
use runboard_core::table::{sorted_records, SortDirection, SortField, SortState};
use runboard_core::upload::UploadFile;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Runboard: summarize a CSV of running records", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, env = "RUNBOARD_FORMAT", default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Media type to report for the upload (e.g. text/csv) when the file name lacks `.csv`
    #[arg(long, global = true)]
    media_type: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overall and per-runner metrics
    Summary(FileArgs),
    /// Every run, sorted
    Table(TableArgs),
    /// Series behind the distance-over-time and per-runner charts
    Charts(FileArgs),
    /// Check the file and report how many runs it holds
    Validate(FileArgs),
}

#[derive(Args, Debug)]
struct FileArgs {
    /// CSV file with date, person and miles columns
    path: PathBuf,
}

#[derive(Args, Debug)]
struct TableArgs {
    #[command(flatten)]
    file: FileArgs,
    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortArg::Date)]
    sort: SortArg,
    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SortArg {
    Date,
    Person,
    Miles,
}

impl From<SortArg> for SortField {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Date => SortField::Date,
            SortArg::Person => SortField::Person,
            SortArg::Miles => SortField::Miles,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Summary(args) => {
            let dashboard = load(&args.path, cli.media_type).await?;
            match cli.format {
                OutputFormat::Json => print_json(&json!({
                    "overall": dashboard.overall,
                    "personMetrics": dashboard.person_metrics,
                }))?,
                OutputFormat::Table => {
                    println!("{}", render::summary_table(&dashboard.overall));
                    if !dashboard.person_metrics.is_empty() {
                        println!("{}", render::person_table(&dashboard.person_metrics));
                    }
                }
            }
        }
        Command::Table(args) => {
            let dashboard = load(&args.file.path, cli.media_type).await?;
            let direction = if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let sorted = sorted_records(
                &dashboard.records,
                SortState::new(args.sort.into(), direction),
            );
            match cli.format {
                OutputFormat::Json => print_json(&sorted)?,
                OutputFormat::Table => println!("{}", render::runs_table(&sorted)),
            }
        }
        Command::Charts(args) => {
            let dashboard = load(&args.path, cli.media_type).await?;
            let charts = ChartData::build(&dashboard.records, &dashboard.person_metrics);
            match cli.format {
                OutputFormat::Json => print_json(&charts)?,
                OutputFormat::Table => {
                    let (over_time, per_person) = render::chart_tables(&charts);
                    println!("{over_time}");
                    println!("{per_person}");
                }
            }
        }
        Command::Validate(args) => {
            let dashboard = load(&args.path, cli.media_type).await?;
            match cli.format {
                OutputFormat::Json => print_json(&json!({
                    "valid": true,
                    "records": dashboard.records.len(),
                    "people": dashboard.person_metrics.len(),
                }))?,
                OutputFormat::Table => println!(
                    "{} is valid: {} runs by {} runners",
                    args.path.display(),
                    dashboard.records.len(),
                    dashboard.person_metrics.len()
                ),
            }
        }
    }

    Ok(())
}

async fn load(path: &Path, media_type: Option<String>) -> Result<Dashboard> {
    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut dashboard = Dashboard::new();
    dashboard.handle_upload(&UploadFile::new(name, media_type, contents))?;
    info!(path = %path.display(), records = dashboard.records.len(), "loaded runs");
    Ok(dashboard)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
