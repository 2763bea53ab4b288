//! TitleLens — catalog dataset analyser.
//!
//! Thin binary entry point. All logic lives in the `titlelens-core` crate;
//! this file only parses arguments, runs the load and prints the result.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use titlelens_core::analysis::CategoricalField;
use titlelens_core::loader::background::start_load;
use titlelens_core::loader::progress::LoadProgress;
use titlelens_core::model::format::{format_count, format_percent};
use titlelens_core::model::FrequencyEntry;
use titlelens_core::{AnalysisConfig, CatalogReport};

/// Country whose share of the catalog is called out under the country list.
const HOME_COUNTRY: &str = "United States";

#[derive(Parser, Debug)]
#[command(name = "titlelens", version, about = "Summarise a catalog titles CSV")]
struct CliArgs {
    /// Path to the titles CSV export.
    csv: PathBuf,

    /// Optional TOML file overriding the analysis defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON instead of a text digest.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    tracing::info!("TitleLens starting");

    let config = match &args.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let handle = start_load(args.csv.clone(), config).context("spawning loader thread")?;
    let report = match handle.wait() {
        LoadProgress::Complete { report, .. } => report,
        LoadProgress::Failed { message } => bail!("could not load {}: {message}", args.csv.display()),
        LoadProgress::Cancelled => bail!("load of {} was cancelled", args.csv.display()),
        LoadProgress::Parsed { .. } => bail!("loader stopped before finishing"),
    };

    if args.json {
        println!("{}", report.to_json_pretty().context("serialising report")?);
    } else {
        print_digest(&report);
    }
    Ok(())
}

fn print_digest(report: &CatalogReport) {
    let s = &report.summary;
    println!(
        "Records: {} loaded, {} clean, {} removed",
        format_count(s.original_count),
        format_count(s.clean_count),
        format_count(s.removed_count)
    );
    println!(
        "Movies: {} ({}%)   TV Shows: {} ({}%)",
        format_count(s.movies),
        format_percent(s.movies, s.clean_count),
        format_count(s.tv_shows),
        format_percent(s.tv_shows, s.clean_count)
    );
    if let Some((lo, hi)) = s.year_range {
        println!("Added between {lo} and {hi}");
    }

    for field in [
        CategoricalField::Country,
        CategoricalField::Director,
        CategoricalField::Genre,
        CategoricalField::Rating,
    ] {
        print_top(field.label(), report.category(field), s.clean_count);
        if field == CategoricalField::Country {
            println!(
                "  {HOME_COUNTRY} share of catalog: {:.1}%",
                report.category_share(field, HOME_COUNTRY)
            );
        }
    }

    let time = &report.time;
    if time.peak_month.is_empty() {
        println!("\nPeak month: N/A");
    } else {
        println!(
            "\nPeak month: {} ({} titles)",
            time.peak_month.unit.label(),
            format_count(time.peak_month.total())
        );
    }
    if time.peak_year.is_empty() {
        println!("Peak year: N/A");
    } else {
        println!(
            "Peak year: {} ({} titles)",
            time.peak_year.unit.label(),
            format_count(time.peak_year.total())
        );
    }

    let words: Vec<&str> = report
        .words
        .entries
        .iter()
        .take(10)
        .map(|e| e.label.as_str())
        .collect();
    println!(
        "\nTitle words ({} unique, max {}): {}",
        report.words.unique_words,
        report.words.max_count,
        if words.is_empty() { "N/A".to_owned() } else { words.join(", ") }
    );
}

fn print_top(heading: &str, entries: &[FrequencyEntry], total: u64) {
    println!("\nTop {heading}:");
    if entries.is_empty() {
        println!("  (none)");
        return;
    }
    for e in entries {
        println!(
            "  {:<32} {:>7}  {:>5}%",
            e.label.as_str(),
            format_count(e.count),
            format_percent(e.count, total)
        );
    }
}
