mod reports;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use giftshelf_catalog::{CatalogSource, Timings, View, load_catalog};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use reports::InspectionRecord;
use source::FileCatalogSource;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    /// Items without a price
    Owned,
    /// Items with a price
    Market,
    /// Inspect both views
    Both,
}

impl ViewArg {
    fn views(self) -> Vec<View> {
        match self {
            Self::Owned => vec![View::Owned],
            Self::Market => vec![View::Market],
            Self::Both => vec![View::Owned, View::Market],
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "giftshelf-tester", version = "0.1.0")]
#[command(about = "Inspect a Giftshelf catalog: partitions, empty states and entrance timing")]
struct Args {
    /// Catalog file to inspect
    #[arg(long, default_value = "gifts.json")]
    catalog: PathBuf,

    /// Which view to plan
    #[arg(long, value_enum, default_value_t = ViewArg::Both)]
    view: ViewArg,

    /// Plan the market as if the entrance animation already played this session
    #[arg(long)]
    animations_played: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let start_time = Instant::now();
    let records = run_inspections(&args).await;
    write_reports(&args, &records, start_time)?;

    if records.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn announce_banner() {
    println!("{}", "🎁 Giftshelf Catalog Inspector".bright_cyan().bold());
    println!("{}", "==============================".cyan());
}

async fn run_inspections(args: &Args) -> Vec<InspectionRecord> {
    let source = FileCatalogSource::new(args.catalog.clone());
    let timings = Timings::standard();
    let mut records = Vec::new();

    for view in args.view.views() {
        let outcome = load_catalog(&source, view, args.animations_played, &timings).await;
        if let Some(err) = &outcome.failure {
            log::error!("{view:?} view failed for {}: {err}", source.path().display());
        } else if args.verbose {
            println!(
                "🔎 {view:?}: {} card(s) from {}",
                outcome.plan.cards().len(),
                source.path().display()
            );
        }
        records.push(InspectionRecord::from_outcome(source.resource(), &outcome));
    }

    records
}

fn write_reports(args: &Args, records: &[InspectionRecord], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(output_target.writer(), records)?,
        "markdown" => reports::generate_markdown_report(output_target.writer(), records)?,
        _ => {
            let duration = start_time.elapsed();
            reports::generate_console_report(output_target.writer(), records, duration)?;
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
