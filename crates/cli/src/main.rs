use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use symlines::num::Precision;
use symlines::search::{SymmetryFinder, Verdict};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod plot;
mod provenance;

#[derive(Parser)]
#[command(name = "symlines")]
#[command(about = "Find the reflection symmetry lines of a 2D point set")]
struct Cmd {
    /// Max log level on stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Source {
    /// CSV file with x and y in the first two columns; stdin `x,y` tokens otherwise
    #[arg(long)]
    input: Option<PathBuf>,
    /// The CSV file starts with a header row
    #[arg(long)]
    header: bool,
    /// Significant digits for arithmetic; comparisons use one digit fewer
    #[arg(long, default_value_t = Precision::DEFAULT_DIGITS)]
    precision: u32,
}

#[derive(Subcommand)]
enum Action {
    /// Print every confirmed symmetry line
    Find {
        #[command(flatten)]
        source: Source,
        /// Emit a JSON array instead of one line per axis
        #[arg(long)]
        json: bool,
        /// Verify candidates on N threads (0 = all cores)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Write a JSON plot document with every candidate and a provenance sidecar
    Figure {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Find {
            source,
            json,
            workers,
        } => find(&source, json, workers),
        Action::Figure { source, out } => figure(&source, &out),
    }
}

fn load(source: &Source) -> Result<SymmetryFinder> {
    let literals = match &source.input {
        Some(path) => input::read_csv(path, source.header)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading points from stdin")?;
            input::parse_tokens(&text)?
        }
    };
    let prec = Precision::new(source.precision)?;
    let points = input::to_points(&literals, prec)?;
    let finder = SymmetryFinder::from_points(points)?;
    tracing::info!(
        points = finder.points().len(),
        duplicates = finder.points().duplicates(),
        candidates = finder.candidates().len(),
        precision = prec.digits(),
        "loaded"
    );
    if !finder.skipped().is_empty() {
        tracing::info!(
            skipped = ?finder.skipped(),
            "anchors at the centroid produced no candidate; axes through them may be missed"
        );
    }
    Ok(finder)
}

fn find(source: &Source, json: bool, workers: Option<usize>) -> Result<()> {
    let finder = load(source)?;
    let lines: Vec<_> = match workers {
        Some(w) => finder
            .verify_parallel(w)
            .into_iter()
            .filter(|v| v.confirmed)
            .map(|v| v.line())
            .collect(),
        None => finder.find().collect(),
    };
    tracing::info!(found = lines.len(), "search done");
    if json {
        let records: Vec<plot::LineRecord> = lines.iter().map(|&l| l.into()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn figure(source: &Source, out: &Path) -> Result<()> {
    tracing::info!(out = %out.display(), "figure");
    let finder = load(source)?;
    let verdicts: Vec<Verdict<'_>> = finder.verify().collect();
    let doc = plot::document(
        finder.points().points(),
        finder.centroid(),
        &verdicts,
        source.precision,
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let confirmed: Vec<String> = verdicts
        .iter()
        .filter(|v| v.confirmed)
        .map(|v| v.line().to_string())
        .collect();
    let params = serde_json::json!({
        "input": source.input.as_ref().map(|p| p.display().to_string()),
        "header": source.header,
        "precision": source.precision,
        "points": finder.points().len(),
        "candidates": verdicts.len(),
        "confirmed": confirmed,
    });
    provenance::write_sidecar(out, params)?;
    for line in &confirmed {
        println!("{line}");
    }
    Ok(())
}
