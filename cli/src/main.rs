mod document;
mod report;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use recon_core::approx::{approximate_secret, CrossCheck, DEFAULT_TOLERANCE};
use recon_core::{PointStore, Reconstruction};

use crate::document::ShareDocument;

/// Reconstruct the constant term of a polynomial from base-encoded shares.
#[derive(Debug, Parser)]
#[command(name = "recon", version)]
struct Args {
    /// Share document (JSON)
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Threshold to use instead of `keys.k` from the document
    #[arg(short, long)]
    k: Option<usize>,

    /// Also solve in floating point and report whether it agrees
    #[arg(long)]
    cross_check: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let document = ShareDocument::from_json(&text)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let (shares, skipped) = document.shares();
    for entry in &skipped {
        eprintln!("warning: {entry}");
    }
    if shares.len() < document.keys.n {
        eprintln!(
            "warning: document declares n = {} but holds {} usable shares",
            document.keys.n,
            shares.len()
        );
    }

    let mut store = PointStore::new();
    for share in &shares {
        let point = share.decode().context("failed to decode shares")?;
        if store.insert_point(point).is_some() {
            eprintln!(
                "warning: share index {} appears more than once; keeping the last",
                share.index
            );
        }
    }

    let k = args.k.unwrap_or(document.keys.k);
    let result = Reconstruction::from_store(&store, k)
        .with_context(|| format!("failed to reconstruct with k = {k}"))?;

    let check = if args.cross_check {
        cross_check(&store, &result, k)
    } else {
        None
    };

    if args.json {
        println!("{}", report::render_json(&result, check.as_ref()));
    } else {
        println!("{}", report::render_text(&result, check.as_ref()));
    }
    Ok(())
}

/// The approximate solve is advisory: its failure never masks the exact result.
fn cross_check(
    store: &PointStore,
    result: &Reconstruction,
    k: usize,
) -> Option<CrossCheck> {
    let estimate = store
        .ordered_subset(k)
        .and_then(|subset| approximate_secret(&subset));
    match estimate {
        Ok(approximate) => Some(CrossCheck::compare(
            result.secret(),
            approximate,
            DEFAULT_TOLERANCE,
        )),
        Err(err) => {
            eprintln!("warning: floating-point cross-check failed: {err}");
            None
        }
    }
}
