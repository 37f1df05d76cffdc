//! poi_score — compare an anonymized trace with its original.
//!
//! Both files are headerless delimited rows `id, timestamp, lat, lon`,
//! paired line by line.  Prints a score in `[0, 1]`; 1 means every top
//! place of every person kept exactly its dwell time.
//!
//! ```text
//! poi_score original.tsv anonymized.tsv --nb-poi 3 --size 3
//! poi_score original.tsv anonymized.tsv --config params.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use mt_poi::{PoiConfig, score_files};

#[derive(Parser, Debug)]
#[command(version, about = "Point-of-interest similarity between two traces")]
struct Args {
    original: PathBuf,
    anonymized: PathBuf,

    /// JSON parameter object, e.g. `{"size": 2, "nbPOI": 3}`.  Flags below
    /// override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decimal places of the cell grid (4 ≈ metre … -1 ≈ country).
    #[arg(long, allow_hyphen_values = true)]
    size: Option<i32>,

    /// Top cells compared per person and window.
    #[arg(long)]
    nb_poi: Option<usize>,

    /// Also score Saturday/Sunday daytime.
    #[arg(long)]
    weekend: bool,

    /// Field separator (default tab).
    #[arg(long)]
    delimiter: Option<char>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PoiConfig::from_json(&json)?
        }
        None => PoiConfig::default(),
    };
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(n) = args.nb_poi {
        cfg.nb_poi = n;
    }
    if let Some(d) = args.delimiter {
        cfg.delimiter = d;
    }
    cfg.weekend_enabled |= args.weekend;
    debug!("{cfg:?}");

    let score = score_files(&args.original, &args.anonymized, &cfg).with_context(|| {
        format!("scoring {} against {}", args.anonymized.display(), args.original.display())
    })?;
    println!("{score}");
    Ok(())
}
