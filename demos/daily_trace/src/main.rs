//! daily_trace — generate one synthetic person and their day.
//!
//! Builds a small synthetic street grid around a geocoded place, generates a
//! person of the requested category, prints the waypoints, the schedule and
//! the routed detail schedule, answers position queries, writes the day as
//! a position trace and round-trips the person through its JSON form.
//!
//! ```text
//! daily_trace --category adult --seed 7 --query "2024-03-04 07:30:00"
//! ```

mod city;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use clap::Parser;
use log::info;

use mt_agent::{Person, PersonBuilder};
use mt_core::{GeoPoint, PersonCategory, PersonId, SimRng};
use mt_output::{CsvWriter, OutputWriter, SampleWindow, export_person};
use mt_spatial::{DEFAULT_CENTER, StaticGeocoder, resolve_center};

use city::build_city;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a synthetic person and sample their day")]
struct Args {
    /// child, adult or older.
    #[arg(long, default_value = "adult")]
    category: PersonCategory,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Place name the street grid is centred on.
    #[arg(long, default_value = "Ho Chi Minh City")]
    place: String,

    /// Position queries, `YYYY-MM-DD HH:MM:SS` or `HH:MM:SS`.  Repeatable.
    #[arg(long = "query")]
    queries: Vec<String>,

    /// Calendar date stamped on the written trace.
    #[arg(long, default_value = "2024-03-04")]
    date: NaiveDate,

    /// Trace sampling interval in seconds.
    #[arg(long, default_value_t = 300)]
    step: u32,

    /// Output directory.
    #[arg(long, default_value = "./output")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("=== daily_trace — rust_mobtrace ===");
    println!("Category: {}  |  Seed: {}  |  Place: {}", args.category, args.seed, args.place);
    println!();

    // 1. Centre point and street grid.
    let geocoder = StaticGeocoder::new()
        .with_place("Ho Chi Minh City", DEFAULT_CENTER)
        .with_place("Hanoi", GeoPoint::new(21.0285, 105.8542))
        .with_place("Da Nang", GeoPoint::new(16.0544, 108.2022));
    let center = resolve_center(&geocoder, &args.place);
    let map = build_city(center);
    println!(
        "Road network: {} nodes, {} edges, {} features",
        map.network.node_count(),
        map.network.edge_count(),
        map.features.len()
    );

    // 2. Person.
    let id = PersonId(0);
    let mut rng = SimRng::for_person(args.seed, id);
    let person = PersonBuilder::new(id, args.category)
        .random_speed(&mut rng)
        .build(&map, &mut rng)
        .context("generating person")?;
    println!();
    println!("{person}");

    // 3. Position queries.  Default to the first departure and a minute in.
    let queries = if args.queries.is_empty() {
        default_queries(&person)
    } else {
        args.queries.clone()
    };
    for q in &queries {
        let (pos, log) = person.position_at_str(&map, q).with_context(|| format!("query {q:?}"))?;
        println!("{log}");
        println!("Position at {q}: {pos}");
        println!();
    }

    // 4. Trace and detail schedule.
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    let window = SampleWindow::whole_day(args.date, args.step)?;
    let mut writer = CsvWriter::new(&args.out)?;
    let rows = export_person(&mut writer, &person, &map, &window)?;
    writer.finish()?;
    println!("Wrote {rows} trace rows to {}", args.out.display());

    // 5. Plain-form round trip.
    let json = person.to_json()?;
    let json_path = args.out.join("person.json");
    fs::write(&json_path, &json).with_context(|| format!("writing {}", json_path.display()))?;
    let reloaded = Person::from_json(&fs::read_to_string(&json_path)?, &map)?;
    ensure!(
        reloaded.to_plain_form() == person.to_plain_form(),
        "person changed across the JSON round trip"
    );
    info!("JSON round trip ok ({} bytes)", json.len());
    println!("Wrote {}", json_path.display());

    Ok(())
}

fn default_queries(person: &Person) -> Vec<String> {
    match person.detail_schedule().entries().first() {
        Some(first) => vec![
            first.start_time.to_string(),
            first.start_time.add_secs_wrapping(60.0).to_string(),
        ],
        None => Vec::new(),
    }
}
