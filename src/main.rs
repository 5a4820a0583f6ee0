//! Geo point clustering tool
//!
//! Reads geographic points from a CSV file, groups them so that no cluster
//! exceeds a distance bound, and writes every record back with its cluster ID.
//! Without an input file it runs a demonstration on a handful of Bay Area cities.

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use geocluster::{
    DEFAULT_TOLERANCE, Method, Point, PointList, compute_cluster_statistics, haversine_distance,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;


#[derive(Parser)]
#[command(name = "geocluster")]
#[command(about = "Distance-bounded geo point clustering tool", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns (omit to run the demo)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file with a cluster column appended (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum distance D in km
    #[arg(short, long, default_value_t = 30.0)]
    distance: f64,

    /// Clustering strategy
    #[arg(short, long, value_enum, default_value_t = Method::CenterRadius)]
    method: Method,

    /// Slack in km allowed when validating the result
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let input = match &args.input {
        None => {
            if let Err(e) = run_demo(args.distance, args.tolerance) {
                eprintln!("Error running demo: {}", e);
                std::process::exit(1);
            }
            return;
        }
        Some(input) => input,
    };

    let (points, csv_records) = match read_points_and_csv(input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };
    debug!(points = points.len(), input = ?input, "read points");

    let labels = match cluster_and_check(&points, args.method, args.distance, args.tolerance) {
        Ok(labels) => labels,
        Err(e) => {
            eprintln!("Error clustering points: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(args.output.as_deref(), &csv_records, &labels) {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// CSV records type alias for readability
type CsvRecords = Vec<Vec<String>>;

/// Result type shared by the CLI helpers
type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A first row whose first field is not a number is a header
fn has_header(records: &[Vec<String>]) -> bool {
    records
        .first()
        .and_then(|r| r.first())
        .is_some_and(|field| field.trim().parse::<f64>().is_err())
}

/// Reads points and CSV records from a file in a single pass
///
/// Expected format: `latitude,longitude` (header row is optional, extra
/// columns are kept)
///
/// # Returns
///
/// A tuple `(points, records)` where:
/// - `points` are parsed points for clustering
/// - `records` are raw CSV records for output preservation
///
/// # Errors
///
/// Fails on IO/CSV errors and on data rows without two numeric fields, so
/// that points and records always line up.
fn read_points_and_csv(filename: &Path) -> CliResult<(PointList, CsvRecords)> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(|s| s.to_string()).collect::<Vec<String>>());
    }

    let start_idx = if has_header(&records) { 1 } else { 0 };
    let mut points = PointList::with_capacity(records.len());

    for (row, record) in records.iter().enumerate().skip(start_idx) {
        let parse = |i: usize| record.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(0), parse(1)) {
            (Some(lat), Some(lon)) => points.push(Point::new(lat, lon)),
            _ => {
                return Err(format!("row {}: expected numeric latitude,longitude", row + 1).into());
            }
        }
    }

    Ok((points, records))
}

/// Clusters, validates and logs statistics; returns the cluster labels
fn cluster_and_check(
    points: &[Point],
    method: Method,
    d: f64,
    tolerance: f64,
) -> CliResult<Vec<usize>> {
    let clustering = method.run(points, d)?;
    info!(%method, d, clusters = clustering.count, "clustering finished");

    let report = method.validate(points, &clustering, d, tolerance);
    if !report.is_valid() {
        for message in report.messages() {
            warn!(%message, "constraint violated");
        }
        let count = report.violations().len();
        return Err(format!("{} constraint violated {} times", method, count).into());
    }

    let stats = compute_cluster_statistics(points, &clustering.labels, &clustering.centers);
    debug!(
        clusters = stats.cluster_count,
        mean_size = stats.mean_cluster_size,
        max_size = stats.max_cluster_size,
        min_size = stats.min_cluster_size,
        max_radius = stats.max_radius_overall,
        max_diameter = stats.max_diameter_overall,
        "cluster statistics"
    );

    Ok(clustering.labels)
}

/// Writes every record with its cluster label appended
///
/// A header row, if present, gets a `cluster` column.
fn write_labeled_csv<W: Write>(
    out: W,
    csv_records: &[Vec<String>],
    labels: &[usize],
) -> CliResult<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(out);

    let start_idx = if has_header(csv_records) { 1 } else { 0 };
    if start_idx == 1 {
        let mut header = csv_records[0].clone();
        header.push("cluster".to_string());
        writer.write_record(&header)?;
    }

    for (record, label) in csv_records.iter().skip(start_idx).zip(labels) {
        let mut row = record.clone();
        row.push(label.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes labeled records to `output_file`, or to stdout when it is `None`
fn write_output(
    output_file: Option<&Path>,
    csv_records: &[Vec<String>],
    labels: &[usize],
) -> CliResult<()> {
    match output_file {
        None => write_labeled_csv(io::stdout().lock(), csv_records, labels),
        Some(path) => {
            write_labeled_csv(File::create(path)?, csv_records, labels)?;
            debug!(output = ?path, "labeled points written");
            Ok(())
        }
    }
}

/// Six Bay Area cities used by the demo
const BAY_AREA: [(&str, f64, f64); 6] = [
    ("San Francisco", 37.7749, -122.4194),
    ("San Jose", 37.3382, -121.8863),
    ("Oakland", 37.8044, -122.2712),
    ("Berkeley", 37.8715, -122.2730),
    ("Palo Alto", 37.4419, -122.1430),
    ("Fremont", 37.5485, -121.9886),
];

/// Clusters the Bay Area cities with both strategies and prints the outcome
fn run_demo(d: f64, tolerance: f64) -> CliResult<()> {
    let points: PointList = BAY_AREA
        .iter()
        .map(|&(_, lat, lon)| Point::new(lat, lon))
        .collect();

    println!("Cities ({}):", BAY_AREA.len());
    for (name, lat, lon) in BAY_AREA {
        println!("  {:15} -> ({:.4}, {:.4})", name, lat, lon);
    }

    let (sf, sj) = (BAY_AREA[0], BAY_AREA[1]);
    println!(
        "\nSan Francisco to San Jose: {:.2} km",
        haversine_distance(sf.1, sf.2, sj.1, sj.2)
    );

    let mut counts = Vec::new();
    for method in [Method::CenterRadius, Method::Diameter] {
        let clustering = method.run(&points, d)?;
        println!("\n{} clustering with D={} km", method, d);
        println!("  Number of clusters: {}", clustering.count);
        for k in 0..clustering.count {
            let names: Vec<&str> = clustering
                .members(k)
                .into_iter()
                .map(|i| BAY_AREA[i].0)
                .collect();
            println!("  Cluster {}: {}", k, names.join(", "));
        }

        let report = method.validate(&points, &clustering, d, tolerance);
        println!(
            "  Constraint satisfied: {}",
            if report.is_valid() { "yes" } else { "no" }
        );
        for message in report.messages() {
            println!("    {}", message);
        }

        let stats = compute_cluster_statistics(&points, &clustering.labels, &clustering.centers);
        println!("  Mean cluster size: {:.1}", stats.mean_cluster_size);
        println!("  Max radius: {:.2} km", stats.max_radius_overall);
        println!("  Max diameter: {:.2} km", stats.max_diameter_overall);

        counts.push(clustering.count);
    }

    println!("\nCenter-radius clusters: {}", counts[0]);
    println!("Diameter clusters:      {}", counts[1]);
    println!("Difference:             {}", counts[1] as i64 - counts[0] as i64);

    let points = random_box_points(DEMO_RANDOM_POINTS, DEMO_SEED);
    println!("\nRandom dataset ({} points)", points.len());
    for method in [Method::CenterRadius, Method::Diameter] {
        let start = Instant::now();
        let clustering = method.run(&points, d)?;
        let elapsed = start.elapsed();
        let report = method.validate(&points, &clustering, d, tolerance);
        println!(
            "  {:13} {} clusters in {:.1} ms, valid: {}",
            method.to_string() + ":",
            clustering.count,
            elapsed.as_secs_f64() * 1000.0,
            if report.is_valid() { "yes" } else { "no" }
        );
    }

    Ok(())
}

const DEMO_RANDOM_POINTS: usize = 100;
const DEMO_SEED: u64 = 42;

/// Uniform random points in the box lat 37.2..38.0, lon -122.6..-121.8
fn random_box_points(n: usize, seed: u64) -> PointList {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(37.2..38.0), rng.gen_range(-122.6..-121.8)))
        .collect()
}
