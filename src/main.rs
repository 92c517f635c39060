use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use coursegeo::config::FileConfig;
use coursegeo::geometry::distance_yards;
use coursegeo::input::read_course;
use coursegeo::{Course, HoleCoordinates, logging, resolve_course, resolve_course_parallel};

/// Resolve golf course hole geometry into per-hole tee, green, pin and hazard coordinates
///
/// Examples:
///   # Resolve a course, print JSON to stdout
///   coursegeo course.json
///
///   # Resolve from the blue tees into a file
///   coursegeo course.json --tee-set blue -o holes.json --pretty
///
///   # See which tee sets the course defines
///   coursegeo course.json --list-tee-sets
#[derive(Parser, Debug)]
#[command(name = "coursegeo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Course file (JSON with holes and GeoJSON features)
    course: PathBuf,

    /// Path to config file (optional, auto-searches coursegeo.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tee set to resolve tees from (defaults to the first tee on each hole)
    #[arg(short = 't', long)]
    tee_set: Option<String>,

    /// Output JSON file path (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Resolve holes in parallel
    #[arg(long)]
    parallel: bool,

    /// List the course's tee sets and exit
    #[arg(long)]
    list_tee_sets: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let tee_set = args
        .tee_set
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.tee_set.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let pretty = args.pretty || file_config.as_ref().map(|c| c.pretty).unwrap_or(false);
    let parallel = args.parallel || file_config.as_ref().map(|c| c.parallel).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    logging::init(verbose);

    let spinner = create_spinner("Reading course file...");
    let start = Instant::now();
    let course = read_course(&args.course)
        .with_context(|| format!("Failed to load course from {:?}", args.course))?;
    spinner.finish_with_message(format!(
        "Loaded {} ({} holes) [{:.1}s]",
        course.name.as_deref().unwrap_or("course"),
        course.holes.len(),
        start.elapsed().as_secs_f32()
    ));

    let tee_sets = course.tee_sets();
    if args.list_tee_sets {
        if tee_sets.is_empty() {
            println!("No named tee sets");
        }
        for name in tee_sets {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(ref name) = tee_set
        && !tee_sets.contains(&name.as_str())
    {
        warn!(tee_set = %name, "tee set not found on any hole; tees will be absent");
    }

    info!(
        tee_set = tee_set.as_deref().unwrap_or("<first>"),
        parallel, "resolving course"
    );

    let spinner = create_spinner("Resolving hole geometry...");
    let start = Instant::now();
    let resolved = if parallel {
        resolve_course_parallel(&course, tee_set.as_deref())
    } else {
        resolve_course(&course, tee_set.as_deref())
    };
    let unresolved = resolved.iter().filter(|h| h.is_unresolved()).count();
    spinner.finish_with_message(format!(
        "Resolved {} holes, {} unresolved [{:.1}s]",
        resolved.len(),
        unresolved,
        start.elapsed().as_secs_f32()
    ));

    let json = if pretty {
        serde_json::to_string_pretty(&resolved)
    } else {
        serde_json::to_string(&resolved)
    }
    .context("Failed to serialize hole coordinates")?;

    match output {
        Some(ref path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            eprintln!("Output: {}", path.display());
        }
        None => println!("{}", json),
    }

    print_summary(&course, &resolved);

    eprintln!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn print_summary(course: &Course, resolved: &[HoleCoordinates]) {
    eprintln!();
    for line in summary_lines(course, resolved) {
        eprintln!("{}", line);
    }
    eprintln!();
}

/// Per-hole table: tee-to-green carry, green depth and hazard kinds
fn summary_lines(course: &Course, resolved: &[HoleCoordinates]) -> Vec<String> {
    let mut lines = vec![
        "Hole  Par  Tee->Green  Green depth  Hazards".to_string(),
        "==========================================".to_string(),
    ];

    for (hole, coords) in course.holes.iter().zip(resolved) {
        let par = hole
            .par
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        if coords.is_unresolved() {
            lines.push(format!("{:>4}  {:>3}  UNRESOLVED", coords.hole_number, par));
            continue;
        }

        let carry = coords
            .tee
            .map(|tee| format!("{:.0} yds", distance_yards(tee, coords.green)))
            .unwrap_or_else(|| "-".to_string());
        let depth = match (coords.front, coords.back) {
            (Some(front), Some(back)) => format!("{:.0} yds", distance_yards(front, back)),
            _ => "-".to_string(),
        };

        let hazards = coords
            .hazards
            .iter()
            .map(|h| h.kind.as_str())
            .collect::<Vec<_>>()
            .join(",");

        lines.push(format!(
            "{:>4}  {:>3}  {:>10}  {:>11}  {}",
            coords.hole_number, par, carry, depth, hazards
        ));
    }

    lines
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegeo::{GeoFeature, Hole};
    use geo::{Geometry, point};

    fn at(tag: &str, lat: f64, lng: f64) -> GeoFeature {
        GeoFeature::new(tag, Geometry::Point(point! { x: lng, y: lat }))
    }

    #[test]
    fn test_summary_lists_hazard_kinds_and_unresolved() {
        let mut first = Hole::new(
            1,
            vec![
                at("tee", 34.0, -118.0),
                at("pin", 34.003, -118.0),
                at("bunker", 34.002, -118.0),
                at("water", 34.001, -118.0),
            ],
        );
        first.par = Some(4);
        let course = Course::new(vec![first, Hole::new(2, vec![])]);
        let resolved = resolve_course(&course, None);

        let lines = summary_lines(&course, &resolved);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("   1    4"));
        assert!(lines[2].contains("yds"));
        assert!(lines[2].ends_with("bunker,water"));
        assert!(lines[3].ends_with("UNRESOLVED"));
    }
}
