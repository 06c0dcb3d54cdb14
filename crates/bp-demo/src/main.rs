// File: crates/bp-demo/src/main.rs
// Summary: Demo loads a reading feed (JSON array or NDJSON), writes the chart model as JSON and the
// daily summary as CSV; `merge` subcommand median-merges a multi-reading line.

use anyhow::{Context, Result};
use bp_core::chart::build_chart_from_rows;
use bp_core::{daily_summary, normalize, parse_feed, parse_line, parse_ndjson, ChartOptions, Reading, Row, ZoomWindow};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: bp-demo <feed.json|feed.ndjson> [--me-only] [--no-pulse] [--no-night] [--theme <name>] [--zoom <zoom.json>]\n       bp-demo merge \"SYS DIA PULSE [SYS DIA PULSE ...]\"";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("merge") => merge(&args[1..]),
        Some(_) => chart(&args),
    }
}

fn merge(rest: &[String]) -> Result<()> {
    let line = rest.join(" ");
    let merged = parse_line(&line).with_context(|| format!("rejected submission '{line}'"))?;
    println!("{}/{} pulse {}", merged.sys, merged.dia, merged.pulse);
    Ok(())
}

fn chart(args: &[String]) -> Result<()> {
    let (path, opts) = parse_args(args)?;
    println!("Using input file: {}", path.display());

    let readings = load_feed(&path).with_context(|| format!("failed to load feed '{}'", path.display()))?;
    println!("Loaded {} readings", readings.len());

    let rows = normalize(&readings)?;
    let model = build_chart_from_rows(rows.clone(), &opts)?;
    if model.me_only_fallback {
        println!("  (morning/evening filter matched nothing; showing all readings)");
    }
    println!(
        "Plotted {} points, {} morning / {} evening highlights, {} night ranges",
        model.points.len(),
        model.highlights.morning.len(),
        model.highlights.evening.len(),
        model.night_shadows.len()
    );

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let model_path = out_dir.join("chart_model.json");
    std::fs::write(&model_path, serde_json::to_vec_pretty(&model)?)?;
    println!("Wrote {}", model_path.display());

    let summary_path = out_dir.join("daily_summary.csv");
    write_summary_csv(&rows, &summary_path)?;
    println!("Wrote {}", summary_path.display());
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(PathBuf, ChartOptions)> {
    let mut opts = ChartOptions::default();
    let mut path = None;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--me-only" => opts.me_only = true,
            "--no-pulse" => opts.show_pulse = false,
            "--no-night" => opts.night_shadows = false,
            "--theme" => opts.theme = it.next().context("--theme needs a name")?.clone(),
            "--zoom" => {
                let zoom_path = it.next().context("--zoom needs a file")?;
                opts.previous_zoom = load_zoom(Path::new(zoom_path))?;
            }
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}\n{USAGE}"),
            other => path = Some(PathBuf::from(other)),
        }
    }
    let path = path.with_context(|| format!("missing feed path\n{USAGE}"))?;
    Ok((path, opts))
}

/// JSON array when the document starts with `[`, NDJSON otherwise.
fn load_feed(path: &Path) -> Result<Vec<Reading>> {
    let text = std::fs::read_to_string(path)?;
    if text.trim_start().starts_with('[') {
        Ok(parse_feed(&text)?)
    } else {
        Ok(parse_ndjson(&text))
    }
}

fn load_zoom(path: &Path) -> Result<Option<ZoomWindow>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let state: serde_json::Value = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(ZoomWindow::from_state(&state))
}

fn write_summary_csv(rows: &[Row], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    wtr.write_record(["date", "morning_time", "morning_bp", "evening_time", "evening_bp"])?;
    for day in daily_summary(rows) {
        wtr.write_record([
            day.date.to_string(),
            day.morning_time().unwrap_or_default().to_string(),
            day.morning_bp().unwrap_or_default(),
            day.evening_time().unwrap_or_default().to_string(),
            day.evening_bp().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
