//! Text and CSV renderings of summaries.
//!
//! Bars are scaled to the largest value in the summary; CSV output is meant
//! for external charting tools.

use crate::aggregator::{AdjustmentCounts, TrendPoint};
use crate::types::{date_key, parse_weight};
use crate::Result;
use std::collections::BTreeMap;
use std::path::Path;

const BAR_WIDTH: usize = 20;

/// A row in the muscle summary CSV
#[derive(Debug, serde::Serialize)]
struct MuscleRow<'a> {
    muscle: &'a str,
    reps: u64,
}

/// A row in the exercise volume CSV
#[derive(Debug, serde::Serialize)]
struct VolumeRow<'a> {
    exercise: &'a str,
    volume: f64,
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Sort entries by value descending, then name
fn ranked<V: Copy + PartialOrd>(values: &BTreeMap<String, V>) -> Vec<(&str, V)> {
    let mut rows: Vec<(&str, V)> = values.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    rows
}

/// One line per muscle: name, bar and total reps, largest first
pub fn render_muscle_bars(summary: &BTreeMap<String, u64>) -> Vec<String> {
    let max = summary.values().copied().max().unwrap_or(0) as f64;
    let width = summary.keys().map(|k| k.len()).max().unwrap_or(0);

    ranked(summary)
        .into_iter()
        .map(|(muscle, reps)| {
            format!("{:<width$}  [{}] {}", muscle, bar(reps as f64, max), reps, width = width)
        })
        .collect()
}

/// One line per exercise: name, bar and volume, largest first
pub fn render_volume_bars(volumes: &BTreeMap<String, f64>) -> Vec<String> {
    let max = volumes.values().copied().fold(0.0, f64::max);
    let width = volumes.keys().map(|k| k.len()).max().unwrap_or(0);

    ranked(volumes)
        .into_iter()
        .map(|(exercise, volume)| {
            format!("{:<width$}  [{}] {:.1}", exercise, bar(volume, max), volume, width = width)
        })
        .collect()
}

/// One line per adjustment level, in reduce / none / boost order
pub fn render_adjustments(counts: &AdjustmentCounts) -> Vec<String> {
    let max = counts.reduce.max(counts.none).max(counts.boost) as f64;
    [
        ("reduce", counts.reduce),
        ("none", counts.none),
        ("boost", counts.boost),
    ]
    .into_iter()
    .map(|(label, n)| format!("{:<6}  [{}] {}", label, bar(n as f64, max), n))
    .collect()
}

/// One line per logged day, oldest first
///
/// Bars scale with the numeric weight; days logged with a non-numeric
/// weight get an empty bar.
pub fn render_trend(points: &[TrendPoint]) -> Vec<String> {
    let numeric = |p: &TrendPoint| parse_weight(&p.weight);
    let max = points.iter().filter_map(numeric).fold(0.0, f64::max);

    points
        .iter()
        .map(|p| {
            format!(
                "{}  [{}] {} ({} reps)",
                date_key(p.date),
                bar(numeric(p).unwrap_or(0.0), max),
                p.weight,
                p.total_reps
            )
        })
        .collect()
}

/// Write a muscle summary as `muscle,reps` CSV
pub fn write_muscle_csv(path: &Path, summary: &BTreeMap<String, u64>) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for (muscle, reps) in summary {
        writer.serialize(MuscleRow { muscle, reps: *reps })?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} summary rows to {:?}", summary.len(), path);
    Ok(summary.len())
}

/// Write exercise volumes as `exercise,volume` CSV
pub fn write_volume_csv(path: &Path, volumes: &BTreeMap<String, f64>) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for (exercise, volume) in volumes {
        writer.serialize(VolumeRow {
            exercise,
            volume: *volume,
        })?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} volume rows to {:?}", volumes.len(), path);
    Ok(volumes.len())
}
