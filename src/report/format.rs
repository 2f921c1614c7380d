//! Formatted terminal output for scoring results.
//!
//! We keep formatting code in one place so:
//! - the interpretation core stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::ScoreRun;
use crate::domain::AXIS_SCALE_MAX;

const AXIS_BAR_WIDTH: usize = 32;
const CONFIDENCE_BAR_WIDTH: usize = 20;

/// Format the full result report for `lovetype score`.
pub fn format_score_report(run: &ScoreRun, type_a: &str, type_b: &str) -> String {
    let display = &run.display;
    let mut out = String::new();

    out.push_str("=== lovetype - Pair Compatibility ===\n");
    out.push_str(&format!("Pair: {type_a} x {type_b}\n"));
    out.push_str(&format!("Type: {}\n", display.title));
    if !display.catch_line.is_empty() {
        out.push_str(&format!("Catch: {}\n", display.catch_line));
    }
    // The hybrid line is omitted entirely when not hybrid; absence is the
    // signal, not an empty value.
    if display.is_hybrid {
        out.push_str(&format!("{}\n", display.hybrid_label));
    }

    out.push_str("\nAxis scores:\n");
    let bar_max = axis_bar_max(&display.axis_scores);
    for (axis, value) in display.axis_entries() {
        out.push_str(&format!(
            "  {} ({:<11}) {:>6.1} |{}|\n",
            axis.wire_name(),
            axis.label(),
            value,
            bar(value, bar_max, AXIS_BAR_WIDTH),
        ));
    }

    out.push_str("\nStrengths:\n");
    out.push_str(&format!("  {}\n", display.strengths_text));
    out.push_str("\nCautions:\n");
    out.push_str(&format!("  {}\n", display.cautions_text));

    out.push_str(&format!(
        "\nConfidence: {:>3}% [{}]\n",
        display.confidence_percent,
        bar(
            f64::from(display.confidence_percent),
            100.0,
            CONFIDENCE_BAR_WIDTH
        ),
    ));

    if let Some(candidates) = run
        .payload
        .macro_block
        .as_ref()
        .and_then(|m| m.candidates.as_ref())
        .filter(|c| !c.is_empty())
    {
        out.push_str("\nNearest categories:\n");
        for candidate in candidates {
            out.push_str(&format!(
                "  {:<12} d={:.6}\n",
                candidate.name, candidate.distance
            ));
        }
    }

    if let Some(ratios) = run.payload.ratios.as_ref().filter(|r| !r.is_empty()) {
        let mut keys: Vec<&String> = ratios.keys().collect();
        keys.sort();
        let parts: Vec<String> = keys
            .iter()
            .map(|k| format!("{k}={:.4}", ratios[k.as_str()]))
            .collect();
        out.push_str(&format!("\nBlend ratios: {}\n", parts.join(" | ")));
    }

    out
}

/// Format the type catalog for `lovetype types`.
pub fn format_type_list(types: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} selectable types:\n", types.len()));
    for t in types {
        out.push_str(&format!("  {t}\n"));
    }
    out
}

/// Bar scale: the suggested chart maximum, stretched when the data exceeds it.
fn axis_bar_max(scores: &[f64; 5]) -> f64 {
    scores.iter().copied().fold(AXIS_SCALE_MAX, f64::max)
}

/// Deterministic fixed-width bar: `#` filled, `.` empty.
fn bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
