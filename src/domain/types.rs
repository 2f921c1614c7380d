//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - parsed straight off the wire with tolerant defaults
//! - passed between the transport, the interpreter, and both front-ends
//! - dumped back out as JSON (`score --raw`)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One of the five fixed scoring axes.
///
/// The wire names are the Japanese keys the API serves; the variant order
/// here is the fixed display order used by the radar chart and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Empathy,
    Harmony,
    Dependence,
    Stimulation,
    Trust,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Empathy,
        Axis::Harmony,
        Axis::Dependence,
        Axis::Stimulation,
        Axis::Trust,
    ];

    /// Key used in the payload's `scores` map.
    pub fn wire_name(self) -> &'static str {
        match self {
            Axis::Empathy => "共感",
            Axis::Harmony => "調和",
            Axis::Dependence => "依存",
            Axis::Stimulation => "刺激",
            Axis::Trust => "信頼",
        }
    }

    /// ASCII label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Empathy => "empathy",
            Axis::Harmony => "harmony",
            Axis::Dependence => "dependence",
            Axis::Stimulation => "stimulation",
            Axis::Trust => "trust",
        }
    }
}

/// Suggested radial maximum for axis scores (two per-type scores of up to 100
/// summed). Charts extend beyond this when the data does.
pub const AXIS_SCALE_MAX: f64 = 200.0;

/// Raw scoring payload as served by `POST /score`.
///
/// Untrusted input: every field is optional, unknown fields are ignored, and
/// nothing is validated beyond JSON well-formedness. Defaults are applied
/// once, in `interpret`, not here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScorePayload {
    #[serde(rename = "macro")]
    pub macro_block: Option<MacroBlock>,
    pub micro: Option<MicroBlock>,
    /// Axis-name → score map; any subset of the five axes is tolerated.
    pub scores: Option<HashMap<String, f64>>,
    pub copy: Option<CopyBlock>,
    /// Expected to be a number in `[0, 100]`, but not trusted to be numeric.
    pub confidence: Option<serde_json::Value>,
    /// Blend ratios (動/静/絆/信頼) when the service includes them.
    pub ratios: Option<HashMap<String, f64>>,
    pub known_types: Option<Vec<String>>,
}

/// Dominant-category block: the winning macro type, an optional runner-up,
/// and the distance margin between them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MacroBlock {
    pub top: Option<String>,
    pub second: Option<String>,
    pub margin: Option<f64>,
    pub candidates: Option<Vec<Candidate>>,
}

/// One nearest-centroid candidate (the service sends the top three).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Candidate {
    pub name: String,
    pub distance: f64,
}

/// Finer-grained classification block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MicroBlock {
    pub quadrant: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// Freeform narrative copy attached to the result.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CopyBlock {
    pub catch: Option<String>,
    pub body: Option<String>,
}

/// Fully resolved display values derived from one `ScorePayload`.
///
/// Constructed fresh for every scoring response and never mutated; the next
/// response supersedes it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub title: String,
    pub catch_line: String,
    pub is_hybrid: bool,
    /// Non-empty exactly when `is_hybrid`. Renderers omit the element
    /// entirely when not hybrid rather than showing a blank line.
    pub hybrid_label: String,
    /// Five axis values in `Axis::ALL` order; missing axes are 0.
    pub axis_scores: [f64; 5],
    pub strengths_text: String,
    pub cautions_text: String,
    /// Integer percentage in `[0, 100]`.
    pub confidence_percent: u8,
}

impl DisplayModel {
    /// Axis values paired with their axes, in fixed display order.
    pub fn axis_entries(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.iter().copied().zip(self.axis_scores.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_parses_to_all_absent() {
        let payload: ScorePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.macro_block.is_none());
        assert!(payload.micro.is_none());
        assert!(payload.scores.is_none());
        assert!(payload.copy.is_none());
        assert!(payload.confidence.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: ScorePayload =
            serde_json::from_str(r#"{"extra": {"x": 1}, "confidence": 80}"#).unwrap();
        assert_eq!(payload.confidence, Some(serde_json::json!(80)));
    }

    #[test]
    fn renamed_fields_round_trip() {
        let payload: ScorePayload = serde_json::from_str(
            r#"{"macro": {"top": "安定型"}, "micro": {"type": "寄り添い型", "quadrant": "C"}}"#,
        )
        .unwrap();
        assert_eq!(
            payload.macro_block.as_ref().unwrap().top.as_deref(),
            Some("安定型")
        );
        assert_eq!(
            payload.micro.as_ref().unwrap().type_name.as_deref(),
            Some("寄り添い型")
        );
    }

    #[test]
    fn non_numeric_confidence_still_parses() {
        let payload: ScorePayload =
            serde_json::from_str(r#"{"confidence": "abc"}"#).unwrap();
        assert_eq!(payload.confidence, Some(serde_json::json!("abc")));
    }

    #[test]
    fn axis_order_is_fixed() {
        let names: Vec<&str> = Axis::ALL.iter().map(|a| a.wire_name()).collect();
        assert_eq!(names, ["共感", "調和", "依存", "刺激", "信頼"]);
    }
}
