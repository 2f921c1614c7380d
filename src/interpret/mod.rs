//! Result interpretation: raw scoring payload → resolved display values.
//!
//! Everything here is pure. The payload is untrusted (all fields optional,
//! nothing range-checked), so each field gets its documented default applied
//! exactly once, at this boundary; renderers never see a missing value.

pub mod segment;

use crate::domain::{Axis, DisplayModel, ScorePayload};

/// Margin at or below which the top two macro categories are close enough to
/// call the result a hybrid.
pub const HYBRID_MARGIN: f64 = 0.06;

/// Label attached to a hybrid result.
pub const HYBRID_LABEL: &str = "Hybrid tendency";

/// Placeholder for an empty strengths/cautions part. A display affordance,
/// not an error: renderers always get something to show.
pub const EMPTY_PART_PLACEHOLDER: &str = "—";

const MISSING_FIELD: &str = "-";

/// Resolve a scoring payload into display values.
///
/// Never fails: missing or malformed fields degrade to their defaults.
pub fn interpret(payload: &ScorePayload) -> DisplayModel {
    let macro_block = payload.macro_block.as_ref();

    let top = macro_block
        .and_then(|m| m.top.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_FIELD);
    let micro = payload
        .micro
        .as_ref()
        .and_then(|m| m.type_name.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_FIELD);
    let title = format!("{top} / {micro}");

    let catch_line = payload
        .copy
        .as_ref()
        .and_then(|c| c.catch.clone())
        .unwrap_or_default();

    let has_second = macro_block
        .and_then(|m| m.second.as_deref())
        .is_some_and(|s| !s.is_empty());
    let is_hybrid = has_second
        && macro_block
            .and_then(|m| m.margin)
            .is_some_and(|m| m <= HYBRID_MARGIN);
    let hybrid_label = if is_hybrid {
        HYBRID_LABEL.to_string()
    } else {
        String::new()
    };

    let body = payload.copy.as_ref().and_then(|c| c.body.as_deref());
    let (strengths, cautions) = segment::segment(body);

    DisplayModel {
        title,
        catch_line,
        is_hybrid,
        hybrid_label,
        axis_scores: axis_scores(payload),
        strengths_text: placeholder_if_empty(strengths),
        cautions_text: placeholder_if_empty(cautions),
        confidence_percent: confidence_percent(payload.confidence.as_ref()),
    }
}

/// Read the five fixed axes in display order; a missing axis scores 0.
fn axis_scores(payload: &ScorePayload) -> [f64; 5] {
    Axis::ALL.map(|axis| {
        payload
            .scores
            .as_ref()
            .and_then(|s| s.get(axis.wire_name()))
            .copied()
            .unwrap_or(0.0)
    })
}

fn placeholder_if_empty(part: String) -> String {
    if part.is_empty() {
        EMPTY_PART_PLACEHOLDER.to_string()
    } else {
        part
    }
}

/// Coerce the untrusted confidence value to an integer percentage.
///
/// Numbers pass through and numeric strings parse; anything else (absent,
/// booleans, objects, non-finite) becomes 0. Rounds half away from zero,
/// then clamps to `[0, 100]`.
fn confidence_percent(value: Option<&serde_json::Value>) -> u8 {
    let raw = value.and_then(numeric_value).unwrap_or(0.0);
    raw.round().clamp(0.0, 100.0) as u8
}

fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    let v = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_from(value: serde_json::Value) -> ScorePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_payload_degrades_to_defaults() {
        let model = interpret(&ScorePayload::default());
        assert_eq!(model.title, "- / -");
        assert_eq!(model.catch_line, "");
        assert!(!model.is_hybrid);
        assert_eq!(model.hybrid_label, "");
        assert_eq!(model.axis_scores, [0.0; 5]);
        assert_eq!(model.strengths_text, EMPTY_PART_PLACEHOLDER);
        assert_eq!(model.cautions_text, EMPTY_PART_PLACEHOLDER);
        assert_eq!(model.confidence_percent, 0);
    }

    #[test]
    fn empty_strings_degrade_like_absent_fields() {
        let payload = payload_from(json!({
            "macro": {"top": ""},
            "micro": {"type": ""},
        }));
        assert_eq!(interpret(&payload).title, "- / -");
    }

    #[test]
    fn hybrid_requires_second_and_margin_at_or_below_threshold() {
        let hybrid = payload_from(json!({"macro": {"second": "B", "margin": 0.06}}));
        assert!(interpret(&hybrid).is_hybrid);
        assert_eq!(interpret(&hybrid).hybrid_label, HYBRID_LABEL);

        let over = payload_from(json!({"macro": {"second": "B", "margin": 0.0600001}}));
        assert!(!interpret(&over).is_hybrid);

        let no_margin = payload_from(json!({"macro": {"second": "B"}}));
        assert!(!interpret(&no_margin).is_hybrid);

        let no_second = payload_from(json!({"macro": {"margin": 0.01}}));
        assert!(!interpret(&no_second).is_hybrid);

        let empty_second = payload_from(json!({"macro": {"second": "", "margin": 0.01}}));
        assert!(!interpret(&empty_second).is_hybrid);
    }

    #[test]
    fn hybrid_label_is_empty_when_not_hybrid() {
        let payload = payload_from(json!({"macro": {"second": "B", "margin": 0.2}}));
        let model = interpret(&payload);
        assert!(!model.is_hybrid);
        assert_eq!(model.hybrid_label, "");
    }

    #[test]
    fn confidence_clamps_and_coerces() {
        let conf = |v: serde_json::Value| interpret(&payload_from(json!({"confidence": v})));
        assert_eq!(conf(json!(-5)).confidence_percent, 0);
        assert_eq!(conf(json!(150)).confidence_percent, 100);
        assert_eq!(conf(json!("abc")).confidence_percent, 0);
        assert_eq!(conf(json!(null)).confidence_percent, 0);
        assert_eq!(conf(json!(true)).confidence_percent, 0);
        assert_eq!(conf(json!(42)).confidence_percent, 42);
        assert_eq!(conf(json!("42")).confidence_percent, 42);
    }

    #[test]
    fn confidence_rounds_half_away_from_zero() {
        let conf = |v: serde_json::Value| interpret(&payload_from(json!({"confidence": v})));
        assert_eq!(conf(json!(87.5)).confidence_percent, 88);
        assert_eq!(conf(json!(87.6)).confidence_percent, 88);
        assert_eq!(conf(json!(87.4)).confidence_percent, 87);
    }

    #[test]
    fn missing_axes_default_to_zero_and_order_is_fixed() {
        let payload = payload_from(json!({"scores": {"刺激": 80, "共感": 120}}));
        let model = interpret(&payload);
        // 共感, 調和, 依存, 刺激, 信頼
        assert_eq!(model.axis_scores, [120.0, 0.0, 0.0, 80.0, 0.0]);
    }

    #[test]
    fn full_payload_end_to_end() {
        let payload = payload_from(json!({
            "macro": {"top": "A", "second": "B", "margin": 0.03},
            "micro": {"type": "X"},
            "scores": {"共感": 150, "調和": 120, "依存": 90, "刺激": 60, "信頼": 110},
            "copy": {"catch": "hi", "body": "Strength text\n—\nCaution text"},
            "confidence": 87.6,
        }));
        let model = interpret(&payload);
        assert_eq!(model.title, "A / X");
        assert_eq!(model.catch_line, "hi");
        assert!(model.is_hybrid);
        assert_eq!(model.hybrid_label, HYBRID_LABEL);
        assert_eq!(model.axis_scores, [150.0, 120.0, 90.0, 60.0, 110.0]);
        assert_eq!(model.strengths_text, "Strength text");
        assert_eq!(model.cautions_text, "Caution text");
        assert_eq!(model.confidence_percent, 88);
    }
}
