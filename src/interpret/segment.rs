//! Heuristic segmentation of result copy into strengths and cautions.
//!
//! The copy bodies served by the API are a single freeform string; authors
//! separate the encouraging half from the warnings with one of a handful of
//! divider conventions. We look for those dividers in a fixed priority order
//! and fall back to a length-based split when none matches.

/// Divider markers, tried in this order; the first one found wins.
///
/// The tokens are conventions of the served copy bodies (an em-dash line,
/// three hyphens, a diamond line, and three "note" markers) and must stay
/// byte-for-byte as they appear in the data.
const DIVIDERS: [&str; 6] = ["\n—\n", "\n---\n", "\n◇\n", "\n■注意", "注意：", "【注意】"];

/// Bodies at or below this many characters are treated as strengths-only
/// when no divider matches.
const SHORT_BODY_CHARS: usize = 140;

/// Split a copy body into `(strengths, cautions)`.
///
/// Rules, first match wins:
///
/// 1. absent or empty input → both parts empty
/// 2. the first divider (in `DIVIDERS` order) whose first occurrence is at
///    index > 0 splits the text there; the divider token itself is removed
///    and both parts are trimmed. A divider at the very start is rejected,
///    not split on.
/// 3. no divider and ≤ 140 characters → the whole text (trimmed) is
///    strengths, cautions empty
/// 4. otherwise → split at the floor-midpoint character index, both halves
///    trimmed. This is a crude fallback, not a sentence-boundary split; it
///    can cut mid-word and that is accepted behavior.
///
/// Pure function of its input; lengths and the midpoint are counted in
/// characters, not bytes, since bodies are mostly CJK text.
pub fn segment(text: Option<&str>) -> (String, String) {
    let Some(text) = text else {
        return (String::new(), String::new());
    };
    if text.is_empty() {
        return (String::new(), String::new());
    }

    for divider in DIVIDERS {
        match text.find(divider) {
            Some(idx) if idx > 0 => {
                let strengths = text[..idx].trim().to_string();
                let cautions = text[idx..].replacen(divider, "", 1).trim().to_string();
                return (strengths, cautions);
            }
            _ => {}
        }
    }

    let char_count = text.chars().count();
    if char_count <= SHORT_BODY_CHARS {
        return (text.trim().to_string(), String::new());
    }

    let mid = char_count / 2;
    let split_at = text
        .char_indices()
        .nth(mid)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(text.len());
    (
        text[..split_at].trim().to_string(),
        text[split_at..].trim().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_yield_empty_parts() {
        assert_eq!(segment(None), (String::new(), String::new()));
        assert_eq!(segment(Some("")), (String::new(), String::new()));
    }

    #[test]
    fn short_text_without_divider_is_strengths_only() {
        let (strengths, cautions) = segment(Some("  ふたりの相性は良好です。  "));
        assert_eq!(strengths, "ふたりの相性は良好です。");
        assert_eq!(cautions, "");
    }

    #[test]
    fn em_dash_line_splits_and_is_removed() {
        let (strengths, cautions) = segment(Some("強みの説明\n—\n注意の説明"));
        assert_eq!(strengths, "強みの説明");
        assert_eq!(cautions, "注意の説明");
    }

    #[test]
    fn ascii_rule_line_splits() {
        let (strengths, cautions) = segment(Some("Strength text\n---\nCaution text"));
        assert_eq!(strengths, "Strength text");
        assert_eq!(cautions, "Caution text");
    }

    #[test]
    fn note_markers_split() {
        let (strengths, cautions) = segment(Some("良い点です。注意：無理は禁物。"));
        assert_eq!(strengths, "良い点です。");
        assert_eq!(cautions, "無理は禁物。");

        let (strengths, cautions) = segment(Some("良い点です。【注意】急がないこと。"));
        assert_eq!(strengths, "良い点です。");
        assert_eq!(cautions, "急がないこと。");
    }

    #[test]
    fn divider_priority_is_list_order_not_position() {
        // "注意：" appears earlier in the text, but "\n—\n" is tried first.
        let text = "前半 注意：紛らわしい\n—\n後半";
        let (strengths, cautions) = segment(Some(text));
        assert_eq!(strengths, "前半 注意：紛らわしい");
        assert_eq!(cautions, "後半");
    }

    #[test]
    fn divider_at_start_is_rejected() {
        // Leading marker is skipped; the short text falls through whole.
        let (strengths, cautions) = segment(Some("注意：短い文。"));
        assert_eq!(strengths, "注意：短い文。");
        assert_eq!(cautions, "");
    }

    #[test]
    fn divider_at_start_falls_through_to_later_divider() {
        // "注意：" occurs only at index 0 and is rejected; the lower-priority
        // "【注意】" still gets its chance.
        let (strengths, cautions) = segment(Some("注意：冒頭にある。良い点。【注意】本当の注意。"));
        assert_eq!(strengths, "注意：冒頭にある。良い点。");
        assert_eq!(cautions, "本当の注意。");
    }

    #[test]
    fn long_text_without_divider_splits_at_character_midpoint() {
        // 150 single-byte chars: the midpoint is at index 75.
        let text = "a".repeat(75) + &"b".repeat(75);
        let (strengths, cautions) = segment(Some(&text));
        assert_eq!(strengths, "a".repeat(75));
        assert_eq!(cautions, "b".repeat(75));
    }

    #[test]
    fn midpoint_counts_characters_not_bytes() {
        // 150 three-byte characters; a byte-based midpoint would land inside
        // a character boundary and panic on slicing.
        let text = "あ".repeat(75) + &"い".repeat(75);
        let (strengths, cautions) = segment(Some(&text));
        assert_eq!(strengths, "あ".repeat(75));
        assert_eq!(cautions, "い".repeat(75));
    }

    #[test]
    fn split_halves_are_trimmed() {
        let (strengths, cautions) = segment(Some("  強み  \n—\n  注意  "));
        assert_eq!(strengths, "強み");
        assert_eq!(cautions, "注意");
    }
}
