//! Shared scoring pipeline used by both the CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! submit pair -> interpret payload -> display values
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::data::ApiClient;
use crate::domain::{DisplayModel, ScorePayload};
use crate::error::AppError;
use crate::interpret;

/// All computed outputs of a single scoring run.
#[derive(Debug, Clone)]
pub struct ScoreRun {
    /// Raw payload as parsed off the wire. Kept for `score --raw` and for
    /// the optional extras (candidates, ratios) the report renders.
    pub payload: ScorePayload,
    /// Resolved display values; the sole rendering input for presenters.
    pub display: DisplayModel,
}

/// Submit a pair and resolve the response into display values.
pub fn run_score(client: &ApiClient, type_a: &str, type_b: &str) -> Result<ScoreRun, AppError> {
    let payload = client.submit_score(type_a, type_b)?;
    let display = interpret::interpret(&payload);
    Ok(ScoreRun { payload, display })
}
