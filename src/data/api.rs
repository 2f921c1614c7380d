//! HTTP client for the Lovetype compatibility API.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ScorePayload;
use crate::error::AppError;

const BASE_URL_VAR: &str = "LOVETYPE_API_BASE";

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from an explicit base URL or the environment.
    ///
    /// Resolution order: explicit override (`--base-url`), then
    /// `LOVETYPE_API_BASE` (a `.env` file is honored). Absent or empty is a
    /// configuration error, raised before any I/O is attempted.
    pub fn connect(base_override: Option<String>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let raw = match base_override {
            Some(url) => url,
            None => std::env::var(BASE_URL_VAR).unwrap_or_default(),
        };
        let base_url = normalize_base(&raw).ok_or_else(|| {
            AppError::config(format!(
                "API base URL is not configured. Set {BASE_URL_VAR} in the environment (.env) \
                 or pass --base-url."
            ))
        })?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/types` — the selectable type catalog.
    ///
    /// An empty or non-array body is data unavailability, not a transport
    /// failure; callers surface the two differently.
    pub fn fetch_types(&self) -> Result<Vec<String>, AppError> {
        let resp = self
            .client
            .get(format!("{}/types", self.base_url))
            .send()
            .map_err(transport_err)?;

        if !resp.status().is_success() {
            return Err(AppError::transport(format!(
                "Type list request failed with status {}.",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp.json().map_err(|e| {
            AppError::unavailable(format!("Type list response is not valid JSON: {e}"))
        })?;
        types_from_json(&body)
    }

    /// `POST {base}/score` — submit a pair for scoring.
    ///
    /// Non-success responses carry an optional human-readable `detail`
    /// string which is surfaced verbatim.
    pub fn submit_score(&self, type_a: &str, type_b: &str) -> Result<ScorePayload, AppError> {
        let resp = self
            .client
            .post(format!("{}/score", self.base_url))
            .json(&ScoreRequest { type_a, type_b })
            .send()
            .map_err(transport_err)?;

        if !resp.status().is_success() {
            let detail = resp.json::<ErrorBody>().ok().and_then(|b| b.detail);
            return Err(AppError::Api { detail });
        }

        resp.json::<ScorePayload>()
            .map_err(|e| AppError::transport(format!("Failed to parse score response: {e}")))
    }

    /// `GET {base}/health` — service status plus per-data-file availability.
    pub fn fetch_health(&self) -> Result<BTreeMap<String, String>, AppError> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .map_err(transport_err)?;

        if !resp.status().is_success() {
            return Err(AppError::transport(format!(
                "Health request failed with status {}.",
                resp.status()
            )));
        }

        resp.json::<BTreeMap<String, String>>()
            .map_err(|e| AppError::transport(format!("Failed to parse health response: {e}")))
    }
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    #[serde(rename = "typeA")]
    type_a: &'a str,
    #[serde(rename = "typeB")]
    type_b: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

fn transport_err(e: reqwest::Error) -> AppError {
    AppError::transport(format!(
        "Cannot reach the API: {e}. Check the service URL and availability."
    ))
}

/// Trim whitespace and trailing slashes; an empty result means "unset".
fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the `/types` body: it must be an array with at least one string.
///
/// Non-string entries are skipped rather than rejected; only a body with no
/// usable entries at all counts as unavailable.
fn types_from_json(body: &serde_json::Value) -> Result<Vec<String>, AppError> {
    let entries = body.as_array().ok_or_else(unavailable_types)?;
    let types: Vec<String> = entries
        .iter()
        .filter_map(|v| v.as_str())
        .map(str::to_string)
        .collect();
    if types.is_empty() {
        return Err(unavailable_types());
    }
    Ok(types)
}

fn unavailable_types() -> AppError {
    AppError::unavailable(
        "The type list is empty or malformed. Check the service's data files.",
    )
}
