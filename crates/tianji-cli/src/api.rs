//! Tianji API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tianji::{FourPillarsChart, HexagramResult, Line};

/// API Client for a Tianji server
pub struct TianjiClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
struct CalculateBaziRequest {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateHexagramRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    throw_results: Option<&'a [Line]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaziEnvelope {
    bazi_data: FourPillarsChart,
}

#[derive(Debug, Deserialize)]
struct HexagramEnvelope {
    data: HexagramResult,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl TianjiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Server health check
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Tianji API")?;

        parse_response(resp).await
    }

    /// Four Pillars chart for a Gregorian birth moment
    pub async fn calculate_bazi(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    ) -> Result<FourPillarsChart> {
        let url = format!("{}/api/calculate_bazi", self.base_url);
        tracing::debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(&CalculateBaziRequest {
                year,
                month,
                day,
                hour,
            })
            .send()
            .await
            .context("Failed to connect to Tianji API")?;

        let envelope: BaziEnvelope = parse_response(resp).await?;
        Ok(envelope.bazi_data)
    }

    /// Hexagram reading; the server tosses coins when `throws` is None
    pub async fn generate_hexagram(&self, throws: Option<&[Line]>) -> Result<HexagramResult> {
        let url = format!("{}/api/generate_hexagram", self.base_url);
        tracing::debug!("POST {} (throws supplied: {})", url, throws.is_some());

        let resp = self
            .client
            .post(&url)
            .json(&GenerateHexagramRequest {
                throw_results: throws,
            })
            .send()
            .await
            .context("Failed to connect to Tianji API")?;

        let envelope: HexagramEnvelope = parse_response(resp).await?;
        Ok(envelope.data)
    }
}

async fn parse_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, error_message(&body));
    }

    resp.json().await.context("Failed to parse response")
}

/// Pull `error` out of the failure envelope, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
