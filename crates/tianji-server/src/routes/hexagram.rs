//! Hexagram (六爻) Routes

use axum::{body::Bytes, extract::State, routing::post, Json, Router};

use crate::error::ApiError;
use crate::models::{ErrorResponse, GenerateHexagramRequest, HexagramResponse};
use crate::AppState;

/// Toss six lines of coins, or interpret the supplied throws
///
/// An empty body, `{}` and `{"throwResults": null}` all toss fresh coins.
#[utoipa::path(
    post,
    path = "/api/generate_hexagram",
    request_body(content = GenerateHexagramRequest, description = "Optional recorded throws"),
    responses(
        (status = 200, description = "Hexagram reading", body = HexagramResponse),
        (status = 400, description = "Malformed body or inconsistent throws", body = ErrorResponse)
    ),
    tag = "Hexagram"
)]
pub async fn generate_hexagram(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HexagramResponse>, ApiError> {
    let req = parse_request(&body)?;

    let data = state
        .reading_service
        .generate_hexagram(req.throw_results.as_deref())?;

    Ok(Json(HexagramResponse {
        success: true,
        data,
    }))
}

fn parse_request(body: &[u8]) -> Result<GenerateHexagramRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateHexagramRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate_hexagram", post(generate_hexagram))
}
