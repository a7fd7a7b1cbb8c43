//! Bazi (八字) Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{BaziResponse, CalculateBaziRequest, ErrorResponse};
use crate::AppState;

/// Calculate the lunar date and Four Pillars for a birth moment
#[utoipa::path(
    post,
    path = "/api/calculate_bazi",
    request_body = CalculateBaziRequest,
    responses(
        (status = 200, description = "Four Pillars chart", body = BaziResponse),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
        (status = 422, description = "Date outside the supported lunar table", body = ErrorResponse)
    ),
    tag = "Bazi"
)]
pub async fn calculate_bazi(
    State(state): State<AppState>,
    payload: Result<Json<CalculateBaziRequest>, JsonRejection>,
) -> Result<Json<BaziResponse>, ApiError> {
    let Json(req) = payload?;

    let chart = state
        .reading_service
        .calculate_bazi(req.year, req.month, req.day, req.hour)?;

    Ok(Json(BaziResponse {
        success: true,
        bazi_data: chart,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/calculate_bazi", post(calculate_bazi))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    async fn post_json(body: Body) -> (StatusCode, Value) {
        let app = crate::app(&ServerConfig::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/calculate_bazi")
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_bazi_success() {
        let body = json!({ "year": 1995, "month": 5, "day": 15, "hour": 10 });
        let (status, value) = post_json(Body::from(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["success"], true);

        let data = &value["baziData"];
        assert_eq!(data["fullBazi"], "乙亥 庚巳 丙申 乙巳");
        assert_eq!(data["bazi"]["yearPillar"], "乙亥");
        assert_eq!(data["bazi"]["hourPillar"], "乙巳");
        assert_eq!(
            data["solarDate"],
            json!({ "year": 1995, "month": 5, "day": 15, "hour": 10 })
        );
        assert_eq!(
            data["lunarDate"],
            json!({ "year": 1995, "month": 4, "day": 8, "isLeap": false })
        );
    }

    #[tokio::test]
    async fn test_calculate_bazi_invalid_hour() {
        let body = json!({ "year": 1995, "month": 5, "day": 15, "hour": 24 });
        let (status, value) = post_json(Body::from(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("hour"));
    }

    #[tokio::test]
    async fn test_calculate_bazi_missing_field() {
        let body = json!({ "year": 1995, "month": 5, "day": 15 });
        let (status, value) = post_json(Body::from(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["success"], false);
    }

    #[tokio::test]
    async fn test_calculate_bazi_not_json() {
        let (status, value) = post_json(Body::from("year=1995")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["success"], false);
    }

    #[tokio::test]
    async fn test_calculate_bazi_out_of_range() {
        let body = json!({ "year": 1850, "month": 1, "day": 1, "hour": 0 });
        let (status, value) = post_json(Body::from(body.to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(value["success"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("Unsupported date range"));
    }
}
