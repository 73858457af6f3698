//! HTTP request handlers for the pay calculation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Aggregator, process_batch};
use crate::models::Batch;

use super::request::{AggregationRequest, BatchRequest};
use super::response::{AggregationResponse, ApiError, SkippedBatch};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/aggregate", post(aggregate_handler))
}

/// Handler for POST /aggregate endpoint.
///
/// Accepts a list of punch batches and returns the combined per-employee
/// pay summaries.
async fn aggregate_handler(
    payload: Result<Json<AggregationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let batch_count = request.batches.len();
    let response = perform_aggregation(request.batches);

    info!(
        correlation_id = %correlation_id,
        batches_submitted = batch_count,
        batches_processed = response.batches_processed,
        batches_skipped = response.skipped_batches.len(),
        employees = response.combined.len(),
        "Aggregation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Processes and folds every batch, skipping the ones that fail.
///
/// A batch missing a required key, or failing inside the calculator
/// (malformed timestamp, unknown job, negative punch duration), is skipped
/// with a warning and contributes nothing; the remaining batches still
/// process. Each batch is fully processed before it is folded, so the
/// combined result only ever reflects complete batches.
fn perform_aggregation(batches: Vec<BatchRequest>) -> AggregationResponse {
    let mut aggregator = Aggregator::new();
    let mut skipped_batches = Vec::new();
    let submitted = batches.len();

    for (index, batch_request) in batches.into_iter().enumerate() {
        let batch = match Batch::try_from(batch_request) {
            Ok(batch) => batch,
            Err(err) => {
                warn!(batch_index = index, error = %err, "Skipping batch");
                skipped_batches.push(SkippedBatch {
                    index,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match process_batch(&batch) {
            Ok(summaries) => aggregator.fold_batch(summaries),
            Err(err) => {
                warn!(batch_index = index, error = %err, "Skipping batch");
                skipped_batches.push(SkippedBatch {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    AggregationResponse {
        combined: aggregator.into_combined(),
        batches_processed: submitted - skipped_batches.len(),
        skipped_batches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn single_batch_request() -> serde_json::Value {
        json!({
            "batches": [
                {
                    "jobMeta": [
                        {"job": "Hand prep", "rate": 20.0, "benefitsRate": 2.0}
                    ],
                    "employeeData": [
                        {
                            "employee": "Mike",
                            "timePunch": [
                                {
                                    "job": "Hand prep",
                                    "start": "2022-02-18 00:00:00",
                                    "end": "2022-02-18 10:00:00"
                                }
                            ]
                        }
                    ]
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router();
        let body = single_batch_request().to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/aggregate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AggregationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.batches_processed, 1);
        assert!(result.skipped_batches.is_empty());
        assert_eq!(
            result.combined["Mike"].wage_total,
            Decimal::from_str("200").unwrap()
        );
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/aggregate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_batch_missing_job_meta_is_skipped() {
        let router = create_router();
        let body = json!({
            "batches": [
                {
                    "employeeData": [
                        {"employee": "Mike", "timePunch": []}
                    ]
                }
            ]
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/aggregate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        // The run still succeeds; the batch just contributes nothing.
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AggregationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.batches_processed, 0);
        assert!(result.combined.is_empty());
        assert_eq!(result.skipped_batches.len(), 1);
        assert_eq!(result.skipped_batches[0].index, 0);
        assert!(result.skipped_batches[0].reason.contains("jobMeta"));
    }

    #[test]
    fn test_unknown_job_skips_only_that_batch() {
        let good: BatchRequest = serde_json::from_value(json!({
            "jobMeta": [{"job": "Hand prep", "rate": 20.0, "benefitsRate": 2.0}],
            "employeeData": [
                {
                    "employee": "Mike",
                    "timePunch": [
                        {
                            "job": "Hand prep",
                            "start": "2022-02-18 00:00:00",
                            "end": "2022-02-18 08:00:00"
                        }
                    ]
                }
            ]
        }))
        .unwrap();
        let bad: BatchRequest = serde_json::from_value(json!({
            "jobMeta": [{"job": "Hand prep", "rate": 20.0, "benefitsRate": 2.0}],
            "employeeData": [
                {
                    "employee": "Steve",
                    "timePunch": [
                        {
                            "job": "Welding",
                            "start": "2022-02-18 00:00:00",
                            "end": "2022-02-18 08:00:00"
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        let response = perform_aggregation(vec![bad, good]);

        assert_eq!(response.batches_processed, 1);
        assert_eq!(response.skipped_batches.len(), 1);
        assert_eq!(response.skipped_batches[0].index, 0);
        assert!(response.skipped_batches[0].reason.contains("Welding"));
        assert_eq!(response.combined.len(), 1);
        assert!(response.combined.contains_key("Mike"));
    }

    #[test]
    fn test_same_employee_across_batches_merges() {
        let batch: BatchRequest = serde_json::from_value(json!({
            "jobMeta": [{"job": "Hand prep", "rate": 20.0, "benefitsRate": 2.0}],
            "employeeData": [
                {
                    "employee": "Mike",
                    "timePunch": [
                        {
                            "job": "Hand prep",
                            "start": "2022-02-18 00:00:00",
                            "end": "2022-02-18 10:00:00"
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        let response = perform_aggregation(vec![batch.clone(), batch]);

        assert_eq!(response.batches_processed, 2);
        let mike = &response.combined["Mike"];
        assert_eq!(mike.regular, Decimal::from_str("20").unwrap());
        assert_eq!(mike.wage_total, Decimal::from_str("400").unwrap());
        assert_eq!(mike.benefit_total, Decimal::from_str("40").unwrap());
    }
}
