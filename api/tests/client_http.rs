//! Exercises `ApiClient` against an in-process axum server standing in for
//! the backend.

use std::collections::HashMap;

use api::{ApiClient, ApiConfig, ApiError, DateRange, SurveyBackend, SurveyRecord};
use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use time::macros::date;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind random port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn client_for(origin: &str) -> ApiClient {
    ApiClient::new(ApiConfig::with_origins(origin, origin))
}

fn record() -> SurveyRecord {
    SurveyRecord {
        full_name: "Lan".into(),
        anonymous: None,
        class_name: "11B2".into(),
        gender: "Nữ".into(),
        q1: 5,
        q2: 4,
        q3: 1,
        q4: 2,
        q5: 3,
        q6: 3,
        q7: 4,
        q8: 2,
        open_ended: "Hôm nay vui".into(),
    }
}

#[tokio::test]
async fn submit_returns_feedback_text() {
    let router = Router::new().route(
        "/submit-survey",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["className"], json!("11B2"));
            assert_eq!(body["q1"], json!(5));
            Json(json!({ "feedback": "Great job!" }))
        }),
    );
    let origin = spawn_backend(router).await;

    let feedback = client_for(&origin).submit_survey(&record()).await.unwrap();
    assert_eq!(feedback.feedback, "Great job!");
}

#[tokio::test]
async fn submit_rejection_carries_detail() {
    let router = Router::new().route(
        "/submit-survey",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Invalid data" })),
            )
                .into_response()
        }),
    );
    let origin = spawn_backend(router).await;

    let err = client_for(&origin).submit_survey(&record()).await.unwrap_err();
    match err {
        ApiError::Server { status, ref detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some("Invalid data"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn submit_rejection_without_json_has_no_detail() {
    let router = Router::new().route(
        "/submit-survey",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    );
    let origin = spawn_backend(router).await;

    let err = client_for(&origin).submit_survey(&record()).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500, detail: None }));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn dashboard_request_encodes_iso_dates() {
    let router = Router::new().route(
        "/dashboard-data",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json(json!([{
                "date": params.get("start_date").cloned().unwrap_or_default(),
                "positive_avg": 3.5,
                "negative_avg": 2.0,
                "social_avg": 4.0,
                "self_esteem_avg": 3.25
            }, {
                "date": params.get("end_date").cloned().unwrap_or_default(),
                "positive_avg": 4.0,
                "negative_avg": 1.5,
                "social_avg": 3.0,
                "self_esteem_avg": 3.0
            }]))
        }),
    );
    let origin = spawn_backend(router).await;

    let range = DateRange::trailing(date!(2025 - 01 - 03), 7);
    let points = client_for(&origin).dashboard_data(&range).await.unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, "2024-12-27");
    assert_eq!(points[1].date, "2025-01-03");
    assert_eq!(points[0].self_esteem_avg, 3.25);
}

#[tokio::test]
async fn dashboard_garbage_body_is_a_decode_error() {
    let router = Router::new().route("/dashboard-data", get(|| async { "not json" }));
    let origin = spawn_backend(router).await;

    let range = DateRange::trailing(date!(2025 - 01 - 03), 30);
    let err = client_for(&origin).dashboard_data(&range).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
