use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ai_client::TextGenerator;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use backend_api::create_router;
use planner::PlanService;
use serde_json::{json, Value};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Fake generator
// ---------------------------------------------------------------------------

struct CannedGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl CannedGenerator {
    fn ok(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(anyhow::Error::msg)
    }
}

fn plan_json() -> Value {
    json!({
        "emergencyFundPlan": {
            "title": "Build Your Emergency Fund",
            "iconName": "shield.lefthalf.filled",
            "summary": "A cushion for General financial stability.",
            "steps": ["Save 9000.00 as your emergency fund target (3 months of expenses)."]
        },
        "budgetAllocationPlan": {
            "title": "Your 50/30/20 Budget",
            "iconName": "chart.pie.fill",
            "summary": "Split income three ways.",
            "allocations": [
                {"category": "Needs", "percentage": 0.5, "amount": 2500.0, "color": "#4A90E2"},
                {"category": "Wants", "percentage": 0.3, "amount": 1500.0, "color": "#F5A623"},
                {"category": "Savings", "percentage": 0.2, "amount": 1000.0, "color": "#7ED321"}
            ]
        },
        "longTermGoalSuggestion": {
            "title": "Long-term",
            "iconName": "flag.checkered",
            "summary": "A path towards financial independence.",
            "steps": ["Invest the savings slice."]
        }
    })
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

async fn send(generator: Arc<CannedGenerator>, request: Request<Body>) -> axum::response::Response {
    let app = create_router(Arc::new(PlanService::new(generator)));
    app.oneshot(request).await.unwrap()
}

fn post_plan(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_liveness() {
    for uri in ["/", "/health"] {
        let resp = send(
            CannedGenerator::ok(""),
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn test_generate_plan_success() {
    let generator = CannedGenerator::ok(format!(
        "Here is your plan:\n```json\n{}\n```\nHope this helps!",
        plan_json()
    ));

    let resp = send(
        generator.clone(),
        post_plan(r#"{"monthlyIncome": 5000, "monthlyExpenses": 3000}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, plan_json());
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_invalid_income_is_400_without_upstream_call() {
    let generator = CannedGenerator::ok(plan_json().to_string());

    let resp = send(
        generator.clone(),
        post_plan(r#"{"monthlyIncome": "abc", "monthlyExpenses": 3000}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["field"], "monthlyIncome");
    assert!(json["error"].as_str().unwrap().contains("monthlyIncome"));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_negative_expenses_is_400() {
    let generator = CannedGenerator::ok(plan_json().to_string());

    let resp = send(
        generator.clone(),
        post_plan(r#"{"monthlyIncome": 5000, "monthlyExpenses": -1}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["field"], "monthlyExpenses");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_income_too_large_for_figures_is_400() {
    let generator = CannedGenerator::ok(plan_json().to_string());

    let resp = send(
        generator.clone(),
        post_plan(r#"{"monthlyIncome": 1e307, "monthlyExpenses": 3000}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["field"], "monthlyIncome");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_unparseable_body_is_400() {
    let generator = CannedGenerator::ok(plan_json().to_string());

    let resp = send(generator.clone(), post_plan("{not json")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], "VALIDATION_ERROR");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let generator = CannedGenerator::failing("generateContent returned 503 Service Unavailable");

    let resp = send(
        generator.clone(),
        post_plan(r#"{"monthlyIncome": 5000, "monthlyExpenses": 3000}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["code"], "UPSTREAM_CALL_FAILED");
    assert!(json["details"].as_str().unwrap().contains("503"));
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_malformed_upstream_response_is_500() {
    let generator = CannedGenerator::ok("Here you go: {\"emergencyFundPlan\": {,}}");

    let resp = send(
        generator,
        post_plan(r#"{"monthlyIncome": 5000, "monthlyExpenses": 3000}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["code"], "MALFORMED_UPSTREAM_RESPONSE");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_cors_headers_present() {
    let resp = send(
        CannedGenerator::ok(""),
        Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://localhost:8081")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
