use axum::Router;
use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};

use shopops::config::api::ApiConfig;
use shopops::modules::probe::model::{ProbeOutcome, ProbeSpec};
use shopops::modules::probe::scenarios;
use shopops::modules::probe::service::Prober;
use shopops::utils::errors::OpsError;

const TEST_TOKEN: &str = "token-abc-123";

// Scripted stand-in for the backend: a health endpoint, a login that issues
// a bearer token, a guarded endpoint, and a few misbehaving routes.
fn scripted_router() -> Router {
    Router::new()
        .route(
            "/actuator/health",
            get(|| async { Json(json!({"status": "UP"})) }),
        )
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/empty-login",
            post(|| async { Json(json!({"data": {}})) }),
        )
        .route(
            "/api/assignments/available-partners",
            get(available_partners),
        )
        .route("/api/plain", get(|| async { "not json" }))
        .route("/api/slow", get(slow))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("password").and_then(Value::as_str) == Some("Abc12345") {
        (StatusCode::OK, Json(json!({"data": {"token": TEST_TOKEN}})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "bad credentials"})),
        )
    }
}

async fn available_partners(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false);
    if authorized {
        (
            StatusCode::OK,
            Json(json!({"totalAvailable": 2, "partners": []})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "unauthorized"})),
        )
    }
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    Json(json!({"ok": true}))
}

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, scripted_router()).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config_for(root: &str) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", root),
        timeout_secs: 1,
    }
}

#[tokio::test]
async fn sequence_runs_in_order_and_survives_errors() {
    let root = spawn_server().await;
    let prober = Prober::new(config_for(&root)).unwrap();

    let sequence = vec![
        ProbeSpec::get("health", format!("{}/actuator/health", root)),
        ProbeSpec::get("partners without auth", "/assignments/available-partners"),
        ProbeSpec::get("health again", format!("{}/actuator/health", root)),
    ];
    let results = prober.run(&sequence).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name, "health");
    assert_eq!(results[1].name, "partners without auth");
    assert_eq!(results[2].name, "health again");

    match &results[0].outcome {
        ProbeOutcome::Success { status, body } => {
            assert_eq!(*status, 200);
            assert_eq!(body["status"], "UP");
        }
        other => panic!("expected success, got {:?}", other),
    }
    // The 401 is recorded, and the next request still ran.
    match &results[1].outcome {
        ProbeOutcome::HttpError { status, .. } => assert_eq!(*status, 401),
        other => panic!("expected http error, got {:?}", other),
    }
    assert!(results[2].outcome.is_success());
}

#[tokio::test]
async fn login_attaches_bearer_token_to_authenticated_probes() {
    let root = spawn_server().await;
    let mut prober = Prober::new(config_for(&root)).unwrap();

    prober
        .login(
            scenarios::ADMIN_LOGIN_PATH,
            scenarios::admin_login_body("admin@example.com", "Abc12345"),
            scenarios::TOKEN_FIELD,
        )
        .await
        .unwrap();
    assert!(prober.has_token());

    let results = prober
        .run(&[ProbeSpec::get("partners", "/assignments/available-partners").authenticated()])
        .await;
    match &results[0].outcome {
        ProbeOutcome::Success { status, body } => {
            assert_eq!(*status, 200);
            assert_eq!(body["totalAvailable"], 2);
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn rejected_login_is_an_http_error() {
    let root = spawn_server().await;
    let mut prober = Prober::new(config_for(&root)).unwrap();

    let err = prober
        .login(
            scenarios::ADMIN_LOGIN_PATH,
            scenarios::admin_login_body("admin@example.com", "WrongPass1"),
            scenarios::TOKEN_FIELD,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Http { status: 401, .. }), "got {:?}", err);
    assert!(!prober.has_token());
}

#[tokio::test]
async fn missing_token_field_skips_dependent_probes_only() {
    let root = spawn_server().await;
    let mut prober = Prober::new(config_for(&root)).unwrap();

    // 200 response, but no token at data.token: recoverable.
    let err = prober
        .login(
            "/auth/empty-login",
            scenarios::admin_login_body("admin@example.com", "Abc12345"),
            scenarios::TOKEN_FIELD,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Parse(_)), "got {:?}", err);

    let sequence = vec![
        ProbeSpec::get("partners", "/assignments/available-partners").authenticated(),
        ProbeSpec::get("health", format!("{}/actuator/health", root)),
    ];
    let results = prober.run(&sequence).await;

    assert!(matches!(results[0].outcome, ProbeOutcome::Skipped { .. }));
    // The independent probe still ran without auth headers.
    assert!(results[1].outcome.is_success());
}

#[tokio::test]
async fn non_json_success_body_is_a_parse_error() {
    let root = spawn_server().await;
    let prober = Prober::new(config_for(&root)).unwrap();

    let results = prober.run(&[ProbeSpec::get("plain body", "/plain")]).await;
    match &results[0].outcome {
        ProbeOutcome::ParseError { status, .. } => assert_eq!(*status, 200),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn timeout_fails_that_request_and_the_sequence_continues() {
    let root = spawn_server().await;
    let prober = Prober::new(config_for(&root)).unwrap();

    let sequence = vec![
        ProbeSpec::get("slow endpoint", "/slow"),
        ProbeSpec::get("health", format!("{}/actuator/health", root)),
    ];
    let results = prober.run(&sequence).await;

    assert!(matches!(
        results[0].outcome,
        ProbeOutcome::ConnectionError { .. }
    ));
    assert!(results[1].outcome.is_success());
}
