//! In-process fake of the inspection backend.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{StatusCode, header::AUTHORIZATION};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

use inspecta_client::ApiClient;
use inspecta_shared::{AuthContext, BackendConfig};

pub const REFRESH_TOKEN: &str = "refresh-token-1";

/// 2100-01-01T00:00:00Z
const FAR_FUTURE: i64 = 4_102_444_800;

fn token_expiring_at(exp: i64) -> String {
    let claims = json!({"exp": exp, "user_id": 7, "token_type": "access"});
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"backend-signing-key"),
    )
    .unwrap()
}

/// The access token the fake backend issues on login.
pub fn access_token() -> String {
    token_expiring_at(FAR_FUTURE)
}

/// An access token that expired an hour ago.
pub fn expired_token() -> String {
    token_expiring_at((Utc::now() - Duration::hours(1)).timestamp())
}

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub uri: String,
    pub bearer: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    requests: Arc<Mutex<Vec<Seen>>>,
    bodies: Arc<Mutex<HashMap<String, Value>>>,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<Seen> {
        self.requests.lock().unwrap().clone()
    }

    pub fn saw(&self, path: &str) -> bool {
        self.requests().iter().any(|r| r.uri.starts_with(path))
    }

    pub fn body(&self, path: &str) -> Option<Value> {
        self.bodies.lock().unwrap().get(path).cloned()
    }

    fn keep(&self, path: &str, body: &Value) {
        self.bodies
            .lock()
            .unwrap()
            .insert(path.to_string(), body.clone());
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub auth: Arc<AuthContext>,
    pub backend: FakeBackend,
}

/// Starts a fake backend on a random port and a client pointed at it.
pub async fn spawn() -> Harness {
    let backend = FakeBackend::default();
    let app = router(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let auth = Arc::new(AuthContext::new());
    let config = BackendConfig {
        base_url: format!("http://{addr}/api/"),
        timeout_secs: 5,
    };
    let client = ApiClient::new(&config, Arc::clone(&auth)).unwrap();
    Harness {
        client,
        auth,
        backend,
    }
}

/// Starts a backend and signs in with `role` and `branch`.
pub async fn signed_in(role: &str, branch: Option<&str>) -> Harness {
    let harness = spawn().await;
    let role = role.parse().unwrap();
    let email = match branch {
        Some(_) => "rahim@example.org",
        None => "admin@example.org",
    };
    harness.client.login(email, "secret", role).await.unwrap();
    harness
}

pub fn record_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "inspector_name": "rahim",
        "inspector_id": 7,
        "branch_name": "Motijheel",
        "client_name": "Karim Textiles",
        "group_name": null,
        "cash_balance": "100",
        "land_building": null,
        "competitors": null,
        "checklist_items": {},
        "site_video": [],
        "location_points": [],
        "location_start_time": null,
        "location_end_time": null,
        "total_location_points": 0,
        "status": status,
        "created_at": "2026-03-01T09:00:00Z",
        "updated_at": "2026-03-01T09:00:00Z"
    })
}

fn assignment_json(id: i64, inspector: i64) -> Value {
    json!({
        "id": id,
        "project": "Spinning Mill Expansion",
        "client_name": "Karim Textiles",
        "industry_name": "Textiles",
        "phone_number": "01711000000",
        "assigned_inspector": inspector,
        "assigned_inspector_name": "rahim",
        "branch_name": "Motijheel",
        "status": "pending",
        "created_at": "2026-03-01T09:00:00Z",
        "updated_at": "2026-03-01T09:00:00Z"
    })
}

fn router(state: FakeBackend) -> Router {
    Router::new()
        .route("/api/token/", post(login))
        .route("/api/token/logout/", post(logout))
        .route("/api/current-user/", get(current_user))
        .route("/api/password_reset/", post(password_reset))
        .route("/api/inspections/", get(list_inspections).post(create_inspection))
        .route("/api/inspections/stats/", get(inspector_stats))
        .route("/api/inspections/assigned/", get(list_assignments))
        .route("/api/inspections/{id}/", get(get_inspection).put(update_inspection))
        .route("/api/inspections/{id}/update_status/", patch(update_status))
        .route("/api/branch/inspection-stats/", get(branch_stats))
        .route("/api/new-inspections/create/", post(create_assignment))
        .route("/api/new-inspections/list/", get(list_assignments))
        .route("/api/new-inspections/{id}/", put(update_assignment))
        .route("/api/branch-admin/list/", get(list_branch_admins))
        .route("/api/inspector/create/", post(create_user))
        .route("/api/user/update/{id}/", put(update_user))
        .route("/api/user/delete/{id}/", delete(delete_user))
        .layer(middleware::from_fn_with_state(state.clone(), remember))
        .with_state(state)
}

async fn remember(State(state): State<FakeBackend>, request: Request, next: Next) -> Response {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Seen {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        bearer,
    });
    next.run(request).await
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

async fn login(State(state): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    state.keep("/api/token/", &body);
    let (user_id, role, branch) = match (body["email"].as_str(), body["role"].as_str()) {
        (Some("rahim@example.org"), Some(role)) => (7, role.to_string(), json!("Motijheel")),
        (Some("admin@example.org"), Some(role)) => (1, role.to_string(), Value::Null),
        _ => {
            return error(
                StatusCode::UNAUTHORIZED,
                json!({"detail": "No active account found with the given credentials"}),
            );
        }
    };
    if body["password"] != "secret" {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "No active account found with the given credentials"}),
        );
    }
    Json(json!({
        "access": access_token(),
        "refresh": REFRESH_TOKEN,
        "user": {
            "id": user_id,
            "user_name": "rahim",
            "email": body["email"],
            "role": role,
            "branch_name": branch
        }
    }))
    .into_response()
}

async fn logout(State(state): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    state.keep("/api/token/logout/", &body);
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "token blacklist unavailable"}),
    )
}

async fn current_user(request: Request) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .is_some_and(|v| v == format!("Bearer {}", access_token()).as_str());
    if !authorized {
        return error(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Authentication credentials were not provided."}),
        );
    }
    Json(json!({
        "id": 7,
        "user_name": "rahim",
        "email": "rahim@example.org",
        "employee_id": "EMP-7",
        "branch_name": "Motijheel",
        "role": "inspector",
        "is_active": true
    }))
    .into_response()
}

async fn password_reset() -> Response {
    Json(json!({"detail": "If that email exists, a reset link was sent."})).into_response()
}

async fn list_inspections() -> Response {
    Json(json!({
        "count": 3,
        "next": "http://backend/api/inspections/?page=2",
        "previous": null,
        "results": [record_json(1, "Pending"), record_json(2, "Approved")]
    }))
    .into_response()
}

async fn get_inspection(Path(id): Path<i64>) -> Response {
    if id == 99 {
        return error(StatusCode::NOT_FOUND, json!({"detail": "Not found."}));
    }
    Json(record_json(id, "Pending")).into_response()
}

async fn create_inspection(State(state): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    state.keep("/api/inspections/", &body);
    let mut record = body;
    record["id"] = json!(42);
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update_inspection(
    State(state): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.keep("/api/inspections/{id}/", &body);
    let mut record = body;
    record["id"] = json!(id);
    Json(record).into_response()
}

async fn update_status(Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    match body["status"].as_str() {
        Some(status) => Json(record_json(id, status)).into_response(),
        None => error(StatusCode::BAD_REQUEST, json!({"error": "Status is required"})),
    }
}

async fn inspector_stats() -> Response {
    Json(json!({
        "total": 6,
        "pending": 2,
        "in_progress": 1,
        "completed": 1,
        "approved": 1,
        "rejected": 1
    }))
    .into_response()
}

async fn branch_stats(Query(query): Query<HashMap<String, String>>) -> Response {
    match query.get("branch_name").map(String::as_str) {
        Some("Motijheel") => {
            Json(json!({"all": 4, "pending": 2, "approved": 1, "rejected": 1})).into_response()
        }
        Some(_) => Json(json!({"all": 0, "pending": 0, "approved": 0, "rejected": 0})).into_response(),
        None => error(StatusCode::BAD_REQUEST, json!({"error": "Branch name is required"})),
    }
}

async fn create_assignment(State(state): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    state.keep("/api/new-inspections/create/", &body);
    let inspector = body["assigned_inspector"].as_i64().unwrap_or_default();
    (StatusCode::CREATED, Json(assignment_json(12, inspector))).into_response()
}

async fn list_assignments() -> Response {
    Json(json!([assignment_json(12, 7), assignment_json(13, 7)])).into_response()
}

async fn update_assignment(
    State(state): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.keep("/api/new-inspections/{id}/", &body);
    let mut assignment = assignment_json(id, body["assigned_inspector"].as_i64().unwrap_or_default());
    assignment["project"] = body["project"].clone();
    Json(assignment).into_response()
}

async fn list_branch_admins() -> Response {
    Json(json!([{
        "id": 3,
        "user_name": "karim",
        "email": "karim@example.org",
        "employee_id": "EMP-3",
        "branch_name": "Gulshan",
        "role": "branch_admin",
        "is_active": true
    }]))
    .into_response()
}

async fn update_user(
    State(state): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.keep("/api/user/update/{id}/", &body);
    if id == 404 {
        return error(StatusCode::NOT_FOUND, json!({"error": "User not found"}));
    }
    Json(json!({
        "id": id,
        "user_name": "nadia",
        "email": "nadia@example.org",
        "employee_id": "EMP-21",
        "branch_name": body.get("branch_name").cloned().unwrap_or(json!("Motijheel")),
        "role": "inspector",
        "is_active": body.get("is_active").cloned().unwrap_or(json!(true))
    }))
    .into_response()
}

async fn create_user(State(state): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    state.keep("/api/inspector/create/", &body);
    Json(json!({
        "id": 21,
        "user_name": body["user_name"],
        "email": body["email"],
        "employee_id": body["employee_id"],
        "branch_name": body["branch_name"],
        "role": body["role"],
        "is_active": true
    }))
    .into_response()
}

async fn delete_user(Path(id): Path<i64>) -> Response {
    if id == 404 {
        return error(StatusCode::NOT_FOUND, json!({"error": "User not found"}));
    }
    Json(json!({"message": "User deleted successfully"})).into_response()
}
