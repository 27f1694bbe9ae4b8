//! End-to-end login/reset flows against an in-process stub backend.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

use payflow_app::{AppState, Navigation, Route};
use payflow_auth::{Role, SessionStore};
use payflow_client::ApiError;

struct StubServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/reset-password", post(reset_password));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// Canned accounts keyed by username.
async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "wrong" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "bad_credentials",
                "message": "Invalid username or password",
            })),
        );
    }

    let (roles, first_time_login) = match body["username"].as_str() {
        Some("admin") => (vec!["ROLE_ADMIN"], false),
        Some("newbie") => (vec!["ROLE_ADMIN"], true),
        Some("maria") => (vec!["ROLE_MANAGER"], false),
        _ => (vec!["ROLE_EMPLOYEE"], false),
    };

    (
        StatusCode::OK,
        Json(json!({
            "token": "t1",
            "username": body["username"],
            "roles": roles,
            "firstTimeLogin": first_time_login,
        })),
    )
}

async fn reset_password(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["newPassword"].as_str().is_none_or(str::is_empty) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation_error",
                "message": "newPassword must not be blank",
            })),
        );
    }
    (StatusCode::OK, Json(json!({})))
}

fn fresh_state(base_url: &str) -> AppState {
    AppState::with_session(base_url, Arc::new(SessionStore::in_memory()))
}

#[tokio::test]
async fn employee_login_persists_the_session_and_lands_on_leave() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    let landing = state.login("jdoe", "secret", Role::Employee).await.unwrap();

    assert_eq!(landing, Route::EmployeeLeave);
    assert_eq!(landing.path(), "/employee/leave");

    let principal = state.restore().expect("session should be persisted");
    assert_eq!(principal.token, "t1");
    assert_eq!(principal.roles, vec![Role::Employee]);
}

#[tokio::test]
async fn admin_login_lands_on_the_admin_dashboard() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    let landing = state.login("admin", "secret", Role::Admin).await.unwrap();
    assert_eq!(landing, Route::AdminDashboard);

    assert_eq!(
        state.navigate("/admin/manage-users"),
        Navigation::Render(Route::ManageUsers)
    );
}

#[tokio::test]
async fn manager_login_lands_on_the_shared_dashboard() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    let landing = state.login("maria", "secret", Role::Manager).await.unwrap();
    assert_eq!(landing, Route::DashboardHome);
}

#[tokio::test]
async fn first_time_login_is_forced_into_the_reset_flow() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    let landing = state.login("newbie", "secret", Role::Admin).await.unwrap();
    assert_eq!(landing, Route::ResetPassword);

    // The same session cannot sidestep the reset by navigating directly.
    assert_eq!(
        state.navigate("/admin/dashboard"),
        Navigation::Redirect(Route::ResetPassword)
    );
}

#[tokio::test]
async fn password_reset_forces_a_fresh_login() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    state.login("newbie", "secret", Role::Admin).await.unwrap();
    let landing = state.reset_password("s3cure-enough").await.unwrap();

    assert_eq!(landing, Route::Login);
    assert_eq!(state.restore(), None);
    assert_eq!(
        state.navigate("/admin/dashboard"),
        Navigation::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn rejected_reset_keeps_the_session() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    state.login("newbie", "secret", Role::Admin).await.unwrap();
    let err = state.reset_password("").await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(state.restore().is_some());
}

#[tokio::test]
async fn failed_login_leaves_no_session_behind() {
    let srv = StubServer::spawn().await;
    let state = fresh_state(&srv.base_url);

    let err = state.login("jdoe", "wrong", Role::Employee).await.unwrap_err();

    let ApiError::Server { status, message } = err else {
        panic!("expected server error, got {err:?}");
    };
    assert_eq!(status, 401);
    assert_eq!(message, "Invalid username or password");
    assert_eq!(state.restore(), None);
}
