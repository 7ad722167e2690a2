use crate::infra::{AppState, SharedAuthenticator, SharedChecklist, SharedHousingService};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use flatfly::assistant;
use flatfly::auth::{Authenticator, User};
use flatfly::housing::housing_router;
use flatfly::onboarding::{ChecklistItem, ChecklistProgress, OnboardingError, TaskStatus};

/// Full route table: housing endpoints plus onboarding, assistant,
/// auth, and the operational trio.
pub(crate) fn with_service_routes(
    housing: SharedHousingService,
    auth: SharedAuthenticator,
    checklist: SharedChecklist,
) -> Router {
    housing_router(housing)
        .merge(onboarding_router(checklist))
        .merge(assistant_router())
        .merge(auth_router(auth))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) fn onboarding_router(checklist: SharedChecklist) -> Router {
    Router::new()
        .route("/api/v1/onboarding/checklist", post(checklist_endpoint))
        .route(
            "/api/v1/onboarding/checklist/:task_id/status",
            post(checklist_status_endpoint),
        )
        .with_state(checklist)
}

pub(crate) fn assistant_router() -> Router {
    Router::new().route("/api/v1/assistant/reply", post(assistant_endpoint))
}

pub(crate) fn auth_router(auth: SharedAuthenticator) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login_endpoint))
        .route("/api/v1/auth/logout", post(logout_endpoint))
        .route("/api/v1/auth/session", get(session_endpoint))
        .with_state(auth)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChecklistRequest {
    /// Restrict the listing to one status; omit for the full checklist.
    #[serde(default)]
    pub(crate) status: Option<TaskStatus>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistResponse {
    pub(crate) items: Vec<ChecklistItem>,
    pub(crate) progress: ChecklistProgress,
}

pub(crate) async fn checklist_endpoint(
    State(checklist): State<SharedChecklist>,
    Json(request): Json<ChecklistRequest>,
) -> Json<ChecklistResponse> {
    let checklist = checklist.lock().expect("checklist mutex poisoned");
    let items = match request.status {
        Some(status) => checklist.with_status(status).into_iter().cloned().collect(),
        None => checklist.items().to_vec(),
    };

    Json(ChecklistResponse {
        items,
        progress: checklist.progress(),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChecklistStatusRequest {
    pub(crate) status: TaskStatus,
}

pub(crate) async fn checklist_status_endpoint(
    State(checklist): State<SharedChecklist>,
    Path(task_id): Path<String>,
    Json(request): Json<ChecklistStatusRequest>,
) -> impl IntoResponse {
    let mut checklist = checklist.lock().expect("checklist mutex poisoned");
    match checklist.set_status(&task_id, request.status) {
        Ok(()) => (StatusCode::OK, Json(json!({ "progress": checklist.progress() }))),
        Err(OnboardingError::TaskNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("task with id {id} not found") })),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantRequest {
    pub(crate) message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssistantResponse {
    pub(crate) topic: Option<&'static str>,
    pub(crate) reply: &'static str,
}

pub(crate) async fn assistant_endpoint(
    Json(request): Json<AssistantRequest>,
) -> Json<AssistantResponse> {
    let topic = assistant::classify(&request.message);
    Json(AssistantResponse {
        topic: topic.map(|t| t.label()),
        reply: assistant::reply(&request.message),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionView {
    pub(crate) logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) user: Option<UserView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserView {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) avatar: String,
    pub(crate) member_since: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            member_since: user.member_since_label(),
        }
    }
}

pub(crate) async fn login_endpoint(
    State(auth): State<SharedAuthenticator>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let mut auth = auth.lock().expect("auth mutex poisoned");
    match auth.login(&request.email, &request.password) {
        Ok(user) => (
            StatusCode::OK,
            Json(json!({ "user": UserView::from(&user) })),
        ),
        Err(error) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": error.to_string() })),
        ),
    }
}

pub(crate) async fn logout_endpoint(State(auth): State<SharedAuthenticator>) -> impl IntoResponse {
    let mut auth = auth.lock().expect("auth mutex poisoned");
    auth.logout();
    (StatusCode::OK, Json(json!({ "status": "signed_out" })))
}

pub(crate) async fn session_endpoint(State(auth): State<SharedAuthenticator>) -> Json<SessionView> {
    let auth = auth.lock().expect("auth mutex poisoned");
    Json(SessionView {
        logged_in: auth.is_logged_in(),
        user: auth.current_user().map(UserView::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatfly::auth::StubAuthenticator;
    use flatfly::onboarding::Checklist;
    use std::sync::{Arc, Mutex};

    fn checklist_state() -> SharedChecklist {
        Arc::new(Mutex::new(Checklist::relocation_default()))
    }

    fn auth_state() -> SharedAuthenticator {
        Arc::new(Mutex::new(StubAuthenticator::new()))
    }

    #[tokio::test]
    async fn checklist_endpoint_returns_items_and_progress() {
        let Json(body) =
            checklist_endpoint(State(checklist_state()), Json(ChecklistRequest::default())).await;
        assert_eq!(body.items.len(), 11);
        assert_eq!(body.progress.completed, 5);
        assert_eq!(body.progress.percent_complete, 45);
    }

    #[tokio::test]
    async fn checklist_endpoint_filters_by_status() {
        let request = ChecklistRequest {
            status: Some(TaskStatus::NotStarted),
        };
        let Json(body) = checklist_endpoint(State(checklist_state()), Json(request)).await;
        assert_eq!(body.items.len(), 3);
        assert!(body
            .items
            .iter()
            .all(|item| item.status == TaskStatus::NotStarted));
    }

    #[tokio::test]
    async fn assistant_endpoint_classifies_and_replies() {
        let request = AssistantRequest {
            message: "any apartment tips?".to_string(),
        };
        let Json(body) = assistant_endpoint(Json(request)).await;
        assert_eq!(body.topic, Some("Housing"));
        assert!(body.reply.contains("Use filters"));
    }

    #[tokio::test]
    async fn assistant_endpoint_falls_back_for_unknown_topics() {
        let request = AssistantRequest {
            message: "!!!".to_string(),
        };
        let Json(body) = assistant_endpoint(Json(request)).await;
        assert_eq!(body.topic, None);
        assert_eq!(body.reply, assistant::FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn session_endpoint_reflects_login_state() {
        let auth = auth_state();

        let Json(before) = session_endpoint(State(auth.clone())).await;
        assert!(!before.logged_in);
        assert!(before.user.is_none());

        let request = LoginRequest {
            email: "me@example.com".to_string(),
            password: "pw".to_string(),
        };
        login_endpoint(State(auth.clone()), Json(request)).await;

        let Json(after) = session_endpoint(State(auth)).await;
        assert!(after.logged_in);
        assert_eq!(after.user.expect("user present").name, "John Doe");
    }
}
