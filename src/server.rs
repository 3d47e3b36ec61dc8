use axum::{
    Form, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    routing::post,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info, warn};

use crate::AppState;
use crate::backend::HttpChatBackend;
use crate::config::{AppConfig, ServerConfig};
use crate::content::{STARTER_QUESTIONS, StarterQuestion};
use crate::error::{Error, Result};
use crate::session::{SessionState, SessionStore, Turn};
use crate::ui::chat::{
    render_chat_page, render_chat_reply, render_error_notice, render_not_found_page,
};

/// Shown in the thread when the backend could not produce an answer.
const BACKEND_UNAVAILABLE: &str =
    "The answer service is unavailable right now. Your question was kept; please try again.";

/// Shown when a request outlives the server's request timeout.
const REQUEST_TIMED_OUT: &str = "The request took too long. Please try again.";

/// Upper bound on how often expired sessions are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let backend = HttpChatBackend::new(
        &config.backend.url,
        Duration::from_secs(config.backend.timeout_secs),
    )?;

    info!(
        name: "backend.config.loaded",
        url = %backend.endpoint(),
        timeout_secs = config.backend.timeout_secs,
        "Chat backend configured"
    );

    let sessions = SessionStore::new();
    spawn_session_sweeper(
        sessions.clone(),
        Duration::from_secs(config.server.session_ttl_secs),
    );

    let state = AppState {
        sessions,
        backend: Arc::new(backend),
        site: Arc::new(config.site.clone()),
    };

    let app = build_router(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let timeout = Duration::from_secs(server.request_timeout_secs);

    Router::new()
        .route("/", get(index_handler))
        .route("/c/{id}", get(chat_page_handler))
        .route("/api/chat", post(api_chat))
        .route("/api/starters", get(api_starters))
        .route(
            "/api/sessions/{id}",
            get(api_get_session).delete(api_delete_session),
        )
        .route("/api/sessions/{id}/messages", get(api_get_messages))
        .route("/healthz", get(|| async { "ok" }))
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (
                        StatusCode::REQUEST_TIMEOUT,
                        Html(render_error_notice(REQUEST_TIMED_OUT.to_string())),
                    )
                        .into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drop sessions idle for longer than `ttl`.
fn spawn_session_sweeper(sessions: SessionStore, ttl: Duration) -> tokio::task::JoinHandle<()> {
    let period = SWEEP_INTERVAL.min(ttl).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let removed = sessions.cleanup_expired_with_timeout(ttl);
            if removed > 0 {
                debug!(name: "session.expired", removed, remaining = sessions.len());
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(name: "server.signal.failed", error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(name: "server.shutdown", "Shutdown signal received");
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Start a new conversation.
async fn index_handler(State(state): State<AppState>) -> Redirect {
    let session = state.sessions.create();
    info!(name: "session.created", session_id = %session.id());
    Redirect::to(&format!("/c/{}", session.id()))
}

/// GET /c/:id - Render a conversation.
async fn chat_page_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.sessions.get(&id) {
        Some(session) => {
            session.touch();
            Html(render_chat_page(&state.site, session.id(), session.turns())).into_response()
        }
        None => (StatusCode::NOT_FOUND, Html(render_not_found_page(&state.site))).into_response(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body for the chat API.
#[derive(Debug, Deserialize)]
struct ChatForm {
    session_id: String,
    message: String,
}

/// POST /api/chat - Ask a question, returns the new turns as an HTML fragment.
///
/// A backend failure still answers 200 so HTMX swaps in the user's turn and
/// the error notice.
async fn api_chat(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>> {
    let session = state
        .sessions
        .get(&form.session_id)
        .ok_or(Error::SessionNotFound(form.session_id))?;

    let message = form.message.trim();
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let question = Turn::user(message);
    let history = session.push_turn(question.clone());
    let first_exchange = history.len() == 1;

    info!(
        name: "chat.turn.received",
        session_id = %session.id(),
        turns = history.len(),
        "Received chat message"
    );

    match state.backend.complete(&history).await {
        Ok(answer) => {
            session.add_turn(answer.clone());
            info!(
                name: "chat.turn.completed",
                session_id = %session.id(),
                answer_len = answer.content.len(),
                "Assistant turn added"
            );
            Ok(Html(render_chat_reply(
                vec![question, answer],
                first_exchange,
                None,
            )))
        }
        Err(err) => {
            warn!(
                name: "backend.request.failed",
                session_id = %session.id(),
                error = %err,
                "Chat backend request failed"
            );
            Ok(Html(render_chat_reply(
                vec![question],
                first_exchange,
                Some(BACKEND_UNAVAILABLE.to_string()),
            )))
        }
    }
}

/// GET /api/starters - Starter questions.
async fn api_starters() -> Json<&'static [StarterQuestion]> {
    Json(STARTER_QUESTIONS.as_slice())
}

/// GET /api/sessions/:id - Session snapshot.
async fn api_get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionState>> {
    state
        .sessions
        .get(&id)
        .map(|session| Json(session.to_state()))
        .ok_or(Error::SessionNotFound(id))
}

/// DELETE /api/sessions/:id - Drop a session.
async fn api_delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .sessions
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(Error::SessionNotFound(id))
}

/// GET /api/sessions/:id/messages - Session turns.
async fn api_get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Turn>>> {
    state
        .sessions
        .get(&id)
        .map(|session| Json(session.turns()))
        .ok_or(Error::SessionNotFound(id))
}
