use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use physchat::AppState;
use physchat::backend::ChatBackend;
use physchat::config::{AppConfig, SiteConfig};
use physchat::error::{Error, Result};
use physchat::server::build_router;
use physchat::session::{Role, SessionStore, Turn};

/// Backend double that answers with a fixed markdown reply and records what
/// it was asked.
#[derive(Debug, Default)]
struct ScriptedBackend {
    fail: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<Vec<Turn>>>,
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, turns: &[Turn]) -> Result<Turn> {
        self.calls.lock().unwrap().push(turns.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(Error::Backend {
                status: 503,
                message: "index offline".into(),
            });
        }
        Ok(Turn::assistant("1. **Entropy** rises\n2. Energy is conserved"))
    }
}

fn setup(fail: bool) -> (TestServer, SessionStore, Arc<ScriptedBackend>) {
    setup_with(ScriptedBackend {
        fail,
        ..Default::default()
    })
}

fn setup_with(backend: ScriptedBackend) -> (TestServer, SessionStore, Arc<ScriptedBackend>) {
    let mut config = AppConfig::load_from_args(["physchat"]).expect("default config");
    config.server.request_timeout_secs = 1;
    let sessions = SessionStore::new();
    let backend = Arc::new(backend);
    let state = AppState {
        sessions: sessions.clone(),
        backend: backend.clone(),
        site: Arc::new(SiteConfig::default()),
    };
    let server = TestServer::new(build_router(state, &config.server)).expect("test server");
    (server, sessions, backend)
}

#[tokio::test]
async fn index_redirects_to_new_session() {
    let (server, sessions, _) = setup(false);

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);

    let location = response.header("location");
    let location = location.to_str().unwrap();
    let id = location.strip_prefix("/c/").expect("chat path");
    assert!(sessions.get(id).is_some());
}

#[tokio::test]
async fn new_session_page_lists_starters() {
    let (server, sessions, _) = setup(false);
    let session = sessions.create();

    let response = server.get(&format!("/c/{}", session.id())).await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Physics RAG App</title>"));
    assert_eq!(html.matches("data-starter").count(), 4);
    assert_eq!(html.matches(r#"data-attribution="service""#).count(), 3);
    assert_eq!(html.matches(r#"data-attribution="source""#).count(), 1);
}

#[tokio::test]
async fn unknown_session_page_is_404() {
    let (server, _, _) = setup(false);

    let response = server.get("/c/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}

#[tokio::test]
async fn chat_appends_user_and_assistant_turns() {
    let (server, sessions, backend) = setup(false);
    let session = sessions.create();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "  Why does entropy increase?  ")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"data-avatar="user""#));
    assert!(html.contains(r#"data-avatar="logo""#));
    assert!(html.contains("list-decimal"));
    assert!(html.contains("<strong>Entropy</strong>"));
    assert!(html.contains(r#"hx-swap-oob="delete""#));

    let turns = session.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0], Turn::user("Why does entropy increase?"));
    assert_eq!(turns[1].role, Role::Assistant);

    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![Turn::user("Why does entropy increase?")]);
}

#[tokio::test]
async fn second_exchange_sends_history_and_keeps_starters_gone() {
    let (server, sessions, backend) = setup(false);
    let session = sessions.create();

    for message in ["first", "second"] {
        server
            .post("/api/chat")
            .form(&[("session_id", session.id()), ("message", message)])
            .await
            .assert_status_ok();
    }

    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls[1].len(), 3);
    assert_eq!(calls[1][2], Turn::user("second"));
    drop(calls);

    let page = server.get(&format!("/c/{}", session.id())).await.text();
    assert!(!page.contains(r#"id="chat-empty""#));
    assert_eq!(page.matches("data-role=").count(), 4);
}

#[tokio::test]
async fn backend_failure_keeps_question_and_shows_notice() {
    let (server, sessions, _) = setup(true);
    let session = sessions.create();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "Is the index up?")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"role="alert""#));
    assert_eq!(html.matches("data-role=").count(), 1);
    assert_eq!(session.turns(), vec![Turn::user("Is the index up?")]);
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let (server, sessions, backend) = setup(false);
    let session = sessions.create();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "   ")])
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains(r#"role="alert""#));
    assert!(session.is_empty());
    assert!(backend.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn chat_for_unknown_session_is_404() {
    let (server, _, _) = setup(false);

    let response = server
        .post("/api/chat")
        .form(&[("session_id", "nope"), ("message", "hello")])
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let html = response.text();
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("Session not found"));
}

#[tokio::test]
async fn pages_configure_htmx_to_swap_errors() {
    let (server, sessions, _) = setup(false);
    let session = sessions.create();

    let html = server.get(&format!("/c/{}", session.id())).await.text();
    assert!(html.contains(r#"name="htmx-config""#));
    assert!(html.contains("[45].."));
}

#[tokio::test]
async fn viewing_a_session_refreshes_its_activity() {
    let (server, sessions, _) = setup(false);
    let session = sessions.create();
    let before = session.to_state().last_activity;

    tokio::time::sleep(Duration::from_millis(20)).await;
    server
        .get(&format!("/c/{}", session.id()))
        .await
        .assert_status_ok();

    assert_ne!(session.to_state().last_activity, before);
    assert_eq!(sessions.cleanup_expired_with_timeout(Duration::from_millis(15)), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_backend_times_out_with_notice() {
    let (server, sessions, _) = setup_with(ScriptedBackend {
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let session = sessions.create();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "Still there?")])
        .await;
    response.assert_status(StatusCode::REQUEST_TIMEOUT);
    assert!(response.text().contains(r#"role="alert""#));
}

#[tokio::test]
async fn session_json_endpoints() {
    let (server, sessions, _) = setup(false);
    let session = sessions.create();
    session.add_user_turn("hi");

    let turns: Vec<Turn> = server
        .get(&format!("/api/sessions/{}/messages", session.id()))
        .await
        .json();
    assert_eq!(turns, vec![Turn::user("hi")]);

    let state: serde_json::Value = server
        .get(&format!("/api/sessions/{}", session.id()))
        .await
        .json();
    assert_eq!(state["id"], session.id());
    assert_eq!(state["turns"][0]["role"], "user");

    server
        .delete(&format!("/api/sessions/{}", session.id()))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(sessions.get(session.id()).is_none());

    server
        .get(&format!("/api/sessions/{}/messages", session.id()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn starters_and_health() {
    let (server, _, _) = setup(false);

    let starters: Vec<serde_json::Value> = server.get("/api/starters").await.json();
    assert_eq!(starters.len(), 4);
    assert!(starters.iter().all(|s| s["content"].as_str().is_some_and(|c| !c.is_empty())));

    server.get("/healthz").await.assert_text("ok");
}
