use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Form, Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use super::*;

#[derive(Clone)]
struct ServerState {
    form_tx: Arc<Mutex<Option<oneshot::Sender<HashMap<String, String>>>>>,
    cache_tx: Arc<Mutex<Option<oneshot::Sender<Option<String>>>>>,
}

async fn handle_generate(
    State(state): State<ServerState>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, &'static str) {
    if let Some(tx) = state.form_tx.lock().await.take() {
        let _ = tx.send(form);
    }
    (StatusCode::CREATED, r#"{"markdown":"ok"}"#)
}

async fn handle_examples(State(state): State<ServerState>, headers: HeaderMap) -> &'static str {
    let cache_control = headers
        .get("cache-control")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(tx) = state.cache_tx.lock().await.take() {
        let _ = tx.send(cache_control);
    }
    r#"{"examples":[]}"#
}

async fn spawn_server() -> (
    String,
    oneshot::Receiver<HashMap<String, String>>,
    oneshot::Receiver<Option<String>>,
) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (form_tx, form_rx) = oneshot::channel();
    let (cache_tx, cache_rx) = oneshot::channel();
    let state = ServerState {
        form_tx: Arc::new(Mutex::new(Some(form_tx))),
        cache_tx: Arc::new(Mutex::new(Some(cache_tx))),
    };
    let app = Router::new()
        .route("/generate", post(handle_generate))
        .route("/static/data/examples.json", get(handle_examples))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), form_rx, cache_rx)
}

fn settings_for(server_url: &str) -> ClientSettings {
    ClientSettings {
        server_url: server_url.to_string(),
        ..ClientSettings::default()
    }
}

#[test]
fn joins_paths_against_base_url() {
    let client = HttpReadingClient::new(&settings_for("http://readings.example:5000")).expect("client");
    assert_eq!(
        client.generate_url().as_str(),
        "http://readings.example:5000/generate"
    );
    assert_eq!(
        client.examples_url().as_str(),
        "http://readings.example:5000/static/data/examples.json"
    );
}

#[test]
fn rejects_unparseable_server_url() {
    let result = HttpReadingClient::new(&settings_for("not a url"));
    assert!(matches!(result, Err(TransportError::InvalidUrl { .. })));
}

#[test]
fn reply_success_covers_every_2xx_status() {
    assert!(HttpReply::new(200, "").is_success());
    assert!(HttpReply::new(299, "").is_success());
    assert!(!HttpReply::new(199, "").is_success());
    assert!(!HttpReply::new(400, "").is_success());
    assert!(!HttpReply::new(500, "").is_success());
}

#[tokio::test]
async fn generate_posts_form_encoded_fields() {
    let (server_url, form_rx, _cache_rx) = spawn_server().await;
    let client = HttpReadingClient::new(&settings_for(&server_url)).expect("client");
    let input: FormInputSet = [("hour", "12"), ("minute", "0"), ("location_name", "東京")]
        .into_iter()
        .collect();

    let reply = client.generate(&input).await.expect("generate");
    assert_eq!(reply.status, 201);
    assert!(reply.is_success());
    assert_eq!(reply.body, r#"{"markdown":"ok"}"#);

    let form = form_rx.await.expect("form received");
    assert_eq!(form.get("hour").map(String::as_str), Some("12"));
    assert_eq!(form.get("minute").map(String::as_str), Some("0"));
    assert_eq!(form.get("location_name").map(String::as_str), Some("東京"));
}

#[tokio::test]
async fn examples_request_bypasses_caches() {
    let (server_url, _form_rx, cache_rx) = spawn_server().await;
    let client = HttpReadingClient::new(&settings_for(&server_url)).expect("client");

    let reply = client.examples().await.expect("examples");
    assert_eq!(reply.status, 200);
    assert_eq!(cache_rx.await.expect("headers"), Some("no-cache".to_string()));
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = HttpReadingClient::new(&settings_for(&format!("http://{addr}"))).expect("client");
    let result = client.generate(&FormInputSet::new()).await;
    assert!(matches!(result, Err(TransportError::Request { .. })));
}
