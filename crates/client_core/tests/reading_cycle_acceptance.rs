use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use client_core::{
    fetch_examples, ClientSettings, ExamplesContent, ExamplesPanel, FormController, FormProfile,
    FormSnapshot, HttpReadingClient, SubmitError, UiText,
};
use serde_json::{json, Value};
use shared::protocol::EXAMPLES_PATH;
use tokio::{net::TcpListener, sync::Mutex};

type Received = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn generate(
    State(received): State<Received>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    received.lock().await.push(form.clone());
    match form.get("location_name").map(String::as_str) {
        Some("Atlantis") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Could not find location: Atlantis" })),
        ),
        Some("Nowhere") => (
            StatusCode::OK,
            Json(json!({ "error": "chart calculation failed" })),
        ),
        _ => {
            let hour = form.get("hour").cloned().unwrap_or_default();
            let minute = form.get("minute").cloned().unwrap_or_default();
            (
                StatusCode::OK,
                Json(json!({ "markdown": format!("# Chart\nBorn at {hour}:{minute}") })),
            )
        }
    }
}

async fn examples() -> Json<Value> {
    Json(json!({
        "examples": [
            { "user_message": "仕事運は？", "ai_response": "良好です。", "model": "reader-1" }
        ]
    }))
}

async fn spawn_reading_server() -> (ClientSettings, Received) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/generate", post(generate))
        .route(EXAMPLES_PATH, get(examples))
        .with_state(received.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let settings = ClientSettings {
        server_url: format!("http://{addr}"),
        ..ClientSettings::default()
    };
    (settings, received)
}

fn birth_form(location: &str, hour: &str, minute: &str) -> FormSnapshot {
    FormSnapshot::new()
        .with_value("name", "Aiko")
        .with_value("year", "1990")
        .with_value("month", "4")
        .with_value("day", "12")
        .with_value("hour", hour)
        .with_value("minute", minute)
        .with_value("location_name", location)
}

#[tokio::test]
async fn unknown_time_round_trip_renders_reading() {
    let (settings, received) = spawn_reading_server().await;
    let client = HttpReadingClient::new(&settings).expect("client");
    let mut controller = FormController::bind_page(FormProfile::horoscope(), UiText::default());

    let outcome = controller
        .submit(&client, &birth_form("Tokyo", "", ""))
        .await;
    assert_eq!(outcome, Ok("# Chart\nBorn at 12:0".to_string()));

    let forms = received.lock().await;
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].get("hour").map(String::as_str), Some("12"));
    assert_eq!(forms[0].get("minute").map(String::as_str), Some("0"));

    let elements = controller.elements();
    assert_eq!(
        elements.result.as_ref().and_then(|result| result.preformatted_text()),
        Some("# Chart\nBorn at 12:0")
    );
    assert!(!elements.copy_button.as_ref().expect("copy").is_hidden());
    assert!(!elements.trigger.as_ref().expect("trigger").is_disabled());
}

#[tokio::test]
async fn synastry_submits_both_charts_and_flags() {
    let (settings, received) = spawn_reading_server().await;
    let client = HttpReadingClient::new(&settings).expect("client");
    let mut controller = FormController::bind_page(FormProfile::synastry(), UiText::default());

    let form = birth_form("Tokyo", "9", "30")
        .with_value("hour2", "")
        .with_value("minute2", "")
        .with_value("location_name2", "Osaka")
        .with_checked("time_unknown2")
        .with_checked("Quincunx");
    controller.submit(&client, &form).await.expect("reading");

    let forms = received.lock().await;
    let sent = &forms[0];
    assert_eq!(sent.get("hour").map(String::as_str), Some("9"));
    assert_eq!(sent.get("minute").map(String::as_str), Some("30"));
    assert_eq!(sent.get("hour2").map(String::as_str), Some("12"));
    assert_eq!(sent.get("minute2").map(String::as_str), Some("0"));
    assert_eq!(sent.get("time_unknown2").map(String::as_str), Some("true"));
    assert_eq!(sent.get("time_unknown"), None);
    assert_eq!(sent.get("Quincunx").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn server_rejection_is_shown_and_form_stays_usable() {
    let (settings, _received) = spawn_reading_server().await;
    let client = HttpReadingClient::new(&settings).expect("client");
    let mut controller = FormController::bind_page(FormProfile::horoscope(), UiText::default());

    let outcome = controller
        .submit(&client, &birth_form("Atlantis", "", ""))
        .await;
    assert_eq!(
        outcome,
        Err(SubmitError::Http {
            status: 400,
            message: Some("Could not find location: Atlantis".to_string()),
        })
    );
    let error_text = controller
        .elements()
        .error_box
        .as_ref()
        .map(|error_box| error_box.text().to_string())
        .unwrap_or_default();
    assert!(error_text.contains("Could not find location: Atlantis"));

    let outcome = controller
        .submit(&client, &birth_form("Nowhere", "", ""))
        .await;
    assert_eq!(
        outcome,
        Err(SubmitError::Application("chart calculation failed".to_string()))
    );

    controller
        .submit(&client, &birth_form("Tokyo", "6", "5"))
        .await
        .expect("retry succeeds");
    let elements = controller.elements();
    assert_eq!(elements.error_box.as_ref().map(|error_box| error_box.text()), Some(""));
    assert!(!elements.download_button.as_ref().expect("download").is_hidden());
}

#[tokio::test]
async fn examples_panel_loads_from_static_asset() {
    let (settings, _received) = spawn_reading_server().await;
    let client = HttpReadingClient::new(&settings).expect("client");
    let text = UiText::default();
    let mut panel = ExamplesPanel::new(&text);

    panel.apply(fetch_examples(&client).await, &text);

    assert_eq!(panel.badge(), "Model: reader-1");
    let ExamplesContent::Cards(cards) = panel.content() else {
        panic!("expected cards, got {:?}", panel.content());
    };
    assert_eq!(cards[0].user_message, "仕事運は？");
    assert_eq!(cards[0].body, "良好です。");
}
