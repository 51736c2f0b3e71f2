use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn round_can_be_started() {
    let app = TestApp::spawn_app().await;

    let response = app.start_round("p1", "animals", 5, "challenge").await;

    assert_eq!(response.status(), StatusCode::OK);
    let status: Value = response.json().await.unwrap();
    assert_eq!(
        status,
        json!({
            "wordLength": 5,
            "category": "animals",
            "mode": "challenge",
            "hintsRemaining": 5,
            "score": 0,
        })
    );
}

#[tokio::test]
async fn round_status_can_be_read_back() {
    let app = TestApp::spawn_app().await;
    app.start_round("p1", "general", 4, "fun").await;

    let response = app
        .client
        .get(format!("http://{}/round/p1", app.base_address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let status: Value = response.json().await.unwrap();
    assert_eq!(status["wordLength"], 4);
}

#[tokio::test]
async fn round_without_nickname_is_rejected() {
    let app = TestApp::spawn_app().await;

    let response = app
        .post(
            "round",
            json!({ "wordLength": 3, "category": "general", "mode": "fun" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "NICKNAME_REQUIRED");
}

#[tokio::test]
async fn round_with_unsupported_length_is_rejected() {
    let app = TestApp::spawn_app().await;

    let response = app.start_round("p1", "general", 12, "fun").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "UNSUPPORTED_WORD_LENGTH");
}

#[tokio::test]
async fn round_with_unknown_category_is_unprocessable() {
    let app = TestApp::spawn_app().await;

    let response = app.start_round("p1", "movies", 5, "fun").await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn questions_are_answered_until_the_hint_limit() {
    let app = TestApp::spawn_app().await;
    app.start_round("p1", "general", 5, "challenge").await;

    for asked in 1..=5_i64 {
        let response = app.ask("p1", "What letter does it end with?").await;
        assert_eq!(response.status(), StatusCode::OK);
        let answer: Value = response.json().await.unwrap();
        assert_eq!(answer["answer"], "The word ends with 'e'");
        assert_eq!(answer["hintsRemaining"], 5 - asked);
        assert_eq!(answer["score"], 10 * asked);
    }

    let response = app.ask("p1", "How long is it?").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "HINT_LIMIT_REACHED");
}

#[tokio::test]
async fn question_without_round_is_not_found() {
    let app = TestApp::spawn_app().await;

    let response = app.ask("ghost", "How long is it?").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "NO_ACTIVE_ROUND");
}

#[tokio::test]
async fn guess_reports_misses_and_hits() {
    let app = TestApp::spawn_app().await;

    let response = app.guess(Some("p1"), "bird", 4).await;
    assert_eq!(response.status(), StatusCode::OK);
    let verdict: Value = response.json().await.unwrap();
    assert_eq!(verdict, json!({ "isCorrect": false }));

    let response = app.guess(Some("p1"), "BOOK", 4).await;
    assert_eq!(response.status(), StatusCode::OK);
    let verdict: Value = response.json().await.unwrap();
    assert_eq!(verdict, json!({ "isCorrect": true }));
}

#[tokio::test]
async fn won_round_leaves_the_lobby() {
    let app = TestApp::spawn_app().await;
    app.start_round("p1", "general", 6, "challenge").await;

    app.guess(Some("p1"), "garden", 6).await;

    let response = app.ask("p1", "How long is it?").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn guess_without_nickname_keeps_the_response_shape() {
    let app = TestApp::spawn_app().await;

    let response = app.guess(None, "cat", 3).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let verdict: Value = response.json().await.unwrap();
    assert_eq!(
        verdict,
        json!({ "isCorrect": false, "error": "NICKNAME_REQUIRED" })
    );
}

#[tokio::test]
async fn abandoned_round_is_removed() {
    let app = TestApp::spawn_app().await;
    app.start_round("p1", "general", 4, "fun").await;

    let response = app.abandon_round("p1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.ask("p1", "How long is it?").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.abandon_round("p1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn question_without_nickname_is_rejected() {
    let app = TestApp::spawn_app().await;

    let response = app
        .post("question", json!({ "question": "How long is it?" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "NICKNAME_REQUIRED");
}
