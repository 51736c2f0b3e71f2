use std::time::Duration;

use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use wordguess::error::domain_error::DomainError;
use wordguess::remote::RemoteGuessClient;
use wordguess::round::{Mode, Notice, Round, RoundSetup};
use wordguess::word::{Category, WordTable};

use crate::helpers::TestApp;

fn setup(nickname: Option<&str>) -> RoundSetup {
    RoundSetup {
        word_length: 3,
        category: Category::General,
        mode: Mode::Challenge,
        nickname: nickname.map(Into::into),
    }
}

// The test server only knows "cat" for this setup
fn local_words() -> WordTable {
    WordTable::parse("general: dog")
}

fn unreachable_client() -> RemoteGuessClient {
    RemoteGuessClient::with_base_url("http://127.0.0.1:1", Duration::from_millis(500))
        .expect("Failed to build the remote guess client.")
}

/// Game service that accepts any round and answers every guess with a miss and a clue.
async fn spawn_clue_service() -> RemoteGuessClient {
    let router = Router::new()
        .route(
            "/round",
            post(|| async {
                Json(json!({
                    "wordLength": 3,
                    "category": "general",
                    "mode": "challenge",
                    "hintsRemaining": 5,
                    "score": 0,
                }))
            }),
        )
        .route(
            "/guess",
            post(|| async { Json(json!({ "isCorrect": false, "hint": "It purrs" })) }),
        );
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to bind random port.");
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });

    RemoteGuessClient::with_base_url(&format!("http://{address}"), Duration::from_secs(2))
        .expect("Failed to build the remote guess client.")
}

#[tokio::test]
async fn online_hints_describe_the_word_that_wins() {
    let app = TestApp::spawn_app().await;
    let client = app.remote_client();

    let (mut round, notice) = Round::start_online(setup(Some("p1")), &local_words(), &client)
        .await
        .unwrap();
    assert!(notice.is_none());
    assert!(round.is_using_remote());

    let attempt = round
        .ask_online("What letter does it start with?", &client)
        .await;
    assert!(attempt.notice.is_none());
    assert_eq!(attempt.outcome.unwrap().answer(), "The word starts with 'c'");

    let attempt = round.guess_online("dog", &client).await;
    assert!(attempt.notice.is_none());
    assert_eq!(
        attempt.outcome.unwrap_err().as_domain(),
        Some(&DomainError::IncorrectGuess)
    );

    let attempt = round.guess_online("cat", &client).await;
    assert!(attempt.notice.is_none());
    let result = attempt.outcome.unwrap();
    assert_eq!(result.word, "cat");
    assert_eq!(result.score, 20);
    assert_eq!(result.questions_count, 1);
    assert!(round.is_using_remote());
}

#[tokio::test]
async fn unreachable_server_starts_the_round_offline() {
    let client = unreachable_client();

    let (mut round, notice) = Round::start_online(setup(Some("p1")), &local_words(), &client)
        .await
        .unwrap();
    assert!(matches!(notice, Some(Notice::RemoteUnavailable(_))));
    assert!(!round.is_using_remote());

    let attempt = round.guess_online("dog", &client).await;
    assert!(attempt.notice.is_none());
    assert_eq!(attempt.outcome.unwrap().word, "dog");
}

#[tokio::test]
async fn rejected_start_plays_the_local_word() {
    let app = TestApp::spawn_app().await;
    let client = app.remote_client();

    let (mut round, notice) = Round::start_online(setup(None), &local_words(), &client)
        .await
        .unwrap();
    assert!(matches!(notice, Some(Notice::RemoteUnavailable(_))));
    assert!(!round.is_using_remote());

    let attempt = round.ask_online("How long is it?", &client).await;
    assert!(attempt.notice.is_none());
    assert_eq!(attempt.outcome.unwrap().answer(), "The word is 3 letters long");

    let result = round.guess_online("dog", &client).await.outcome.unwrap();
    assert_eq!(result.word, "dog");
    assert_eq!(result.score, 10);
}

#[tokio::test]
async fn lost_server_round_falls_back_on_the_next_question() {
    let app = TestApp::spawn_app().await;
    let client = app.remote_client();
    let (mut round, _) = Round::start_online(setup(Some("p1")), &local_words(), &client)
        .await
        .unwrap();
    app.abandon_round("p1").await;

    let attempt = round
        .ask_online("What letter does it start with?", &client)
        .await;

    assert!(matches!(attempt.notice, Some(Notice::RemoteUnavailable(_))));
    assert_eq!(attempt.outcome.unwrap().answer(), "The word starts with 'd'");
    assert!(!round.is_using_remote());
    assert_eq!(round.hints().len(), 1);
}

#[tokio::test]
async fn failed_guess_request_is_checked_locally() {
    let app = TestApp::spawn_app().await;
    let (mut round, _) =
        Round::start_online(setup(Some("p1")), &local_words(), &app.remote_client())
            .await
            .unwrap();

    let attempt = round.guess_online("dog", &unreachable_client()).await;

    assert!(matches!(attempt.notice, Some(Notice::RemoteUnavailable(_))));
    assert_eq!(attempt.outcome.unwrap().word, "dog");
    assert!(!round.is_using_remote());
}

#[tokio::test]
async fn offline_round_never_calls_the_server() {
    let mut round = Round::start(setup(Some("p1")), &local_words()).unwrap();

    let attempt = round.guess_online("dog", &unreachable_client()).await;

    assert!(attempt.notice.is_none());
    assert!(attempt.outcome.is_ok());
}

#[tokio::test]
async fn empty_guess_is_rejected_before_any_request() {
    let app = TestApp::spawn_app().await;
    let (mut round, _) =
        Round::start_online(setup(Some("p1")), &local_words(), &app.remote_client())
            .await
            .unwrap();

    let attempt = round.guess_online("  ", &unreachable_client()).await;

    assert!(attempt.notice.is_none());
    assert_eq!(
        attempt.outcome.unwrap_err().as_domain(),
        Some(&DomainError::EmptyGuess)
    );
    assert!(round.is_using_remote());
}

#[tokio::test]
async fn clue_from_the_service_reaches_the_player() {
    let client = spawn_clue_service().await;
    let (mut round, _) = Round::start_online(setup(Some("p1")), &local_words(), &client)
        .await
        .unwrap();

    let attempt = round.guess_online("dog", &client).await;

    assert!(attempt.notice.is_none());
    assert_eq!(attempt.hint.as_deref(), Some("It purrs"));
    assert!(attempt.outcome.is_err());
    assert_eq!(round.score(), 10);
}
