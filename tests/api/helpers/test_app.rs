use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Response;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wordguess::config::Config;
use wordguess::remote::RemoteGuessClient;

static ENVIRONMENT: Lazy<()> = Lazy::new(|| std::env::set_var("ENVIRONMENT", "dev"));

pub struct TestApp {
    pub base_address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&ENVIRONMENT);

        // Binding to port 0 triggers an OS scan for an available port, this way we can run tests in parallel where each runs its own application
        let random_port_address = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(random_port_address)
            .await
            .expect("Failed to bind to bind random port.");
        let address = listener.local_addr().unwrap();
        let config = {
            let mut config = Config::get().expect("Failed to read configuration.");
            config.words.file = Some(PathBuf::from("tests/fixtures/words.txt"));
            config
        };

        let _ = tokio::spawn(wordguess::startup::create_web_server(config, listener));

        TestApp {
            base_address: format!("127.0.0.1:{}", address.port()),
            client: reqwest::Client::new(),
        }
    }

    pub fn remote_client(&self) -> RemoteGuessClient {
        RemoteGuessClient::with_base_url(
            &format!("http://{}", self.base_address),
            Duration::from_secs(2),
        )
        .expect("Failed to build the remote guess client.")
    }

    pub async fn start_round(
        &self,
        nickname: &str,
        category: &str,
        word_length: usize,
        mode: &str,
    ) -> Response {
        self.post(
            "round",
            json!({
                "wordLength": word_length,
                "category": category,
                "mode": mode,
                "nickname": nickname,
            }),
        )
        .await
    }

    pub async fn ask(&self, nickname: &str, question: &str) -> Response {
        self.post(
            "question",
            json!({ "nickname": nickname, "question": question }),
        )
        .await
    }

    pub async fn guess(&self, nickname: Option<&str>, guess: &str, word_length: usize) -> Response {
        self.post(
            "guess",
            json!({
                "guess": guess,
                "wordLength": word_length,
                "category": "general",
                "mode": "challenge",
                "nickname": nickname,
            }),
        )
        .await
    }

    pub async fn abandon_round(&self, nickname: &str) -> Response {
        self.client
            .delete(format!("http://{}/round/{nickname}", self.base_address))
            .send()
            .await
            .expect("Failed to execute DELETE /round.")
    }

    pub async fn post(&self, path: &str, body: Value) -> Response {
        self.client
            .post(format!("http://{}/{path}", self.base_address))
            .json(&body)
            .send()
            .await
            .unwrap_or_else(|error| panic!("Failed to execute POST /{path}. Error: '{error}'."))
    }
}
