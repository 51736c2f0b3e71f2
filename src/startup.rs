use crate::config::Config;
use crate::error::Error;
use crate::lobby::actor::LobbyActor;
use crate::metrics::register_metrics;
use crate::routes;
use crate::word::WordTable;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn load_words(config: &Config) -> Result<WordTable, Error> {
    match &config.words.file {
        Some(file) => WordTable::from_file(file),
        None => {
            log::info!("No words file configured, using the built-in words.");
            Ok(WordTable::builtin())
        }
    }
}

pub async fn create_web_server(config: Config, listener: TcpListener) -> std::io::Result<()> {
    register_metrics();

    let words = load_words(&config).map_err(|error| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, error.to_string())
    })?;
    let lobby = Arc::new(LobbyActor::spawn(
        Arc::new(words),
        config.lobby.inactivity_timeout(),
    ));

    let router = routes::create_router(&config).with_state(lobby);

    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
