use std::net::SocketAddr;

use tokio::net::TcpListener;
use wordguess::config::Config;
use wordguess::startup::create_web_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    std_logger::Config::logfmt().init();

    let config = Config::get().map_err(|error| {
        log::error!("Unable to get the Config. Error: '{error}'.");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error.to_string())
    })?;

    let address = format!("{}:{}", config.application.host, config.application.port)
        .parse::<SocketAddr>()
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;
    let listener = TcpListener::bind(address).await?;

    create_web_server(config, listener).await
}
