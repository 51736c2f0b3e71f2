use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;
use serde_aux::prelude::deserialize_number_from_string;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub application: ApplicationSettings,
    pub allow_cors: bool,
    #[serde(default)]
    pub words: WordsSettings,
    #[serde(default)]
    pub lobby: LobbySettings,
}

#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Where the playable words come from. The built-in list is used without a file.
#[derive(Clone, Default, Deserialize)]
pub struct WordsSettings {
    pub file: Option<PathBuf>,
}

/// Rounds without any request for this long are dropped by the lobby.
#[derive(Clone, Deserialize)]
pub struct LobbySettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub inactivity_timeout_seconds: u64,
}

impl LobbySettings {
    const DEFAULT_INACTIVITY_TIMEOUT_SECONDS: u64 = 600;

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_seconds.max(1))
    }
}

impl Default for LobbySettings {
    fn default() -> Self {
        Self {
            inactivity_timeout_seconds: LobbySettings::DEFAULT_INACTIVITY_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir().map_err(|error| {
            ConfigError::Message(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;
        let configuration_directory = base_path.join("config");

        let environment: Environment = match std::env::var("ENVIRONMENT") {
            Ok(environment) => environment.try_into().map_err(ConfigError::Message)?,
            Err(_) => {
                log::warn!("ENVIRONMENT variable is not set, defaulting to `{DEV}`.");
                Environment::Dev
            }
        };

        let environment_filename = format!("{}.yaml", environment.as_str());

        let config = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .add_source(
                config::Environment::with_prefix("WORDGUESS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize::<Config>()
    }
}

enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
