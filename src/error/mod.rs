pub mod domain_error;

use thiserror::Error;

use self::domain_error::DomainError;
use crate::remote::RemoteError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Domain Error. Error: '{0}'.")]
    Domain(DomainError),
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
    #[error("Remote Error. Error: '{0}'.")]
    Remote(#[from] RemoteError),
}

impl Error {
    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }

    /// Stable identifier sent to HTTP clients.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Domain(error) => error.code(),
            Error::Internal(_) => "INTERNAL_SERVER",
            Error::Remote(_) => "REMOTE_UNAVAILABLE",
        }
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Error::Domain(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Error::Domain(error)
    }
}
