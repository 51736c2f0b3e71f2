use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

/// Display name of a player. Cheap to clone, used as the key of a player's live round.
#[derive(Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub struct Nickname {
    value: Arc<str>,
}

impl Nickname {
    pub fn as_slice(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// Use explicit implementation of Clone instead of derived one for code clarity
impl Clone for Nickname {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.value)
    }
}

impl From<String> for Nickname {
    fn from(value: String) -> Self {
        Nickname::from(value.as_str())
    }
}

impl From<&str> for Nickname {
    fn from(value: &str) -> Self {
        Self {
            value: value.trim().into(),
        }
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.value.to_string()
    }
}
