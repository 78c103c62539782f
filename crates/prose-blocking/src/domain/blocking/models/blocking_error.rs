// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use prose_blocking_xmpp::ParseError;
use xmpp_parsers::stanza_error::{DefinedCondition, ErrorType, StanzaError};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage request timed out")]
    TimedOut,
    #[error("Storage is unavailable: {msg}")]
    Unavailable { msg: String },
}

/// Errors visible to the client that issued a blocking command.
#[derive(Debug, thiserror::Error)]
pub enum BlockingError {
    #[error("Invalid request: {msg}")]
    InvalidRequest { msg: String },
    #[error("Unsupported blocking command {name}")]
    UnsupportedCommand { name: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Nobody is listening for privacy list updates")]
    NoSubscribers,
}

impl From<ParseError> for BlockingError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::UnsupportedElement { name, .. } => {
                BlockingError::UnsupportedCommand { name }
            }
            ParseError::Generic { .. } | ParseError::InvalidJid { .. } => {
                BlockingError::InvalidRequest {
                    msg: value.to_string(),
                }
            }
        }
    }
}

impl From<&BlockingError> for StanzaError {
    fn from(value: &BlockingError) -> Self {
        match value {
            BlockingError::InvalidRequest { msg } => StanzaError::new(
                ErrorType::Modify,
                DefinedCondition::BadRequest,
                "en",
                msg.as_str(),
            ),
            BlockingError::UnsupportedCommand { .. } => StanzaError::new(
                ErrorType::Cancel,
                DefinedCondition::FeatureNotImplemented,
                "en",
                "Feature not implemented",
            ),
            // Storage details stay on the server.
            BlockingError::Storage(_) => StanzaError::new(
                ErrorType::Wait,
                DefinedCondition::InternalServerError,
                "en",
                "Database error",
            ),
        }
    }
}
