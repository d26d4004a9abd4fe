use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// リモート呼び出し失敗の分類。トランスポート層が分類した結果をそのまま運ぶ。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteErrorKind {
    Network,
    Validation,
    NotFound,
    Server,
    Timeout,
    Unknown,
}

impl RemoteErrorKind {
    /// HTTPステータスコードから分類を導く
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            500 | 502 | 503 => Self::Server,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Task not found: {0}")]
    EntityNotFound(String),

    #[error("Mutation already in flight for task: {0}")]
    MutationInProgress(String),

    #[error("Remote operation failed ({kind}): {message}")]
    Remote {
        kind: RemoteErrorKind,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn remote(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self::Remote {
            kind,
            message: message.into(),
        }
    }

    /// ロールバックを要する失敗かどうか
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::InvalidInput(message)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_kind_maps_http_statuses() {
        assert_eq!(RemoteErrorKind::from_status(400), RemoteErrorKind::Validation);
        assert_eq!(RemoteErrorKind::from_status(404), RemoteErrorKind::NotFound);
        assert_eq!(RemoteErrorKind::from_status(408), RemoteErrorKind::Timeout);
        assert_eq!(RemoteErrorKind::from_status(504), RemoteErrorKind::Timeout);
        assert_eq!(RemoteErrorKind::from_status(500), RemoteErrorKind::Server);
        assert_eq!(RemoteErrorKind::from_status(502), RemoteErrorKind::Server);
        assert_eq!(RemoteErrorKind::from_status(418), RemoteErrorKind::Unknown);
    }

    #[test]
    fn validation_messages_become_invalid_input() {
        let err: AppError = "title is required".to_string().into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn only_remote_failures_are_remote() {
        assert!(AppError::remote(RemoteErrorKind::Server, "boom").is_remote());
        assert!(!AppError::EntityNotFound("t-1".into()).is_remote());
        assert!(!AppError::MutationInProgress("t-1".into()).is_remote());
    }
}
