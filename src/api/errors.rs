use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, GameKind};

/// Ошибки внешнего API (то, что уходит автору команды).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON команды и т.п.).
    BadRequest(String),

    /// Игры такого типа сейчас нет.
    NoActiveGame(GameKind),

    /// Действие отклонено движком; текст можно показать игроку как есть.
    Rejected(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoActiveSession(kind) => ApiError::NoActiveGame(kind),
            other => ApiError::Rejected(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
