use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;
use crate::engine::{GameKind, RandomSource, SessionRegistry};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Рука участника (или то, что он видит в Blind Man's Bluff).
    HandView { participant: ParticipantId },

    /// Какие игры сейчас идут.
    ActiveGames,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    HandView(String),
    ActiveGames(Vec<GameKind>),
}

/// Ответить на запрос, не меняя состояние.
pub fn answer<R: RandomSource>(registry: &SessionRegistry<R>, query: &Query) -> QueryResponse {
    match query {
        Query::HandView { participant } => QueryResponse::HandView(registry.hand_view(*participant)),
        Query::ActiveGames => QueryResponse::ActiveGames(registry.active_games()),
    }
}
