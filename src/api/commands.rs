use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::{Chips, Participant};
use crate::engine::{ActionOutcome, RandomSource, SessionRegistry};

/// Команда от участника.
///
/// Слой сообщений сам разбирает текст и присылает уже структурированную
/// команду; кто её отправил, передаётся отдельно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Начать Landlord на 3–5 игроков.
    StartLandlord { participants: Vec<Participant> },

    /// `pl`: карты (`Ad 2s`) или ранги (`3 3`).
    Play { cards: Vec<String> },

    /// `xl`: пас.
    Pass,

    /// Начать Gongzhu на 3–5 игроков.
    StartGongzhu { participants: Vec<Participant> },

    /// `pg`: одна карта.
    PlayCard { card: String },

    /// Начать Blind Man's Bluff.
    StartBluff { first: Participant, second: Participant },

    /// Рейз. Без суммы берётся рейз по умолчанию из конфига.
    Raise {
        #[serde(default)]
        amount: Option<Chips>,
    },

    Call,

    Fold,

    /// Показать свою руку (ответ уходит только автору).
    HandView,

    /// Закрыть все игры.
    EndAllGames,
}

/// Разобрать команду из JSON и выполнить её от имени `actor`.
pub fn execute_json<R: RandomSource>(
    registry: &mut SessionRegistry<R>,
    actor: &Participant,
    json: &str,
) -> Result<ActionOutcome, ApiError> {
    let command: Command = serde_json::from_str(json)?;
    Ok(registry.execute(actor, command)?)
}
