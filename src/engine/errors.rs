use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Card, Chips, EmptyDeckError, ParticipantId, Rank};

/// Тип игры (у каждого не больше одной активной сессии).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameKind {
    Landlord,
    Gongzhu,
    BlindMansBluff,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Landlord => "Landlord",
            GameKind::Gongzhu => "Gongzhu",
            GameKind::BlindMansBluff => "Blind Man's Bluff",
        };
        f.write_str(name)
    }
}

/// Ошибки движков.
///
/// Все ошибки локальные: действие отклоняется, состояние не меняется,
/// текст уходит действующему участнику.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{game} needs between {min} and {max} players, got {got}")]
    InvalidParticipantCount {
        game: GameKind,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("Player {0} is listed more than once")]
    DuplicateParticipant(ParticipantId),

    #[error("A {0} game is already in progress")]
    SessionAlreadyActive(GameKind),

    #[error("No active {0} game")]
    NoActiveSession(GameKind),

    #[error("It's not your turn")]
    NotYourTurn(ParticipantId),

    #[error("Invalid card format: {0}")]
    MalformedCardToken(String),

    #[error("You don't have {0} in your hand")]
    CardNotInHand(Card),

    #[error("You don't have enough {0}s to play")]
    InsufficientRankCount(Rank),

    #[error("Name at least one card to play")]
    EmptySelection,

    #[error("You need {needed} chips but only have {available}")]
    InsufficientChips { needed: Chips, available: Chips },

    #[error("You have to commit at least the ante ({ante}), this raise commits {commitment}")]
    BelowAnteFloor { commitment: Chips, ante: Chips },

    #[error("Raise amount must be at least 1")]
    InvalidRaiseAmount,

    #[error("Invalid deck configuration: {0}")]
    InvalidDeck(#[from] EmptyDeckError),
}
