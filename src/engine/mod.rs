//! Движки трёх игр и реестр сессий.
//!
//! Высокоуровневый объект: `SessionRegistry`
//! Движки:
//!   - `LandlordGame` – play/pass со "столом" последней комбинации
//!   - `GongzhuGame` – взятки с ведущей мастью и штрафными картами
//!   - `BluffGame` – heads-up ставки с анте, рейзом, коллом, фолдом
//!
//! Все операции синхронные: проверка → изменение состояния → `ActionOutcome`.

pub mod betting;
pub mod bluff;
pub mod errors;
pub mod gongzhu;
pub mod landlord;
pub mod outcome;
pub mod positions;
pub mod pot;
pub mod session_registry;
pub mod side_pots;
pub mod validation;

pub use bluff::BluffGame;
pub use errors::{EngineError, GameKind};
pub use gongzhu::{penalty_cards, trick_winner, GongzhuGame, TrickPlay};
pub use landlord::{LandlordGame, LastPlay};
pub use outcome::{ActionOutcome, GameResult, PenaltyReport, PrivateMessage, SessionStatus};
pub use positions::{Roster, TurnCursor};
pub use pot::Pot;
pub use session_registry::SessionRegistry;
pub use side_pots::SidePot;

/// RNG интерфейс для engine.
/// Реализации в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
