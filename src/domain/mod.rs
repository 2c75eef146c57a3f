//! Доменная модель: карты, колоды, руки, фишки, участники.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod participant;

/// Стабильный идентификатор участника (его выдаёт слой сообщений).
pub type ParticipantId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use participant::*;
