//! Движки трёх карточных игр для чат-бота: Landlord, Gongzhu и
//! Blind Man's Bluff.
//!
//! Транспорт (приём команд, отправка сообщений) снаружи. Крейт хранит
//! состояние игр, проверяет ходы и отдаёт `ActionOutcome`: общее сообщение
//! и личные сообщения конкретным участникам.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{Command, Query, QueryResponse};
pub use domain::{Card, Chips, Participant, ParticipantId};
pub use engine::{ActionOutcome, EngineError, GameKind, SessionRegistry};
pub use infra::GameConfig;
