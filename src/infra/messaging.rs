//! Контракт с внешним слоем сообщений.
//!
//! Движки только формируют `ActionOutcome`; доставляет его `relay`.
//! Ошибка доставки личного сообщения на состояние игры не влияет.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::domain::{Participant, ParticipantId};
use crate::engine::ActionOutcome;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("participant {0} does not accept direct messages")]
    Unreachable(ParticipantId),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// То, что движкам нужно от платформы.
pub trait Messenger {
    /// Сообщение всем участникам сессии.
    fn broadcast(&mut self, text: &str);

    /// Личное сообщение одному участнику.
    fn send_private(&mut self, to: &Participant, text: &str) -> Result<(), DeliveryError>;

    /// Запасной канал, куда пишем о недоставленных личных сообщениях.
    fn fallback(&mut self, text: &str);
}

/// Доставить результат действия: общее сообщение, затем личные.
///
/// Возвращает, скольким участникам личное сообщение не дошло.
pub fn relay<M: Messenger>(outcome: &ActionOutcome, messenger: &mut M) -> usize {
    if let Some(text) = outcome.broadcast.as_deref() {
        messenger.broadcast(text);
    }

    let mut failed = 0;
    for msg in &outcome.private {
        if let Err(err) = messenger.send_private(&msg.recipient, &msg.text) {
            warn!(participant = msg.recipient.id, error = %err, "private message not delivered");
            messenger.fallback(&format!("Couldn't DM {}.", msg.recipient));
            failed += 1;
        }
    }
    failed
}

/// Messenger в памяти: всё записывает, умеет "не доставлять" выбранным.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    pub broadcasts: Vec<String>,
    pub private: Vec<(ParticipantId, String)>,
    pub fallbacks: Vec<String>,
    unreachable: HashSet<ParticipantId>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Личные сообщения этому участнику будут падать с `Unreachable`.
    pub fn block(&mut self, id: ParticipantId) {
        self.unreachable.insert(id);
    }

    pub fn private_for(&self, id: ParticipantId) -> Vec<&str> {
        self.private
            .iter()
            .filter(|(to, _)| *to == id)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Messenger for RecordingMessenger {
    fn broadcast(&mut self, text: &str) {
        self.broadcasts.push(text.to_string());
    }

    fn send_private(&mut self, to: &Participant, text: &str) -> Result<(), DeliveryError> {
        if self.unreachable.contains(&to.id) {
            return Err(DeliveryError::Unreachable(to.id));
        }
        self.private.push((to.id, text.to_string()));
        Ok(())
    }

    fn fallback(&mut self, text: &str) {
        self.fallbacks.push(text.to_string());
    }
}
