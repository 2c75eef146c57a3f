use serde::{Deserialize, Serialize};

use crate::domain::{Card, Participant, ParticipantId};

/// Личное сообщение одному участнику.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateMessage {
    pub recipient: Participant,
    pub text: String,
}

/// Штрафные карты одного участника по итогам Gongzhu.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PenaltyReport {
    pub participant: ParticipantId,
    pub cards: Vec<Card>,
}

/// Итог завершённой игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Landlord { winner: ParticipantId },
    Gongzhu { penalties: Vec<PenaltyReport> },
    BlindMansBluff { winner: ParticipantId, eliminated: ParticipantId },
}

/// Статус сессии после действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionStatus {
    Ongoing,
    Finished(GameResult),
}

/// Результат действия: максимум одно общее сообщение + личные сообщения.
///
/// Доставку делает внешний слой (см. `infra::messaging::relay`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionOutcome {
    pub broadcast: Option<String>,
    pub private: Vec<PrivateMessage>,
    pub status: SessionStatus,
}

impl Default for ActionOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionOutcome {
    pub fn new() -> Self {
        Self {
            broadcast: None,
            private: Vec::new(),
            status: SessionStatus::Ongoing,
        }
    }

    /// Добавить строку в общее сообщение.
    pub fn announce(&mut self, line: impl AsRef<str>) {
        match self.broadcast.as_mut() {
            Some(text) => {
                text.push('\n');
                text.push_str(line.as_ref());
            }
            None => self.broadcast = Some(line.as_ref().to_string()),
        }
    }

    pub fn whisper(&mut self, recipient: &Participant, text: impl Into<String>) {
        self.private.push(PrivateMessage {
            recipient: recipient.clone(),
            text: text.into(),
        });
    }

    pub fn finish(&mut self, result: GameResult) {
        self.status = SessionStatus::Finished(result);
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished(_))
    }

    /// Все личные сообщения для участника (в порядке отправки).
    pub fn private_for(&self, id: ParticipantId) -> Vec<&str> {
        self.private
            .iter()
            .filter(|m| m.recipient.id == id)
            .map(|m| m.text.as_str())
            .collect()
    }
}
