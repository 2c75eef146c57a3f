use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;

/// Участник игры: стабильный id + отображаемое имя.
///
/// Платформенные объекты пользователей сюда не попадают, их маппит
/// внешний слой сообщений.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
