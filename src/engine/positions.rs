use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Participant, ParticipantId};
use crate::engine::errors::{EngineError, GameKind};

/// Неизменный упорядоченный состав участников сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Проверить количество (min..=max, но не меньше одного) и уникальность id.
    pub fn new(
        game: GameKind,
        participants: Vec<Participant>,
        min: usize,
        max: usize,
    ) -> Result<Self, EngineError> {
        let got = participants.len();
        if got == 0 || got < min || got > max {
            return Err(EngineError::InvalidParticipantCount { game, min, max, got });
        }

        let mut seen = HashSet::with_capacity(got);
        for p in &participants {
            if !seen.insert(p.id) {
                return Err(EngineError::DuplicateParticipant(p.id));
            }
        }

        Ok(Self { participants })
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, index: usize) -> &Participant {
        &self.participants[index % self.participants.len()]
    }

    pub fn index_of(&self, id: ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

/// Курсор хода по кругу над `Roster`.
///
/// Чистое значение: переходы не требуют живой сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnCursor {
    index: usize,
    len: usize,
}

impl TurnCursor {
    /// Первый ход у первого участника.
    pub fn first(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Следующий по кругу.
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len.max(1),
            len: self.len,
        }
    }

    /// Передать ход конкретному месту.
    pub fn jump_to(self, index: usize) -> Self {
        Self {
            index: index % self.len.max(1),
            len: self.len,
        }
    }
}

/// Проверить, что действует тот, чей сейчас ход.
pub fn ensure_turn(roster: &Roster, cursor: TurnCursor, actor: ParticipantId) -> Result<usize, EngineError> {
    if roster.get(cursor.index()).id == actor {
        Ok(cursor.index())
    } else {
        Err(EngineError::NotYourTurn(actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_around() {
        let c = TurnCursor::first(3);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.jump_to(5).index(), 2);
    }

    #[test]
    fn roster_rejects_duplicates() {
        let players = vec![Participant::new(1, "a"), Participant::new(1, "a2"), Participant::new(2, "b")];
        let err = Roster::new(GameKind::Landlord, players, 3, 5).unwrap_err();
        assert_eq!(err, EngineError::DuplicateParticipant(1));
    }

    #[test]
    fn roster_is_never_empty() {
        let err = Roster::new(GameKind::Gongzhu, Vec::new(), 0, 5).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidParticipantCount {
                game: GameKind::Gongzhu,
                min: 0,
                max: 5,
                got: 0
            }
        );
    }
}
