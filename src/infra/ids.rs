use std::collections::HashMap;

use crate::domain::{Participant, ParticipantId};

/// Справочник участников: имя → стабильный id.
///
/// Нужен там, где платформа не даёт своих id (локальный CLI, тесты).
/// Имена сравниваются без учёта регистра, отображается первое написание.
#[derive(Debug, Default)]
pub struct ParticipantDirectory {
    next_id: ParticipantId,
    by_name: HashMap<String, Participant>,
}

impl ParticipantDirectory {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            by_name: HashMap::new(),
        }
    }

    /// Найти участника по имени или завести нового.
    pub fn intern(&mut self, name: &str) -> Participant {
        let key = name.to_lowercase();
        if let Some(p) = self.by_name.get(&key) {
            return p.clone();
        }

        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let p = Participant::new(id, name);
        self.by_name.insert(key, p.clone());
        p
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
