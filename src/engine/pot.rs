use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Забрать всё из банка (банк обнуляется).
    pub fn take(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }
}
