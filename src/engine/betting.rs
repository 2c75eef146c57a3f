use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::ParticipantId;

/// Состояние ставок одного раунда heads-up.
///
/// Индексы 0/1 = места в `Roster`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    /// Сколько каждый внёс в этом раунде (включая анте).
    pub bets: [Chips; 2],
    /// Сколько сопернику не хватает до уравнивания после последнего рейза.
    pub price_to_call: Chips,
    /// Последний, кто повышал.
    pub last_raiser: Option<ParticipantId>,
}

impl BettingRound {
    /// Сколько нужно доплатить месту `seat`, чтобы уравнять соперника.
    pub fn to_call(&self, seat: usize) -> Chips {
        self.bets[1 - seat] - self.bets[seat]
    }

    pub fn commit(&mut self, seat: usize, amount: Chips) {
        self.bets[seat] += amount;
    }

    /// Обновить состояние после рейза.
    pub fn on_raise(&mut self, seat: usize, raiser: ParticipantId) {
        self.last_raiser = Some(raiser);
        self.price_to_call = self.bets[seat] - self.bets[1 - seat];
    }
}
