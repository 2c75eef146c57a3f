use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, JokerKind, Rank, Suit};

/// Колода карт. В домене это просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

/// Результат раздачи: руки по порядку игроков + неразданный остаток.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub extra: Vec<Card>,
}

/// Конфигурация колоды, из которой не осталось ни одной карты.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("deck configuration excludes every card")]
pub struct EmptyDeckError;

/// Ранги, которых нет в колоде Gongzhu.
pub const GONGZHU_EXCLUDED_RANKS: [Rank; 2] = [Rank::Two, Rank::Three];

impl Deck {
    /// Колода из всех (ранг × масть) кроме исключённых рангов, плюс джокеры.
    ///
    /// Пустая колода считается ошибкой конфигурации.
    pub fn build(include_jokers: bool, excluded_ranks: &[Rank]) -> Result<Self, EmptyDeckError> {
        let deck = Self::assemble(include_jokers, excluded_ranks);
        if deck.is_empty() {
            return Err(EmptyDeckError);
        }
        Ok(deck)
    }

    /// 54 карты: 52 + два джокера.
    pub fn landlord() -> Self {
        Self::assemble(true, &[])
    }

    /// 44 карты: ранги 4..A, без двоек, троек и джокеров.
    pub fn gongzhu() -> Self {
        Self::assemble(false, &GONGZHU_EXCLUDED_RANKS)
    }

    /// 52 карты без джокеров (Blind Man's Bluff).
    pub fn standard_52() -> Self {
        Self::assemble(false, &[])
    }

    fn assemble(include_jokers: bool, excluded_ranks: &[Rank]) -> Self {
        let mut cards: Vec<Card> = Rank::ALL
            .into_iter()
            .filter(|rank| !excluded_ranks.contains(rank))
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
            .collect();
        if include_jokers {
            cards.push(Card::Joker(JokerKind::Black));
            cards.push(Card::Joker(JokerKind::Red));
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Разделить колоду поровну на `players` рук.
    ///
    /// Каждому достаётся `len / players` карт подряд, хвост уходит в `extra`.
    pub fn deal_evenly(self, players: usize) -> Deal {
        if players == 0 {
            return Deal {
                hands: Vec::new(),
                extra: self.cards,
            };
        }

        let per_player = self.cards.len() / players;
        let mut rest = self.cards;
        let extra = rest.split_off(per_player * players);
        let mut hands: Vec<Vec<Card>> = rest.chunks(per_player.max(1)).map(|c| c.to_vec()).collect();

        // chunks() на пустом векторе вернёт ноль кусков – добиваем пустыми руками.
        hands.resize(players, Vec::new());

        Deal { hands, extra }
    }
}
