use serde::{Deserialize, Serialize};

use crate::domain::card::{format_cards, Card, HandLayout, Rank};

/// Карты на руках у одного участника (мультимножество, порядок = порядок раздачи).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Убрать ровно эти карты (с учётом кратности).
    ///
    /// Рука меняется только если все карты нашлись; иначе вернётся первая недостающая.
    pub fn take_exact(&mut self, cards: &[Card]) -> Result<(), Card> {
        let mut remaining = self.cards.clone();
        for card in cards {
            let pos = remaining.iter().position(|c| c == card).ok_or(*card)?;
            remaining.remove(pos);
        }
        self.cards = remaining;
        Ok(())
    }

    /// Выбрать по одной карте на каждый ранг из списка (жадно, первую подходящую).
    ///
    /// Рука не меняется: возвращаются выбранные карты, снимать их через `take_exact`.
    pub fn select_by_ranks(&self, ranks: &[Rank]) -> Result<Vec<Card>, Rank> {
        let mut remaining = self.cards.clone();
        let mut chosen = Vec::with_capacity(ranks.len());
        for rank in ranks {
            let pos = remaining
                .iter()
                .position(|c| c.rank() == Some(*rank))
                .ok_or(*rank)?;
            chosen.push(remaining.remove(pos));
        }
        Ok(chosen)
    }

    pub fn format(&self, layout: HandLayout) -> String {
        format_cards(&self.cards, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Suit;

    #[test]
    fn take_exact_is_all_or_nothing() {
        let mut hand = Hand::new(vec![Card::new(Rank::Three, Suit::Hearts), Card::new(Rank::Four, Suit::Clubs)]);
        let missing = hand.take_exact(&[Card::new(Rank::Three, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)]);
        assert_eq!(missing, Err(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn select_by_ranks_respects_multiplicity() {
        let hand = Hand::new(vec![
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Clubs),
        ]);
        assert_eq!(hand.select_by_ranks(&[Rank::Six, Rank::Six]).map(|c| c.len()), Ok(2));
        assert_eq!(hand.select_by_ranks(&[Rank::Six, Rank::Six, Rank::Six]), Err(Rank::Six));
    }
}
