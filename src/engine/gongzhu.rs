//! Gongzhu ("Охота на свинью"): взятки, ведущая масть, штрафные карты.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    join_cards, Card, Deck, Hand, HandLayout, Participant, ParticipantId, Rank, RankOrder, Suit,
    GONGZHU_EXCLUDED_RANKS,
};
use crate::engine::errors::{EngineError, GameKind};
use crate::engine::outcome::{ActionOutcome, GameResult, PenaltyReport};
use crate::engine::positions::{ensure_turn, Roster, TurnCursor};
use crate::engine::RandomSource;
use crate::infra::config::SeatLimits;

/// Карты, которые штрафуют помимо всех червей.
pub const NAMED_PENALTY_CARDS: [Card; 3] = [
    Card::new(Rank::Ten, Suit::Clubs),
    Card::new(Rank::Jack, Suit::Diamonds),
    Card::new(Rank::Queen, Suit::Spades),
];

/// Одна карта во взятке.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrickPlay {
    pub player: ParticipantId,
    pub card: Card,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GongzhuGame {
    roster: Roster,
    hands: Vec<Hand>,
    turn: TurnCursor,
    trick: Vec<TrickPlay>,
    leading_suit: Option<Suit>,
    /// Взятые карты по индексу участника.
    collected: Vec<Vec<Card>>,
    extra_cards: Vec<Card>,
}

impl GongzhuGame {
    /// Старт: колода 4..A (44 карты), поровну на всех.
    pub fn start<R: RandomSource>(
        participants: Vec<Participant>,
        limits: SeatLimits,
        rng: &mut R,
    ) -> Result<(Self, ActionOutcome), EngineError> {
        let roster = Roster::new(
            GameKind::Gongzhu,
            participants,
            limits.min_players,
            limits.max_players,
        )?;

        let mut deck = Deck::build(false, &GONGZHU_EXCLUDED_RANKS)?;
        rng.shuffle(&mut deck.cards);
        let deal = deck.deal_evenly(roster.len());

        let game = Self {
            turn: TurnCursor::first(roster.len()),
            hands: deal.hands.into_iter().map(Hand::new).collect(),
            trick: Vec::new(),
            leading_suit: None,
            collected: vec![Vec::new(); roster.len()],
            extra_cards: deal.extra,
            roster,
        };

        let mut outcome = ActionOutcome::new();
        for (seat, p) in game.roster.iter().enumerate() {
            outcome.whisper(
                p,
                format!("Your current hand:\n{}", game.hands[seat].format(HandLayout::Gongzhu)),
            );
        }
        outcome.announce(format!(
            "Gongzhu started with {} players. {} plays first.",
            game.roster.len(),
            game.current_participant()
        ));

        info!(players = game.roster.len(), "gongzhu game started");
        Ok((game, outcome))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn current_participant(&self) -> &Participant {
        self.roster.get(self.turn.index())
    }

    pub fn hand(&self, id: ParticipantId) -> Option<&Hand> {
        self.roster.index_of(id).map(|seat| &self.hands[seat])
    }

    pub fn collected(&self, id: ParticipantId) -> Option<&[Card]> {
        self.roster
            .index_of(id)
            .map(|seat| self.collected[seat].as_slice())
    }

    pub fn current_trick(&self) -> &[TrickPlay] {
        &self.trick
    }

    pub fn leading_suit(&self) -> Option<Suit> {
        self.leading_suit
    }

    pub fn extra_cards(&self) -> &[Card] {
        &self.extra_cards
    }

    pub fn hand_view(&self, id: ParticipantId) -> Option<String> {
        self.hand(id).map(|h| h.format(HandLayout::Gongzhu))
    }

    /// Ход `pg`: одна карта с руки.
    ///
    /// Масть следовать не обязательно, но взять взятку может только карта ведущей масти.
    pub fn play(&mut self, actor: ParticipantId, token: &str) -> Result<ActionOutcome, EngineError> {
        let seat = ensure_turn(&self.roster, self.turn, actor)?;

        let card: Card = token
            .parse()
            .map_err(|_| EngineError::MalformedCardToken(token.to_string()))?;
        self.hands[seat]
            .take_exact(&[card])
            .map_err(EngineError::CardNotInHand)?;

        let player = self.roster.get(seat).clone();
        debug!(player = actor, card = %card, "gongzhu play");

        let mut outcome = ActionOutcome::new();
        outcome.announce(format!("{player} played: {card}"));
        outcome.whisper(
            &player,
            format!(
                "You played: {card}\nYour remaining hand:\n{}",
                self.hands[seat].format(HandLayout::Gongzhu)
            ),
        );

        if self.trick.is_empty() {
            self.leading_suit = card.suit();
        }
        self.trick.push(TrickPlay { player: actor, card });
        self.turn = self.turn.next();

        if self.trick.len() < self.roster.len() {
            outcome.announce(format!("{}, it's your turn.", self.current_participant()));
            return Ok(outcome);
        }

        self.resolve_trick(&mut outcome);
        Ok(outcome)
    }

    /// Взятка собрана: отдать карты победителю, проверить конец партии.
    fn resolve_trick(&mut self, outcome: &mut ActionOutcome) {
        let winner = trick_winner(&self.trick, self.leading_suit);
        let winner_seat = self.roster.index_of(winner).unwrap_or(0);
        let taken: Vec<Card> = self.trick.iter().map(|p| p.card).collect();

        outcome.announce(format!(
            "{} wins the round and collects: {}",
            self.roster.get(winner_seat),
            join_cards(&taken)
        ));
        self.collected[winner_seat].extend(taken);

        self.trick.clear();
        self.leading_suit = None;
        self.turn = self.turn.jump_to(winner_seat);

        if self.hands.iter().all(Hand::is_empty) {
            let penalties: Vec<PenaltyReport> = self
                .roster
                .iter()
                .zip(&self.collected)
                .map(|(p, pile)| PenaltyReport {
                    participant: p.id,
                    cards: penalty_cards(pile),
                })
                .collect();

            outcome.announce("Gongzhu game over. Cards collected:");
            for (p, report) in self.roster.iter().zip(&penalties) {
                let line = if report.cards.is_empty() {
                    "No penalty cards.".to_string()
                } else {
                    report
                        .cards
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                outcome.announce(format!("{p}: {line}"));
            }

            info!("gongzhu game finished");
            outcome.finish(GameResult::Gongzhu { penalties });
            return;
        }

        outcome.announce(format!(
            "Next round starts. {} plays first.",
            self.current_participant()
        ));
    }
}

/// Победитель взятки: старшая карта ведущей масти (порядок AceHigh).
///
/// Карты других мастей взятку не берут. Если ведущей масти нет, взятка у первого.
pub fn trick_winner(trick: &[TrickPlay], leading_suit: Option<Suit>) -> ParticipantId {
    trick
        .iter()
        .filter(|p| leading_suit.is_some() && p.card.suit() == leading_suit)
        .max_by_key(|p| RankOrder::AceHigh.value(p.card))
        .or_else(|| trick.first())
        .map(|p| p.player)
        .unwrap_or_default()
}

/// Штрафные карты из кучки взятых: все черви + 10♣, J♦, Q♠.
pub fn penalty_cards(pile: &[Card]) -> Vec<Card> {
    pile.iter()
        .copied()
        .filter(|c| c.suit() == Some(Suit::Hearts) || NAMED_PENALTY_CARDS.contains(c))
        .collect()
}
