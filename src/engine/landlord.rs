//! "Дурак-помещик" (Landlord): последовательные ходы play/pass.
//!
//! Движок помнит последнюю не-пасовую комбинацию и того, кто её сыграл.
//! Старшинство комбинаций НЕ проверяется: принимается любой набор карт,
//! который реально есть на руке.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    join_cards, parse_tokens, Card, Deck, Hand, HandLayout, Participant, ParticipantId, Rank,
};
use crate::engine::errors::{EngineError, GameKind};
use crate::engine::outcome::{ActionOutcome, GameResult};
use crate::engine::positions::{ensure_turn, Roster, TurnCursor};
use crate::engine::RandomSource;
use crate::infra::config::SeatLimits;

/// Последняя сыгранная (не пас) комбинация.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastPlay {
    pub player: ParticipantId,
    pub cards: Vec<Card>,
}

/// Состояние одной партии Landlord.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandlordGame {
    roster: Roster,
    /// Руки по индексу участника в `roster`.
    hands: Vec<Hand>,
    turn: TurnCursor,
    last_play: Option<LastPlay>,
    /// Кто спасовал после последней сыгранной комбинации.
    passed: HashSet<ParticipantId>,
    last_player: Option<ParticipantId>,
    /// Неразданный остаток колоды. В игре не участвует.
    extra_cards: Vec<Card>,
}

impl LandlordGame {
    /// Старт партии: 54 карты, поровну на всех, остаток в `extra_cards`.
    pub fn start<R: RandomSource>(
        participants: Vec<Participant>,
        limits: SeatLimits,
        rng: &mut R,
    ) -> Result<(Self, ActionOutcome), EngineError> {
        let roster = Roster::new(
            GameKind::Landlord,
            participants,
            limits.min_players,
            limits.max_players,
        )?;

        let mut deck = Deck::build(true, &[])?;
        rng.shuffle(&mut deck.cards);
        let deal = deck.deal_evenly(roster.len());

        let game = Self {
            turn: TurnCursor::first(roster.len()),
            hands: deal.hands.into_iter().map(Hand::new).collect(),
            last_play: None,
            passed: HashSet::new(),
            last_player: None,
            extra_cards: deal.extra,
            roster,
        };

        let mut outcome = ActionOutcome::new();
        for (seat, p) in game.roster.iter().enumerate() {
            outcome.whisper(
                p,
                format!("Your current hand:\n{}", game.hands[seat].format(HandLayout::Landlord)),
            );
        }
        outcome.announce(format!(
            "Landlord game started with {} players. {}, it's your turn.",
            game.roster.len(),
            game.current_participant()
        ));

        info!(
            players = game.roster.len(),
            extra_cards = game.extra_cards.len(),
            "landlord game started"
        );

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

    pub fn last_play(&self) -> Option<&LastPlay> {
        self.last_play.as_ref()
    }

    pub fn last_player(&self) -> Option<ParticipantId> {
        self.last_player
    }

    pub fn has_passed(&self, id: ParticipantId) -> bool {
        self.passed.contains(&id)
    }

    pub fn extra_cards(&self) -> &[Card] {
        &self.extra_cards
    }

    /// Рука участника в раскладке Landlord.
    pub fn hand_view(&self, id: ParticipantId) -> Option<String> {
        self.hand(id).map(|h| h.format(HandLayout::Landlord))
    }

    /// Ход `pl`: либо "голые" ранги (`3 3`, `6 6 6`), либо явные карты (`Ad 2s`).
    pub fn play<S: AsRef<str>>(
        &mut self,
        actor: ParticipantId,
        tokens: &[S],
    ) -> Result<ActionOutcome, EngineError> {
        let seat = ensure_turn(&self.roster, self.turn, actor)?;
        if tokens.is_empty() {
            return Err(EngineError::EmptySelection);
        }

        let selection = select_cards(&self.hands[seat], tokens)?;

        // Сначала снимаем с копии: при ошибке рука не меняется.
        let mut hand = self.hands[seat].clone();
        hand.take_exact(&selection)
            .map_err(EngineError::CardNotInHand)?;

        self.hands[seat] = hand;
        self.last_play = Some(LastPlay {
            player: actor,
            cards: selection.clone(),
        });
        self.last_player = Some(actor);
        self.passed.clear();

        let player = self.roster.get(seat).clone();
        let played = join_cards(&selection);
        debug!(player = actor, cards = %played, left = self.hands[seat].len(), "landlord play");

        let mut outcome = ActionOutcome::new();
        outcome.announce(format!("{player} played: {played}"));
        outcome.whisper(
            &player,
            format!(
                "You played: {played}\nYour remaining hand:\n{}",
                self.hands[seat].format(HandLayout::Landlord)
            ),
        );

        if self.hands[seat].is_empty() {
            outcome.announce(format!("{player} wins the Landlord game!"));
            outcome.finish(GameResult::Landlord { winner: actor });
            info!(winner = actor, "landlord game finished");
            return Ok(outcome);
        }

        self.turn = self.turn.next();
        outcome.announce(format!("It's now {}'s turn.", self.current_participant()));
        Ok(outcome)
    }

    /// Пас `xl`.
    ///
    /// Если спасовали все, кроме последнего сыгравшего, стол очищается
    /// и ход возвращается к нему.
    pub fn pass(&mut self, actor: ParticipantId) -> Result<ActionOutcome, EngineError> {
        ensure_turn(&self.roster, self.turn, actor)?;

        self.passed.insert(actor);

        let mut outcome = ActionOutcome::new();
        outcome.announce(format!("{} passed.", self.current_participant()));

        match self.last_player.and_then(|id| self.roster.index_of(id).map(|seat| (id, seat))) {
            Some((last, last_seat)) => {
                let others_passed = self
                    .roster
                    .iter()
                    .filter(|p| p.id != last && self.passed.contains(&p.id))
                    .count();

                if others_passed == self.roster.len() - 1 {
                    self.last_play = None;
                    self.passed.clear();
                    self.turn = self.turn.jump_to(last_seat);
                    outcome.announce(format!(
                        "Everyone else passed. {} may play anything.",
                        self.current_participant()
                    ));
                } else {
                    self.turn = self.turn.next();
                }
            }
            None => {
                // Никто ещё не ходил: круг пасов просто начинается заново.
                if self.passed.len() == self.roster.len() {
                    self.passed.clear();
                }
                self.turn = self.turn.next();
            }
        }

        debug!(player = actor, "landlord pass");
        outcome.announce(format!("It's now {}'s turn.", self.current_participant()));
        Ok(outcome)
    }
}

/// Разобрать аргументы `pl` в конкретные карты руки.
fn select_cards<S: AsRef<str>>(hand: &Hand, tokens: &[S]) -> Result<Vec<Card>, EngineError> {
    let ranks: Option<Vec<Rank>> = tokens.iter().map(|t| Rank::parse(t.as_ref().trim())).collect();

    match ranks {
        Some(ranks) => hand
            .select_by_ranks(&ranks)
            .map_err(EngineError::InsufficientRankCount),
        None => parse_tokens(tokens).map_err(EngineError::MalformedCardToken),
    }
}
