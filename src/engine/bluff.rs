//! Blind Man's Bluff: heads-up, каждый видит карту соперника, но не свою.
//!
//! Раунд: анте + раздача → {raise}* → call (вскрытие) | fold → выплата →
//! вылет по фишкам или новый раунд.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Card, Chips, Deck, Participant, ParticipantId, RankOrder};
use crate::engine::betting::BettingRound;
use crate::engine::errors::{EngineError, GameKind};
use crate::engine::outcome::{ActionOutcome, GameResult};
use crate::engine::positions::{ensure_turn, Roster, TurnCursor};
use crate::engine::pot::Pot;
use crate::engine::side_pots::distribute;
use crate::engine::validation::validate_raise;
use crate::engine::RandomSource;
use crate::infra::config::BluffStakes;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BluffGame {
    roster: Roster,
    stakes: BluffStakes,
    /// Фишки вне банка, по месту.
    stacks: [Chips; 2],
    pot: Pot,
    betting: BettingRound,
    /// Карта каждого места. Видна только сопернику.
    cards: [Card; 2],
    turn: TurnCursor,
    round: u32,
}

impl BluffGame {
    pub fn start<R: RandomSource>(
        first: Participant,
        second: Participant,
        stakes: BluffStakes,
        rng: &mut R,
    ) -> Result<(Self, ActionOutcome), EngineError> {
        let roster = Roster::new(GameKind::BlindMansBluff, vec![first, second], 2, 2)?;
        let deck = Deck::build(false, &[])?;

        let mut game = Self {
            stacks: [stakes.starting_stack; 2],
            stakes,
            pot: Pot::new(),
            betting: BettingRound::default(),
            cards: [deck.cards[0], deck.cards[1]],
            turn: TurnCursor::first(2),
            round: 0,
            roster,
        };

        let mut outcome = ActionOutcome::new();
        game.begin_round(rng, &mut outcome);
        outcome.announce(format!(
            "Blind Man's Bluff started between {} and {}!",
            game.roster.get(0),
            game.roster.get(1)
        ));
        game.announce_round(&mut outcome);

        info!(
            stack = %game.stakes.starting_stack,
            ante = %game.stakes.ante,
            "blind man's bluff started"
        );
        Ok((game, outcome))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn current_participant(&self) -> &Participant {
        self.roster.get(self.turn.index())
    }

    pub fn stack(&self, id: ParticipantId) -> Option<Chips> {
        self.roster.index_of(id).map(|seat| self.stacks[seat])
    }

    pub fn bet(&self, id: ParticipantId) -> Option<Chips> {
        self.roster.index_of(id).map(|seat| self.betting.bets[seat])
    }

    pub fn card_of(&self, id: ParticipantId) -> Option<Card> {
        self.roster.index_of(id).map(|seat| self.cards[seat])
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    pub fn price_to_call(&self) -> Chips {
        self.betting.price_to_call
    }

    pub fn last_raiser(&self) -> Option<ParticipantId> {
        self.betting.last_raiser
    }

    /// Номер текущего раунда (с 1).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Фишки на руках + банк. Внутри игры не меняется.
    pub fn total_chips(&self) -> Chips {
        self.stacks[0] + self.stacks[1] + self.pot.total
    }

    /// Что видит участник: карту соперника и фишки обоих.
    pub fn hand_view(&self, id: ParticipantId) -> Option<String> {
        let seat = self.roster.index_of(id)?;
        Some(format!(
            "The other player is showing: {}\n{}",
            self.cards[1 - seat],
            self.chip_counts()
        ))
    }

    /// Рейз: уравнять соперника и добавить `amount` сверху.
    pub fn raise(&mut self, actor: ParticipantId, amount: Option<Chips>) -> Result<ActionOutcome, EngineError> {
        let seat = ensure_turn(&self.roster, self.turn, actor)?;
        let amount = amount.unwrap_or(self.stakes.default_raise);
        let to_call = self.betting.to_call(seat);

        let commitment = validate_raise(self.stacks[seat], to_call, amount, self.stakes.ante)?;

        self.stacks[seat] -= commitment;
        self.betting.commit(seat, commitment);
        self.pot.add(commitment);
        self.betting.on_raise(seat, actor);
        self.turn = self.turn.next();

        debug!(player = actor, %amount, %to_call, pot = %self.pot.total, "bluff raise");

        let mut outcome = ActionOutcome::new();
        outcome.announce(format!(
            "{} raises {amount} chips (calls {to_call}, raises {amount}).",
            self.roster.get(seat)
        ));
        outcome.announce(format!("Current price to call: {}.", self.betting.price_to_call));
        outcome.announce(format!("Pot: {}.", self.pot.total));
        outcome.announce(format!("{}, your move!", self.current_participant()));
        Ok(outcome)
    }

    /// Колл. Без ставки для уравнивания это чек; иначе вскрытие и расчёт.
    ///
    /// Если фишек не хватает, колл идёт на все оставшиеся (short call).
    pub fn call<R: RandomSource>(&mut self, actor: ParticipantId, rng: &mut R) -> Result<ActionOutcome, EngineError> {
        let seat = ensure_turn(&self.roster, self.turn, actor)?;
        let to_call = self.betting.to_call(seat);
        let mut outcome = ActionOutcome::new();

        if to_call.is_zero() {
            self.turn = self.turn.next();
            debug!(player = actor, "bluff check");
            outcome.announce(format!(
                "{} checks.\n{}, your move!",
                self.roster.get(seat),
                self.current_participant()
            ));
            return Ok(outcome);
        }

        let paid = self.stacks[seat].min(to_call);
        self.stacks[seat] -= paid;
        self.betting.commit(seat, paid);
        self.pot.add(paid);
        debug!(player = actor, %paid, short = paid < to_call, "bluff call");

        self.showdown(&mut outcome);
        self.finish_round(rng, &mut outcome);
        Ok(outcome)
    }

    /// Фолд: весь банк уходит сопернику.
    pub fn fold<R: RandomSource>(&mut self, actor: ParticipantId, rng: &mut R) -> Result<ActionOutcome, EngineError> {
        let seat = ensure_turn(&self.roster, self.turn, actor)?;
        let winner = 1 - seat;

        let won = self.pot.take();
        self.stacks[winner] += won;
        debug!(player = actor, %won, "bluff fold");

        let mut outcome = ActionOutcome::new();
        outcome.announce(format!(
            "{} folded. {} wins {won} chips!",
            self.roster.get(seat),
            self.roster.get(winner)
        ));
        self.finish_round(rng, &mut outcome);
        Ok(outcome)
    }

    /// Вскрыть карты и раздать банк: победителю по слоям (см. `side_pots::distribute`),
    /// при ничьей пополам.
    fn showdown(&mut self, outcome: &mut ActionOutcome) {
        let (p1, p2) = (self.roster.get(0).clone(), self.roster.get(1).clone());
        outcome.announce(format!("{p1} had: {}\n{p2} had: {}", self.cards[0], self.cards[1]));

        let v1 = RankOrder::AceHigh.value(self.cards[0]);
        let v2 = RankOrder::AceHigh.value(self.cards[1]);
        let winners: Vec<ParticipantId> = match v1.cmp(&v2) {
            std::cmp::Ordering::Greater => vec![p1.id],
            std::cmp::Ordering::Less => vec![p2.id],
            std::cmp::Ordering::Equal => vec![p1.id, p2.id],
        };

        let pot = self.pot.take();

        // Ничья делит весь банк, даже при неравных ставках; лишняя фишка второму.
        if winners.len() == 2 {
            let half = Chips(pot.0 / 2);
            self.stacks[0] += half;
            self.stacks[1] += pot - half;
            outcome.announce("It's a tie. Pot is split.");
            return;
        }

        let contributions = [(p1.id, self.betting.bets[0]), (p2.id, self.betting.bets[1])];
        let payouts = distribute(&contributions, &winners);
        for (seat, (_, prize)) in payouts.iter().enumerate() {
            self.stacks[seat] += *prize;
        }

        let winner_seat = if winners[0] == p1.id { 0 } else { 1 };
        let winner = self.roster.get(winner_seat);
        let prize = payouts[winner_seat].1;
        if self.betting.bets[winner_seat] < self.betting.bets[1 - winner_seat] {
            outcome.announce(format!(
                "{winner} wins but didn't match the full raise, so they win only {prize} chips."
            ));
        } else {
            outcome.announce(format!("{winner} wins the round and takes {pot} chips!"));
        }
    }

    /// После выплаты: объявить фишки, проверить вылет, иначе новый раунд.
    fn finish_round<R: RandomSource>(&mut self, rng: &mut R, outcome: &mut ActionOutcome) {
        outcome.announce(self.chip_counts());

        if let Some(out_seat) = (0..2).find(|&seat| self.stacks[seat].is_zero()) {
            let loser = self.roster.get(out_seat);
            let winner = self.roster.get(1 - out_seat);
            outcome.announce(format!("{loser} is out of chips. {winner} wins the game!"));
            info!(winner = winner.id, rounds = self.round, "blind man's bluff finished");
            outcome.finish(GameResult::BlindMansBluff {
                winner: winner.id,
                eliminated: loser.id,
            });
            return;
        }

        self.begin_round(rng, outcome);
        outcome.announce("New round begins!");
        self.announce_round(outcome);
    }

    /// Анте, свежая колода, по карте каждому, ход первому.
    fn begin_round<R: RandomSource>(&mut self, rng: &mut R, outcome: &mut ActionOutcome) {
        self.round += 1;
        self.turn = TurnCursor::first(2);
        self.betting = BettingRound::default();

        for seat in 0..2 {
            let paid = self.stacks[seat].min(self.stakes.ante);
            self.stacks[seat] -= paid;
            self.betting.commit(seat, paid);
            self.pot.add(paid);
        }

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        for seat in 0..2 {
            if let Some(card) = deck.draw_one() {
                self.cards[seat] = card;
            }
        }

        for seat in 0..2 {
            outcome.whisper(
                self.roster.get(seat),
                format!("The other player is showing: {}", self.cards[1 - seat]),
            );
        }
    }

    fn announce_round(&self, outcome: &mut ActionOutcome) {
        outcome.announce(format!("Each player antes {} chip(s).", self.stakes.ante));
        outcome.announce(format!("Pot: {}.", self.pot.total));
        outcome.announce(format!(
            "{}, it's your turn! Use raise, call, or fold.",
            self.current_participant()
        ));
    }

    fn chip_counts(&self) -> String {
        format!(
            "Chips now:\n{}: {}\n{}: {}",
            self.roster.get(0),
            self.stacks[0],
            self.roster.get(1),
            self.stacks[1]
        )
    }
}
