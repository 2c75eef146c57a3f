use tracing::info;

use crate::api::commands::Command;
use crate::domain::{Chips, Participant, ParticipantId};
use crate::engine::bluff::BluffGame;
use crate::engine::errors::{EngineError, GameKind};
use crate::engine::gongzhu::GongzhuGame;
use crate::engine::landlord::LandlordGame;
use crate::engine::outcome::ActionOutcome;
use crate::engine::RandomSource;
use crate::infra::config::GameConfig;

/// Текст для тех, кто ни в одной активной игре.
pub const NOT_IN_GAME: &str = "You're not currently in an active game.";

/// Реестр сессий: не больше одной активной игры каждого типа.
///
/// Передаётся по ссылке в каждый обработчик; глобального состояния нет.
/// Если хост обрабатывает команды параллельно, реестр нужно держать за
/// мьютексом целиком; сами движки синхронные и без блокировок.
pub struct SessionRegistry<R: RandomSource> {
    config: GameConfig,
    rng: R,
    landlord: Option<LandlordGame>,
    gongzhu: Option<GongzhuGame>,
    bluff: Option<BluffGame>,
}

/// Если игра закончилась, освободить слот.
fn retire<G>(slot: &mut Option<G>, kind: GameKind, outcome: &ActionOutcome) {
    if outcome.is_finished() {
        *slot = None;
        info!(game = %kind, "session closed");
    }
}

impl<R: RandomSource> SessionRegistry<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            landlord: None,
            gongzhu: None,
            bluff: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_active(&self, kind: GameKind) -> bool {
        match kind {
            GameKind::Landlord => self.landlord.is_some(),
            GameKind::Gongzhu => self.gongzhu.is_some(),
            GameKind::BlindMansBluff => self.bluff.is_some(),
        }
    }

    /// Активные игры в фиксированном порядке.
    pub fn active_games(&self) -> Vec<GameKind> {
        [GameKind::Landlord, GameKind::Gongzhu, GameKind::BlindMansBluff]
            .into_iter()
            .filter(|k| self.is_active(*k))
            .collect()
    }

    pub fn landlord(&self) -> Option<&LandlordGame> {
        self.landlord.as_ref()
    }

    pub fn gongzhu(&self) -> Option<&GongzhuGame> {
        self.gongzhu.as_ref()
    }

    pub fn bluff(&self) -> Option<&BluffGame> {
        self.bluff.as_ref()
    }

    // ---------------- Landlord ----------------

    pub fn start_landlord(&mut self, participants: Vec<Participant>) -> Result<ActionOutcome, EngineError> {
        if self.landlord.is_some() {
            return Err(EngineError::SessionAlreadyActive(GameKind::Landlord));
        }
        let (game, outcome) = LandlordGame::start(participants, self.config.landlord, &mut self.rng)?;
        self.landlord = Some(game);
        Ok(outcome)
    }

    pub fn play_landlord<S: AsRef<str>>(
        &mut self,
        actor: ParticipantId,
        tokens: &[S],
    ) -> Result<ActionOutcome, EngineError> {
        let game = self
            .landlord
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::Landlord))?;
        let outcome = game.play(actor, tokens)?;
        retire(&mut self.landlord, GameKind::Landlord, &outcome);
        Ok(outcome)
    }

    pub fn pass_landlord(&mut self, actor: ParticipantId) -> Result<ActionOutcome, EngineError> {
        let game = self
            .landlord
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::Landlord))?;
        game.pass(actor)
    }

    // ---------------- Gongzhu ----------------

    pub fn start_gongzhu(&mut self, participants: Vec<Participant>) -> Result<ActionOutcome, EngineError> {
        if self.gongzhu.is_some() {
            return Err(EngineError::SessionAlreadyActive(GameKind::Gongzhu));
        }
        let (game, outcome) = GongzhuGame::start(participants, self.config.gongzhu, &mut self.rng)?;
        self.gongzhu = Some(game);
        Ok(outcome)
    }

    pub fn play_gongzhu(&mut self, actor: ParticipantId, token: &str) -> Result<ActionOutcome, EngineError> {
        let game = self
            .gongzhu
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::Gongzhu))?;
        let outcome = game.play(actor, token)?;
        retire(&mut self.gongzhu, GameKind::Gongzhu, &outcome);
        Ok(outcome)
    }

    // ---------------- Blind Man's Bluff ----------------

    pub fn start_bluff(&mut self, first: Participant, second: Participant) -> Result<ActionOutcome, EngineError> {
        if self.bluff.is_some() {
            return Err(EngineError::SessionAlreadyActive(GameKind::BlindMansBluff));
        }
        let (game, outcome) = BluffGame::start(first, second, self.config.bluff, &mut self.rng)?;
        self.bluff = Some(game);
        Ok(outcome)
    }

    pub fn raise(&mut self, actor: ParticipantId, amount: Option<Chips>) -> Result<ActionOutcome, EngineError> {
        let game = self
            .bluff
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::BlindMansBluff))?;
        game.raise(actor, amount)
    }

    pub fn call(&mut self, actor: ParticipantId) -> Result<ActionOutcome, EngineError> {
        let game = self
            .bluff
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::BlindMansBluff))?;
        let outcome = game.call(actor, &mut self.rng)?;
        retire(&mut self.bluff, GameKind::BlindMansBluff, &outcome);
        Ok(outcome)
    }

    pub fn fold(&mut self, actor: ParticipantId) -> Result<ActionOutcome, EngineError> {
        let game = self
            .bluff
            .as_mut()
            .ok_or(EngineError::NoActiveSession(GameKind::BlindMansBluff))?;
        let outcome = game.fold(actor, &mut self.rng)?;
        retire(&mut self.bluff, GameKind::BlindMansBluff, &outcome);
        Ok(outcome)
    }

    // ---------------- Общее ----------------

    /// Что участник видит у себя. Только чтение.
    pub fn hand_view(&self, id: ParticipantId) -> String {
        if let Some(hand) = self.landlord.as_ref().and_then(|g| g.hand_view(id)) {
            return format!("Your hand:\n{hand}");
        }
        if let Some(hand) = self.gongzhu.as_ref().and_then(|g| g.hand_view(id)) {
            return format!("Your hand:\n{hand}");
        }
        if let Some(view) = self.bluff.as_ref().and_then(|g| g.hand_view(id)) {
            return view;
        }
        NOT_IN_GAME.to_string()
    }

    /// Закрыть все игры. Безопасно вызывать в любой момент.
    pub fn end_all_games(&mut self) -> ActionOutcome {
        self.landlord = None;
        self.gongzhu = None;
        self.bluff = None;
        info!("all sessions reset");

        let mut outcome = ActionOutcome::new();
        outcome.announce("All games have been ended.");
        outcome
    }

    /// Единая точка входа: команда от участника → нужный движок.
    pub fn execute(&mut self, actor: &Participant, command: Command) -> Result<ActionOutcome, EngineError> {
        match command {
            Command::StartLandlord { participants } => self.start_landlord(participants),
            Command::Play { cards } => self.play_landlord(actor.id, &cards),
            Command::Pass => self.pass_landlord(actor.id),
            Command::StartGongzhu { participants } => self.start_gongzhu(participants),
            Command::PlayCard { card } => self.play_gongzhu(actor.id, &card),
            Command::StartBluff { first, second } => self.start_bluff(first, second),
            Command::Raise { amount } => self.raise(actor.id, amount),
            Command::Call => self.call(actor.id),
            Command::Fold => self.fold(actor.id),
            Command::HandView => {
                let mut outcome = ActionOutcome::new();
                outcome.whisper(actor, self.hand_view(actor.id));
                Ok(outcome)
            }
            Command::EndAllGames => Ok(self.end_all_games()),
        }
    }
}
