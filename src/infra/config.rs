//! Конфигурация игр.
//!
//! Значения по умолчанию совпадают с классическими правилами стола:
//! 3–5 игроков для Landlord/Gongzhu, стек 100 и анте 5 для Blind Man's Bluff.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Ограничения на число игроков за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeatLimits {
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for SeatLimits {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 5,
        }
    }
}

/// Ставки Blind Man's Bluff.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BluffStakes {
    /// Стартовый стек каждого игрока.
    pub starting_stack: Chips,
    /// Обязательная ставка в начале каждого раунда (и нижняя граница рейза).
    pub ante: Chips,
    /// Рейз, если сумма не указана.
    pub default_raise: Chips,
}

impl Default for BluffStakes {
    fn default() -> Self {
        Self {
            starting_stack: Chips(100),
            ante: Chips(5),
            default_raise: Chips(1),
        }
    }
}

/// Полный конфиг всех игр.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub landlord: SeatLimits,
    pub gongzhu: SeatLimits,
    pub bluff: BluffStakes,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, limits) in [("landlord", self.landlord), ("gongzhu", self.gongzhu)] {
            if limits.min_players < 2 || limits.min_players > limits.max_players {
                return Err(ConfigError::Invalid(format!(
                    "{name}: min_players={} max_players={}",
                    limits.min_players, limits.max_players
                )));
            }
        }
        if self.bluff.ante.is_zero() {
            return Err(ConfigError::Invalid("bluff: ante must be positive".into()));
        }
        if self.bluff.starting_stack < self.bluff.ante {
            return Err(ConfigError::Invalid(
                "bluff: starting_stack must cover the ante".into(),
            ));
        }
        Ok(())
    }
}
