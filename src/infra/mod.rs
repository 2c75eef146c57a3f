//! Инфраструктурный слой вокруг движков:
//! - конфиг игр;
//! - RNG-реализации для движка;
//! - выдача id участникам;
//! - контракт доставки сообщений;
//! - инициализация логов.

pub mod config;
pub mod ids;
pub mod logging;
pub mod messaging;
pub mod rng;

pub use config::{ConfigError, GameConfig};
pub use ids::*;
pub use messaging::*;
pub use rng::*;
