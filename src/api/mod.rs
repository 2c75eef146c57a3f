//! Внешний API движков.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние (старт игры, ход, ставка);
//! - запросы (queries.rs): только чтение;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use errors::*;
pub use queries::*;
