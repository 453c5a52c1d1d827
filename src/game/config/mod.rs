//! Config Module
//!
//! JSON-loadable tuning for a play session.

pub mod game_config;

pub use game_config::GameConfig;
