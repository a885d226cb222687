//! Deterministic grid-based snake simulation.
//!
//! The host feeds one [`input::InputFrame`] and a frame delta per call to
//! [`game::Game::update`]; the core advances in fixed move intervals and
//! reports what changed as [`events::GameEvent`] values keyed by logical
//! grid position.

pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod rng;
pub mod scheduler;
pub mod script;
pub mod snake;

pub use config::GameConfig;
pub use error::ConfigError;
pub use events::{GameEvent, GameOverReason, SegmentRole};
pub use game::{Game, GameStatus};
pub use input::{Direction, InputFrame, KeyEdge};
pub use snake::{Body, Position};
