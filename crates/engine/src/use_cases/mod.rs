//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod game;

pub use game::{GameEngine, GameError, SessionState};
