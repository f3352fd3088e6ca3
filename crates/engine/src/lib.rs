//! CLIsland Engine library.
//!
//! This crate contains the game engine for CLIsland, a villa dating sim.
//!
//! ## Structure
//!
//! - `entities/` - Rule components (requirements, effects, relationships)
//! - `use_cases/` - The game engine state machine
//! - `stores/` - In-memory game state storage
//! - `infrastructure/` - Ports, content catalog, settings, clock/random
//! - `commands` - Line commands for the interactive front end
//! - `app` - Application composition

pub mod app;
pub mod commands;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
