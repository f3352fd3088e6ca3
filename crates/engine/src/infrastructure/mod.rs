//! Infrastructure implementations.
//!
//! Contains port definitions and their implementations for time, randomness,
//! content and environment settings.

pub mod clock;
pub mod content;
pub mod ports;
pub mod settings;
