//! safeplace-app - Application state and orchestration for SafePlace
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] vocabulary, and the
//! single `update()` reducer every transition flows through. It also owns
//! TOML configuration loading, the icon fallback bookkeeping, and the
//! favicon availability probe.

pub mod config;
pub mod engine;
pub mod handler;
pub mod icons;
pub mod input_key;
pub mod message;
pub mod probe;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use icons::IconBook;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Focus, UiMode};
