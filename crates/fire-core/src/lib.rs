//! Core streak-fire particle engine.
//!
//! Platform-independent: the embedder supplies a [`Host`] (container
//! measurement, surface acquisition, frame scheduling) and the engine owns
//! everything it acquires through it. The wasm frontend lives in the
//! `fire-web` crate; native tests drive the engine against mock hosts.

pub mod constants;
pub mod engine;
pub mod error;
pub mod host;
pub mod particle;

pub use engine::{FireConfig, FireEngine};
pub use error::EngineError;
pub use host::{Bounds, Host, Surface};
pub use particle::{Particle, Tier};
