//! Space Defender - a scrolling arcade shooter simulation.
//!
//! Core modules:
//! - `geometry`: axis-aligned rectangle tests
//! - `entities` / `store`: game data and the entity collections
//! - `spawn`, `motion`, `collision`: per-tick systems
//! - `compute`: tick orchestration and the running/paused/game-over machine
//! - `render`, `score_store`, `driver`: injected capabilities (drawing,
//!   high-score persistence, frame scheduling)
//! - `session`: the "advance one frame" entry point tying it all together

pub mod collision;
pub mod compute;
pub mod config;
pub mod driver;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod render;
pub mod score_store;
pub mod session;
pub mod spawn;
pub mod store;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use session::Session;
