//! Aquarium scene engine.
//!
//! This crate owns the scene model: the closed set of placeable items,
//! their swim behavior, z-ordering and hit-testing, the renderer-agnostic
//! draw stream, and round-tripping through the `.aqua` file format.
//!
//! Window creation, paint events, timers, and file dialogs belong to the
//! presenting shell. The engine only consumes an elapsed-time delta per
//! frame and produces draw commands, which keeps every behavior here
//! deterministic under a seeded random source.

pub mod coords;
pub mod draw;
pub mod item;
pub mod logging;
pub mod persist;
pub mod rng;
pub mod scene;
pub mod sprite;

pub use draw::DrawList;
pub use item::{Item, ItemKind};
pub use persist::AquaError;
pub use rng::SceneRandom;
pub use scene::Scene;
pub use sprite::{Sprite, SpriteBank, SpriteError};
