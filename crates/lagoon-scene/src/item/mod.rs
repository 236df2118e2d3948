//! The item model: the closed set of placeable scene objects.
//!
//! One concrete type, `Item`, carries the state every object shares
//! (position, mirror flag, sprite); fish kinds additionally carry `Motion`.
//! Behavior differences dispatch on `ItemKind` with exhaustive matches —
//! the set is closed on purpose, because the scene file format enumerates
//! its type tags.

mod base;
mod kind;
mod swim;

pub use base::Item;
pub use kind::{ItemKind, SpeedRange};
pub use swim::{Motion, UpdateCtx};
