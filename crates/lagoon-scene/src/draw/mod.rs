//! Renderer-agnostic draw stream.
//!
//! Responsibilities:
//! - record what the scene wants on screen without touching a device context
//! - keep commands in paint order (scene sequence order IS z-order)
//!
//! The presenting shell replays the list each frame: blit sprites, honoring
//! the mirror flag, and draw the caption with whatever font it owns.

mod cmd;
mod list;

pub use cmd::{BlitCmd, DrawCmd, TextCmd};
pub use list::DrawList;
