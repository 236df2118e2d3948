//! Geometry types shared across the scene model and the draw stream.
//!
//! Canonical space:
//! - Scene pixels, matching the background image
//! - Origin top-left
//! - +X right, +Y down
//!
//! Item positions are center-anchored; rectangles convert between the
//! center-anchored and top-left views.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
