use std::sync::Arc;

use crate::coords::Vec2;
use crate::sprite::Sprite;

/// Sprite blit payload.
#[derive(Debug, Clone)]
pub struct BlitCmd {
    pub sprite: Arc<Sprite>,
    /// Top-left corner of the blit in scene pixels.
    pub top_left: Vec2,
    /// Flip horizontally at blit time. The source sprite is never modified;
    /// mirroring is a property of the command, not of the pixels.
    pub mirrored: bool,
}

/// Caption text payload. Font and color selection belong to the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub origin: Vec2,
    pub text: String,
}

/// One recorded draw operation.
///
/// Extending the stream:
/// - add a payload struct above
/// - add a variant here
/// - add a push helper on `DrawList`
#[derive(Debug, Clone)]
pub enum DrawCmd {
    Blit(BlitCmd),
    Text(TextCmd),
}
