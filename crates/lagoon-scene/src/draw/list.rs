use std::sync::Arc;

use crate::coords::Vec2;
use crate::sprite::Sprite;

use super::cmd::{BlitCmd, DrawCmd, TextCmd};

/// Recorded draw stream for a frame.
///
/// Commands replay strictly in push order. The scene pushes the background,
/// the caption, then every item back-to-front, so later commands visually
/// occlude earlier ones without any sorting pass.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a sprite blit.
    #[inline]
    pub fn push_blit(&mut self, sprite: Arc<Sprite>, top_left: Vec2, mirrored: bool) {
        self.push(DrawCmd::Blit(BlitCmd { sprite, top_left, mirrored }));
    }

    /// Records a caption at `origin`.
    #[inline]
    pub fn push_text(&mut self, origin: Vec2, text: impl Into<String>) {
        self.push(DrawCmd::Text(TextCmd { origin, text: text.into() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_push_order() {
        let mut list = DrawList::new();
        list.push_blit(Arc::new(Sprite::solid(2, 2)), Vec2::zero(), false);
        list.push_text(Vec2::new(10.0, 10.0), "Under the Sea!");
        list.push_blit(Arc::new(Sprite::solid(2, 2)), Vec2::new(5.0, 5.0), true);

        let items = list.items();
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], DrawCmd::Blit(b) if !b.mirrored));
        assert!(matches!(&items[1], DrawCmd::Text(t) if t.text == "Under the Sea!"));
        assert!(matches!(&items[2], DrawCmd::Blit(b) if b.mirrored));
    }

    #[test]
    fn clear_empties_the_stream() {
        let mut list = DrawList::new();
        list.push_text(Vec2::zero(), "x");
        list.clear();
        assert!(list.items().is_empty());
    }
}
