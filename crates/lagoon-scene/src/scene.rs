use std::sync::Arc;

use crate::coords::Vec2;
use crate::draw::DrawList;
use crate::item::{Item, ItemKind, UpdateCtx};
use crate::rng::SceneRandom;
use crate::sprite::{Sprite, SpriteBank};

/// Every newly added item starts here, whatever position it held before.
const INITIAL_POS: Vec2 = Vec2::new(200.0, 200.0);

/// Caption drawn over the background.
const CAPTION: &str = "Under the Sea!";
const CAPTION_POS: Vec2 = Vec2::new(10.0, 10.0);

/// The aquarium: background, caption, and the ordered item collection.
///
/// Sequence order is z-order. The last item draws topmost and wins
/// hit-test ties; `bring_to_front` moves an item to the end.
///
/// Items are addressed by transient index into the sequence. Any
/// structural mutation (`add`, `spawn`, `bring_to_front`, `clear`, `load`)
/// invalidates previously returned indices, so an input layer tracking a
/// grabbed item must re-resolve after such calls — it holds an index, never
/// an owning handle.
pub struct Scene {
    background: Arc<Sprite>,
    sprites: SpriteBank,
    items: Vec<Item>,
    rng: SceneRandom,
}

impl Scene {
    /// Creates an empty scene. Width and height derive from `background`
    /// and never change afterwards.
    pub fn new(background: Arc<Sprite>, sprites: SpriteBank) -> Self {
        Self {
            background,
            sprites,
            items: Vec::new(),
            rng: SceneRandom::from_entropy(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.background.size().x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.background.size().y
    }

    /// Items in z-order, bottom to top.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> &mut Item {
        &mut self.items[index]
    }

    /// The shared random source, exposed for deterministic tests.
    pub fn rng_mut(&mut self) -> &mut SceneRandom {
        &mut self.rng
    }

    /// Resets the random source to a known seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Adds an item at the fixed initial position, topmost. Returns its
    /// index.
    pub fn add(&mut self, mut item: Item) -> usize {
        item.set_location(INITIAL_POS.x, INITIAL_POS.y);
        log::debug!("{:?} added at {}, {}", item.kind(), item.x(), item.y());
        self.items.push(item);
        self.items.len() - 1
    }

    /// Constructs an item of `kind` from the sprite bank and adds it.
    /// Returns `None` when no sprite is registered for the kind.
    pub fn spawn(&mut self, kind: ItemKind) -> Option<usize> {
        let Some(sprite) = self.sprites.get(kind) else {
            log::warn!("no sprite registered for {:?}", kind);
            return None;
        };
        let item = Item::new(kind, sprite, &mut self.rng);
        Some(self.add(item))
    }

    /// Index of the topmost item under `(x, y)`, scanning front to back.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, item)| item.hit_test(x, y))
            .map(|(index, _)| index)
    }

    /// Moves the item to the top of the z-order and returns its new index.
    /// Out-of-range indices are a no-op returning `None`.
    pub fn bring_to_front(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.items.push(item);
        Some(self.items.len() - 1)
    }

    /// Drag support: overwrites an item's position, no bounds check.
    /// Out-of-range indices are ignored.
    pub fn set_location(&mut self, index: usize, x: f64, y: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_location(x, y);
        }
    }

    /// Advances every item by `elapsed` seconds. Items do not interact, so
    /// sequence order does not affect the outcome.
    pub fn update(&mut self, elapsed: f64) {
        let mut ctx = UpdateCtx {
            bounds: self.background.size(),
            rng: &mut self.rng,
        };
        for item in &mut self.items {
            item.update(elapsed, &mut ctx);
        }
    }

    /// Records the frame: background at the origin, the caption, then every
    /// item bottom to top.
    pub fn draw(&self, list: &mut DrawList) {
        list.push_blit(Arc::clone(&self.background), Vec2::zero(), false);
        list.push_text(CAPTION_POS, CAPTION);
        for item in &self.items {
            item.draw(list);
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;

    fn test_scene() -> Scene {
        let mut bank = SpriteBank::new();
        for kind in ItemKind::ALL {
            bank.insert(kind, Arc::new(Sprite::solid(100, 100)));
        }
        let mut scene = Scene::new(Arc::new(Sprite::solid(1024, 800)), bank);
        scene.reseed(1238197374);
        scene
    }

    // ── add / spawn ───────────────────────────────────────────────────────

    #[test]
    fn add_forces_the_initial_position() {
        let mut scene = test_scene();
        let mut item = Item::new(
            ItemKind::Castle,
            Arc::new(Sprite::solid(10, 10)),
            scene.rng_mut(),
        );
        item.set_location(900.0, 700.0);

        let index = scene.add(item);

        assert_eq!(index, 0);
        assert_eq!(scene.items()[0].pos(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn spawn_appends_topmost() {
        let mut scene = test_scene();
        scene.spawn(ItemKind::Castle).unwrap();
        let index = scene.spawn(ItemKind::Beta).unwrap();
        assert_eq!(index, 1);
        assert_eq!(scene.items()[1].kind(), ItemKind::Beta);
    }

    #[test]
    fn spawn_without_a_sprite_is_refused() {
        let mut scene = Scene::new(Arc::new(Sprite::solid(640, 480)), SpriteBank::new());
        assert_eq!(scene.spawn(ItemKind::Dory), None);
        assert!(scene.items().is_empty());
    }

    // ── hit_test ──────────────────────────────────────────────────────────

    #[test]
    fn empty_scene_hits_nothing() {
        let scene = test_scene();
        assert_eq!(scene.hit_test(100.0, 200.0), None);
    }

    #[test]
    fn hit_finds_the_item_at_its_location() {
        let mut scene = test_scene();
        let index = scene.spawn(ItemKind::Beta).unwrap();
        scene.set_location(index, 100.0, 200.0);

        assert_eq!(scene.hit_test(100.0, 200.0), Some(index));
        assert_eq!(scene.hit_test(500.0, 500.0), None);
    }

    #[test]
    fn overlap_resolves_to_the_most_recent_item() {
        let mut scene = test_scene();
        let first = scene.spawn(ItemKind::Beta).unwrap();
        let second = scene.spawn(ItemKind::Beta).unwrap();
        scene.set_location(first, 100.0, 200.0);
        scene.set_location(second, 100.0, 200.0);

        assert_eq!(scene.hit_test(100.0, 200.0), Some(second));
    }

    // ── bring_to_front ────────────────────────────────────────────────────

    #[test]
    fn bring_to_front_moves_to_the_end() {
        let mut scene = test_scene();
        let first = scene.spawn(ItemKind::Beta).unwrap();
        scene.spawn(ItemKind::Nemo).unwrap();
        scene.set_location(first, 100.0, 200.0);

        let moved = scene.bring_to_front(first).unwrap();

        assert_eq!(moved, 1);
        assert_eq!(scene.items().len(), 2);
        assert_eq!(scene.items()[1].kind(), ItemKind::Beta);
        assert_eq!(scene.items()[1].pos(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn bring_to_front_wins_subsequent_overlap_ties() {
        let mut scene = test_scene();
        let first = scene.spawn(ItemKind::Beta).unwrap();
        let second = scene.spawn(ItemKind::Nemo).unwrap();
        scene.set_location(first, 100.0, 200.0);
        scene.set_location(second, 100.0, 200.0);

        let moved = scene.bring_to_front(first).unwrap();

        assert_eq!(scene.hit_test(100.0, 200.0), Some(moved));
        assert_eq!(scene.items()[moved].kind(), ItemKind::Beta);
    }

    #[test]
    fn bring_to_front_out_of_range_is_a_no_op() {
        let mut scene = test_scene();
        scene.spawn(ItemKind::Beta).unwrap();
        assert_eq!(scene.bring_to_front(5), None);
        assert_eq!(scene.items().len(), 1);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_order_is_background_caption_then_items() {
        let mut scene = test_scene();
        scene.spawn(ItemKind::Castle).unwrap();
        scene.spawn(ItemKind::Beta).unwrap();

        let mut list = DrawList::new();
        scene.draw(&mut list);

        let items = list.items();
        assert_eq!(items.len(), 4);
        assert!(matches!(&items[0], DrawCmd::Blit(b) if b.top_left == Vec2::zero()));
        assert!(matches!(&items[1], DrawCmd::Text(t) if t.text == "Under the Sea!"));
        assert!(matches!(&items[2], DrawCmd::Blit(_)));
        assert!(matches!(&items[3], DrawCmd::Blit(_)));
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_moves_fish_but_not_decor() {
        let mut scene = test_scene();
        let castle = scene.spawn(ItemKind::Castle).unwrap();
        let beta = scene.spawn(ItemKind::Beta).unwrap();

        scene.update(0.1);

        assert_eq!(scene.items()[castle].pos(), Vec2::new(200.0, 200.0));
        assert!(scene.items()[beta].pos() != Vec2::new(200.0, 200.0));
    }

    #[test]
    fn clear_empties_the_scene() {
        let mut scene = test_scene();
        scene.spawn(ItemKind::Beta).unwrap();
        scene.spawn(ItemKind::Dory).unwrap();
        scene.clear();
        assert!(scene.items().is_empty());
    }

    #[test]
    fn dimensions_come_from_the_background() {
        let scene = test_scene();
        assert_eq!(scene.width(), 1024.0);
        assert_eq!(scene.height(), 800.0);
    }
}
