use std::sync::Arc;

use crate::coords::{Rect, Vec2};
use crate::draw::DrawList;
use crate::rng::SceneRandom;
use crate::sprite::Sprite;

use super::kind::ItemKind;
use super::swim::{Motion, UpdateCtx};

/// A placeable object in the scene: decor or fish.
///
/// Position is the sprite's center in scene pixels and defaults to the
/// origin; the owning scene overwrites it on add. Decor carries no motion
/// state, so `update` is a no-op for it.
#[derive(Debug, Clone)]
pub struct Item {
    kind: ItemKind,
    pos: Vec2,
    mirror: bool,
    sprite: Arc<Sprite>,
    motion: Option<Motion>,
}

impl Item {
    /// Creates an item of `kind`. Fish sample their starting velocity from
    /// `rng` over the kind's preset range; decor consumes no draws.
    pub fn new(kind: ItemKind, sprite: Arc<Sprite>, rng: &mut SceneRandom) -> Self {
        let motion = kind.speed_range().map(|range| Motion::sampled(range, rng));
        Self {
            kind,
            pos: Vec2::zero(),
            mirror: false,
            sprite,
            motion,
        }
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn mirror(&self) -> bool {
        self.mirror
    }

    #[inline]
    pub fn sprite(&self) -> &Arc<Sprite> {
        &self.sprite
    }

    /// Current velocity in pixels/second; `None` for decor.
    #[inline]
    pub fn velocity(&self) -> Option<Vec2> {
        self.motion.map(|m| m.velocity)
    }

    /// Unconditional overwrite. Callers enforce bounds: the swim update
    /// bounces off the walls itself, and drag follows the pointer wherever
    /// it goes.
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.pos = Vec2::new(x, y);
    }

    /// No-op when the flag is unchanged.
    pub fn set_mirror(&mut self, mirror: bool) {
        if mirror != self.mirror {
            self.mirror = mirror;
        }
    }

    /// Explicit velocity override. Ignored for decor.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        if let Some(motion) = &mut self.motion {
            motion.velocity = Vec2::new(vx, vy);
        }
    }

    /// Advances this item by `dt` seconds. Decor never moves.
    pub fn update(&mut self, dt: f64, ctx: &mut UpdateCtx<'_>) {
        if let Some(motion) = &mut self.motion {
            let half = self.sprite.size() * 0.5;
            motion.step(dt, &mut self.pos, &mut self.mirror, half, ctx);
        }
    }

    /// Records this item as a blit centered on its position.
    pub fn draw(&self, list: &mut DrawList) {
        let top_left = self.pos - self.sprite.size() * 0.5;
        list.push_blit(Arc::clone(&self.sprite), top_left, self.mirror);
    }

    /// Bounding-box test, then per-pixel transparency against the source
    /// image. The source is sampled even while the item displays mirrored,
    /// preserving the editor's long-standing pick behavior.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        let bounds = Rect::from_center_size(self.pos, self.sprite.size());
        let p = Vec2::new(x, y);
        if !bounds.contains(p) {
            return false;
        }
        // Scene space -> bitmap-local space.
        let local = p - bounds.min();
        self.sprite.is_opaque(local.x as u32, local.y as u32)
    }
}
