use crate::coords::Vec2;
use crate::rng::SceneRandom;

use super::kind::SpeedRange;

/// Margin kept from the top and bottom scene edges before a vertical
/// bounce, in pixels.
const VERTICAL_MARGIN: f64 = 10.0;

/// Seconds of accumulated swim time between vertical drift nudges.
const DRIFT_INTERVAL: f64 = 1.0;

/// Magnitude of one vertical drift nudge, pixels/second.
const DRIFT_STEP: f64 = 5.0;

/// Bounds and randomness handed to item updates by the owning scene.
///
/// Always passed explicitly per call; items never hold a reference back to
/// the scene.
pub struct UpdateCtx<'a> {
    /// Scene extent in pixels (background width and height).
    pub bounds: Vec2,
    pub rng: &'a mut SceneRandom,
}

/// Swim state carried by fish items.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motion {
    /// Velocity in pixels/second.
    pub velocity: Vec2,
    /// Drift accumulator in seconds. Per-item state: a single shared timer
    /// would nudge every fish in the tank in lockstep.
    drift: f64,
}

impl Motion {
    /// Samples a starting velocity uniformly from `range`.
    pub fn sampled(range: SpeedRange, rng: &mut SceneRandom) -> Self {
        Self {
            velocity: Vec2::new(
                rng.range(range.min_x, range.max_x),
                rng.range(range.min_y, range.max_y),
            ),
            drift: 0.0,
        }
    }

    /// Advances one frame: move, bounce off the walls, accumulate drift.
    ///
    /// `half` is the sprite half-extent; bounces trigger when the sprite
    /// edge, not its center, meets a wall.
    pub(crate) fn step(
        &mut self,
        dt: f64,
        pos: &mut Vec2,
        mirror: &mut bool,
        half: Vec2,
        ctx: &mut UpdateCtx<'_>,
    ) {
        *pos = *pos + self.velocity * dt;

        // Horizontal bounces are direction-gated: only reverse while still
        // heading into the wall, so an item dragged past a boundary does
        // not jitter in place.
        if pos.x >= ctx.bounds.x - half.x && self.velocity.x > 0.0 {
            self.velocity.x = -self.velocity.x;
            *mirror = true; // now facing left
        } else if pos.x <= half.x && self.velocity.x < 0.0 {
            self.velocity.x = -self.velocity.x;
            *mirror = false; // facing right again
        }

        // Vertical bounce inside the margin zones. No mirror change.
        if pos.y <= VERTICAL_MARGIN + half.y
            || pos.y >= ctx.bounds.y - VERTICAL_MARGIN - half.y
        {
            self.velocity.y = -self.velocity.y;
        }

        self.drift += dt;
        if self.drift > DRIFT_INTERVAL {
            self.drift = 0.0;
            let nudge = if ctx.rng.coin() { DRIFT_STEP } else { -DRIFT_STEP };
            self.velocity.y += nudge;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::item::{Item, ItemKind};
    use crate::sprite::Sprite;

    use super::*;

    const BOUNDS: Vec2 = Vec2::new(1000.0, 800.0);

    fn fish(x: f64, y: f64, vx: f64, vy: f64, rng: &mut SceneRandom) -> Item {
        // 100x100 sprite: half-extent of 50 on both axes.
        let mut item = Item::new(ItemKind::Beta, Arc::new(Sprite::solid(100, 100)), rng);
        item.set_location(x, y);
        item.set_velocity(vx, vy);
        item
    }

    // ── horizontal bounce ─────────────────────────────────────────────────

    #[test]
    fn right_wall_reverses_and_mirrors() {
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(950.0, 400.0, 80.0, 0.0, &mut rng);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.01, &mut ctx);

        assert_eq!(item.velocity().unwrap().x, -80.0);
        assert!(item.mirror());
    }

    #[test]
    fn left_wall_reverses_and_unmirrors() {
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(50.0, 400.0, -80.0, 0.0, &mut rng);
        item.set_mirror(true);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.01, &mut ctx);

        assert_eq!(item.velocity().unwrap().x, 80.0);
        assert!(!item.mirror());
    }

    #[test]
    fn no_bounce_when_leaving_the_wall() {
        // Past the right wall but already swimming away from it.
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(960.0, 400.0, -80.0, 0.0, &mut rng);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.01, &mut ctx);

        assert_eq!(item.velocity().unwrap().x, -80.0);
        assert!(!item.mirror());
    }

    // ── vertical bounce ───────────────────────────────────────────────────

    #[test]
    fn top_margin_reverses_vertical_speed() {
        let mut rng = SceneRandom::from_seed(5);
        // Margin zone reaches down to y = 10 + 50.
        let mut item = fish(400.0, 55.0, 0.0, -30.0, &mut rng);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.01, &mut ctx);

        assert_eq!(item.velocity().unwrap().y, 30.0);
        assert!(!item.mirror());
    }

    #[test]
    fn bottom_margin_reverses_vertical_speed() {
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(400.0, 745.0, 0.0, 30.0, &mut rng);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.01, &mut ctx);

        assert_eq!(item.velocity().unwrap().y, -30.0);
    }

    // ── drift ─────────────────────────────────────────────────────────────

    #[test]
    fn drift_nudges_after_a_full_second() {
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(400.0, 400.0, 80.0, 0.0, &mut rng);

        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };
        item.update(0.6, &mut ctx);
        assert_eq!(item.velocity().unwrap().y, 0.0);

        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };
        item.update(0.6, &mut ctx);
        assert_eq!(item.velocity().unwrap().y.abs(), DRIFT_STEP);
    }

    #[test]
    fn drift_timers_are_independent_per_fish() {
        let mut rng = SceneRandom::from_seed(5);
        let mut a = fish(300.0, 400.0, 80.0, 0.0, &mut rng);
        let mut b = fish(600.0, 400.0, 80.0, 0.0, &mut rng);

        // A accumulates 1.2 s; B only 0.6 s. Only A may be nudged.
        for _ in 0..2 {
            let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };
            a.update(0.6, &mut ctx);
        }
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };
        b.update(0.6, &mut ctx);

        assert_eq!(a.velocity().unwrap().y.abs(), DRIFT_STEP);
        assert_eq!(b.velocity().unwrap().y, 0.0);
    }

    #[test]
    fn position_advances_by_velocity_times_dt() {
        let mut rng = SceneRandom::from_seed(5);
        let mut item = fish(400.0, 400.0, 50.0, -20.0, &mut rng);
        let mut ctx = UpdateCtx { bounds: BOUNDS, rng: &mut rng };

        item.update(0.5, &mut ctx);

        assert_eq!(item.pos(), Vec2::new(425.0, 390.0));
    }
}
