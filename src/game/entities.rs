//! Game Entities
//!
//! The three actors of a run: the Explorer the player controls, the
//! Monkey that patrols the ground, and the Coin worth bonus points.
//! Entities are plain data structs with their own tuning constants;
//! orchestration lives in the session.
//!
//! All positions are world space: y-up, origin at the bottom-left of
//! the viewport, anchored at each sprite's bottom-left corner.

use rand::Rng;

use crate::viewport::Viewport;
use super::collision::BoundingBox;

// =============================================================================
// Explorer
// =============================================================================

pub const EXPLORER_SIZE: f32 = 100.0;
/// Fixed horizontal spawn offset from the left edge
pub const EXPLORER_START_X: f32 = 100.0;
/// Applied to `velocity_y` once per tick. Tuned for feel, not realism.
pub const GRAVITY: f32 = -1.0;
/// Vertical launch speed of a jump, in units per tick
pub const JUMP_VELOCITY: f32 = 18.0;
/// Horizontal walk speed, in units per tick
pub const MOVE_SPEED: f32 = 5.0;

/// The player character
#[derive(Debug, Clone)]
pub struct Explorer {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    pub is_jumping: bool,
    /// Ground rest height; the vertical update clamps here
    pub initial_y: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Explorer {
    pub fn new(viewport: Viewport) -> Self {
        let ground = viewport.ground_y();
        Self {
            x: EXPLORER_START_X,
            y: ground,
            width: EXPLORER_SIZE,
            height: EXPLORER_SIZE,
            velocity_y: 0.0,
            is_jumping: false,
            initial_y: ground,
            moving_left: false,
            moving_right: false,
        }
    }

    /// Begin a jump. No-op while already airborne.
    pub fn jump(&mut self) {
        if self.is_jumping {
            return;
        }
        self.velocity_y = JUMP_VELOCITY;
        self.is_jumping = true;
    }

    /// One tick of ballistic motion: integrate gravity, then clamp at
    /// the ground line.
    pub fn update_vertical(&mut self) {
        self.velocity_y += GRAVITY;
        self.y += self.velocity_y;
        if self.y <= self.initial_y {
            self.y = self.initial_y;
            self.is_jumping = false;
        }
    }

    /// One tick of walking. The two direction flags are independent;
    /// each is clamped at its own edge of the viewport.
    pub fn update_horizontal(&mut self, viewport: Viewport) {
        if self.moving_left && self.x > 0.0 {
            self.x -= MOVE_SPEED;
        }
        if self.moving_right && self.x + self.width < viewport.width {
            self.x += MOVE_SPEED;
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

// =============================================================================
// Monkey
// =============================================================================

pub const MONKEY_SIZE: f32 = 80.0;
/// Patrol speed, in units per tick (leftward)
pub const MONKEY_SPEED: f32 = 5.0;

/// The obstacle. Marches right-to-left along the ground and wraps
/// back to the right edge once fully off screen.
#[derive(Debug, Clone)]
pub struct Monkey {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Monkey {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            x: viewport.width,
            y: viewport.ground_y(),
            width: MONKEY_SIZE,
            height: MONKEY_SIZE,
        }
    }

    /// One tick of patrol movement
    pub fn advance(&mut self, viewport: Viewport) {
        self.x -= MONKEY_SPEED;
        if self.x + self.width < 0.0 {
            self.x = viewport.width;
        }
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

// =============================================================================
// Coin
// =============================================================================

pub const COIN_SIZE: f32 = 50.0;

/// Horizontal placement band: whole-unit offsets from the viewport edges
pub const COIN_MIN_X: i32 = 100;
pub const COIN_RIGHT_MARGIN: i32 = 80;
/// Vertical placement band, fixed near the ground
pub const COIN_MIN_Y: i32 = 80;
pub const COIN_MAX_Y: i32 = 100;

/// The collectible. Sits still until grabbed, then jumps to a fresh
/// random spot inside the placement band.
#[derive(Debug, Clone)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Coin {
    pub fn new() -> Self {
        Self {
            x: COIN_MIN_X as f32,
            y: COIN_MIN_Y as f32,
            width: COIN_SIZE,
            height: COIN_SIZE,
        }
    }

    /// Move to a uniformly random whole-unit position in the band.
    /// Both bounds are inclusive.
    pub fn place(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let max_x = (viewport.width as i32 - COIN_RIGHT_MARGIN).max(COIN_MIN_X);
        self.x = rng.gen_range(COIN_MIN_X..=max_x) as f32;
        self.y = rng.gen_range(COIN_MIN_Y..=COIN_MAX_Y) as f32;
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_viewport() -> Viewport {
        Viewport::new(800.0, 480.0)
    }

    #[test]
    fn test_explorer_spawns_on_ground() {
        let explorer = Explorer::new(test_viewport());
        assert_eq!(explorer.x, 100.0);
        assert_eq!(explorer.y, 48.0);
        assert_eq!(explorer.initial_y, 48.0);
        assert!(!explorer.is_jumping);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut explorer = Explorer::new(test_viewport());
        explorer.jump();
        assert!(explorer.is_jumping);
        assert_eq!(explorer.velocity_y, JUMP_VELOCITY);

        let mut peak = explorer.y;
        for _ in 0..200 {
            explorer.update_vertical();
            peak = peak.max(explorer.y);
            assert!(explorer.y >= explorer.initial_y);
        }
        assert!(peak > explorer.initial_y + 100.0);
        assert_eq!(explorer.y, explorer.initial_y);
        assert!(!explorer.is_jumping);
    }

    #[test]
    fn test_grounded_update_stays_clamped() {
        let mut explorer = Explorer::new(test_viewport());
        for _ in 0..10 {
            explorer.update_vertical();
            assert_eq!(explorer.y, explorer.initial_y);
            assert!(!explorer.is_jumping);
        }
    }

    #[test]
    fn test_jump_is_no_op_while_airborne() {
        let mut explorer = Explorer::new(test_viewport());
        explorer.jump();
        for _ in 0..5 {
            explorer.update_vertical();
        }
        let velocity_before = explorer.velocity_y;
        let y_before = explorer.y;
        explorer.jump();
        assert_eq!(explorer.velocity_y, velocity_before);
        assert_eq!(explorer.y, y_before);
    }

    #[test]
    fn test_walk_left_stops_at_zero() {
        let vp = test_viewport();
        let mut explorer = Explorer::new(vp);
        explorer.moving_left = true;
        for _ in 0..100 {
            let before = explorer.x;
            explorer.update_horizontal(vp);
            // Strictly leftward until pinned at the edge
            assert!(explorer.x < before || before == 0.0);
            assert!(explorer.x >= 0.0);
        }
        assert_eq!(explorer.x, 0.0);
    }

    #[test]
    fn test_walk_right_stops_at_viewport_edge() {
        let vp = test_viewport();
        let mut explorer = Explorer::new(vp);
        explorer.moving_right = true;
        for _ in 0..300 {
            explorer.update_horizontal(vp);
            assert!(explorer.x + explorer.width <= vp.width);
        }
        assert_eq!(explorer.x + explorer.width, vp.width);
    }

    #[test]
    fn test_both_direction_flags_cancel_out() {
        let vp = test_viewport();
        let mut explorer = Explorer::new(vp);
        explorer.moving_left = true;
        explorer.moving_right = true;
        explorer.update_horizontal(vp);
        // Away from both edges the two moves cancel
        assert_eq!(explorer.x, EXPLORER_START_X);

        // Pinned at the left edge, only the rightward move applies
        explorer.x = 0.0;
        explorer.update_horizontal(vp);
        assert_eq!(explorer.x, MOVE_SPEED);
    }

    #[test]
    fn test_monkey_wraps_to_right_edge() {
        let vp = test_viewport();
        let mut monkey = Monkey::new(vp);
        monkey.x = -(MONKEY_SIZE + 1.0);
        assert!(monkey.is_off_screen());
        monkey.advance(vp);
        assert_eq!(monkey.x, vp.width);
    }

    #[test]
    fn test_monkey_marches_left() {
        let vp = test_viewport();
        let mut monkey = Monkey::new(vp);
        let start = monkey.x;
        monkey.advance(vp);
        assert_eq!(monkey.x, start - MONKEY_SPEED);
    }

    #[test]
    fn test_coin_placement_stays_in_band() {
        let vp = test_viewport();
        let mut coin = Coin::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            coin.place(vp, &mut rng);
            assert!(coin.x >= 100.0 && coin.x <= vp.width - 80.0);
            assert!(coin.y >= 80.0 && coin.y <= 100.0);
            // Placement works in whole units
            assert_eq!(coin.x.fract(), 0.0);
            assert_eq!(coin.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_coin_band_covers_both_bounds() {
        let vp = test_viewport();
        let mut coin = Coin::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut saw_min_y = false;
        let mut saw_max_y = false;
        for _ in 0..10_000 {
            coin.place(vp, &mut rng);
            saw_min_y |= coin.y == 80.0;
            saw_max_y |= coin.y == 100.0;
        }
        assert!(saw_min_y && saw_max_y);
    }
}
