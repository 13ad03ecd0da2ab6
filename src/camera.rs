//! Side-scrolling follow camera.

use glam::Vec2;

use crate::geom::Aabb;
use crate::level::TILE_SIZE;

/// Visible width of the view in world units.
pub const VIEW_WIDTH: f32 = 800.0;
/// Visible height of the view in world units.
pub const VIEW_HEIGHT: f32 = 600.0;

/// Horizontal smoothing applied per frame. Deliberately not dt-scaled: the
/// original tuning assumes a capped frame rate and is preserved as-is.
const FOLLOW_FACTOR: f32 = 0.1;

/// 2D camera that trails the player horizontally and stays clamped inside
/// the level. Vertical position is fixed at half the view height.
#[derive(Debug, Clone, Copy)]
pub struct Camera2D {
    pub width: f32,
    pub height: f32,
    center: Vec2,
    /// Level width in world units, used to clamp the viewport.
    level_width: f32,
}

impl Camera2D {
    pub fn new(level_width: f32) -> Self {
        Self {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
            center: Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0),
            level_width,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Ease the camera toward the player's horizontal center, then clamp so
    /// the viewport never leaves `[0, level_width]`; the left clamp takes
    /// precedence when both would apply.
    pub fn follow_player(&mut self, player_x: f32) {
        let target_x = player_x + TILE_SIZE / 2.0;
        let mut x = self.center.x + (target_x - self.center.x) * FOLLOW_FACTOR;

        let half_w = self.width / 2.0;
        if x - half_w < 0.0 {
            x = half_w;
        } else if x + half_w > self.level_width {
            x = self.level_width - half_w;
        }

        self.center = Vec2::new(x, self.height / 2.0);
    }

    /// World-space rectangle currently visible.
    pub fn visible_rect(&self) -> Aabb {
        let half = Vec2::new(self.width, self.height) * 0.5;
        Aabb::new(self.center - half, Vec2::new(self.width, self.height))
    }

    pub fn is_rect_visible(&self, rect: &Aabb) -> bool {
        self.visible_rect().intersects(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_camera() -> Camera2D {
        Camera2D::new(3200.0)
    }

    #[test]
    fn starts_centered_on_the_view() {
        let cam = wide_camera();
        assert_eq!(cam.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn follow_moves_a_fixed_fraction_per_frame() {
        let mut cam = wide_camera();
        cam.follow_player(1000.0);
        // target = 1016, start = 400, one step covers 10% of the gap
        let expected = 400.0 + (1016.0 - 400.0) * 0.1;
        assert!((cam.center().x - expected).abs() < 1e-4);
        assert!((cam.center().y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn repeated_follow_converges_on_target() {
        let mut cam = wide_camera();
        for _ in 0..200 {
            cam.follow_player(1000.0);
        }
        assert!((cam.center().x - 1016.0).abs() < 0.5);
    }

    #[test]
    fn clamps_to_left_level_edge() {
        let mut cam = wide_camera();
        for _ in 0..100 {
            cam.follow_player(-2000.0);
        }
        assert!((cam.center().x - 400.0).abs() < 1e-4);
    }

    #[test]
    fn clamps_to_right_level_edge() {
        let mut cam = wide_camera();
        for _ in 0..500 {
            cam.follow_player(10_000.0);
        }
        assert!((cam.center().x - (3200.0 - 400.0)).abs() < 1e-4);
    }

    #[test]
    fn narrow_level_pins_camera_at_left_rule() {
        // Level narrower than the view: the left clamp takes precedence
        // whenever easing pulls the camera leftward.
        let mut cam = Camera2D::new(320.0);
        cam.follow_player(0.0);
        assert!((cam.center().x - 400.0).abs() < 1e-6);
    }

    #[test]
    fn visible_rect_matches_view_size() {
        let cam = wide_camera();
        let rect = cam.visible_rect();
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.size, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn rect_visibility() {
        let cam = wide_camera();
        assert!(cam.is_rect_visible(&Aabb::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0))));
        assert!(!cam.is_rect_visible(&Aabb::new(Vec2::new(2000.0, 100.0), Vec2::splat(32.0))));
    }
}
