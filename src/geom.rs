//! Axis-aligned bounding boxes for collision tests.
//!
//! The simulation uses a Y-down coordinate system: `min` is the top-left
//! corner and gravity points toward +Y.

use glam::Vec2;

/// Axis-aligned rectangle, stored as top-left corner + size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test. Touching edges do not count as an intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Penetration depths of `self` into `other` along each side of `other`,
    /// valid only when the boxes intersect.
    ///
    /// `left` is how far self's right edge reaches past other's left edge,
    /// `top` how far self's bottom edge reaches past other's top edge, and
    /// so on. The smallest depth picks the resolution axis.
    pub fn penetration(&self, other: &Aabb) -> Penetration {
        Penetration {
            left: self.max().x - other.min.x,
            right: other.max().x - self.min.x,
            top: self.max().y - other.min.y,
            bottom: other.max().y - self.min.y,
        }
    }
}

/// Directional overlap depths from one AABB into another.
#[derive(Debug, Clone, Copy)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    pub fn min_depth(&self) -> f32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}
