use macroquad::prelude::*;

/// An axis-aligned box given by its top-left and bottom-right
/// corners in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            top_left: vec2(left, top),
            bottom_right: vec2(right, bottom),
        }
    }

    /// Checks if the point lies strictly inside the box.
    /// Points on the edges are not hits. A box with swapped
    /// corners contains no points.
    pub fn is_hit(self, point: Vec2) -> bool {
        self.top_left.x < point.x
            && point.x < self.bottom_right.x
            && self.top_left.y < point.y
            && point.y < self.bottom_right.y
    }
}

pub fn is_hit(bounds: Bounds, px: f32, py: f32) -> bool {
    bounds.is_hit(vec2(px, py))
}
