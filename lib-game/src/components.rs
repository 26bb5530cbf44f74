use macroquad::prelude::*;
use shipyard::{Component, Unique};

use crate::Bounds;

#[derive(Debug, Clone, Copy, Component)]
pub struct Transform {
    pub pos: Vec2,
}

impl Transform {
    pub fn from_pos(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn from_xy(x: f32, y: f32) -> Self {
        Self::from_pos(vec2(x, y))
    }
}

/// A clickable fish. The position in [Transform] is the
/// top-left corner of the fish.
#[derive(Debug, Clone, Copy, Component)]
pub struct Target {
    pub size: Vec2,
}

impl Target {
    pub fn bounds(&self, tf: &Transform) -> Bounds {
        Bounds {
            top_left: tf.pos,
            bottom_right: tf.pos + self.size,
        }
    }
}

/// Paint priority. Lower values are drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Component)]
#[repr(transparent)]
pub struct ZOrder(pub i32);

impl ZOrder {
    pub const BACKGROUND: Self = ZOrder(-100);
    pub const FISH: Self = ZOrder(1);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Unique)]
#[repr(transparent)]
pub struct Score(pub u32);

impl Score {
    /// The score as shown on the scoreboard: six digits, zero-padded.
    pub fn scoreboard(&self) -> String {
        format!("{:06}", self.0)
    }
}

/// Time spent in the play state, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Unique)]
#[repr(transparent)]
pub struct Playtime(pub f32);

impl Playtime {
    pub fn display(&self) -> String {
        let secs = self.0 as u32;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
