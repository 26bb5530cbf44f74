use macroquad::prelude::*;
use shipyard::{Component, IntoIter, ViewMut};

use crate::Transform;

/// Moves a fish to its new spot over several ticks instead of
/// teleporting it there.
#[derive(Debug, Clone, Copy, Default, Component)]
pub struct Glide {
    track: Option<GlideTrack>,
}

#[derive(Debug, Clone, Copy)]
struct GlideTrack {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
}

impl Glide {
    pub fn is_active(&self) -> bool {
        self.track.is_some()
    }

    pub fn destination(&self) -> Option<Vec2> {
        self.track.map(|track| track.to)
    }

    /// Sends the entity towards `to`. A non-positive `duration`
    /// moves it there right away.
    pub fn start(&mut self, tf: &mut Transform, to: Vec2, duration: f32) {
        if duration <= 0.0 {
            tf.pos = to;
            self.track = None;
            return;
        }

        self.track = Some(GlideTrack {
            from: tf.pos,
            to,
            elapsed: 0.0,
            duration,
        });
    }

    fn advance(&mut self, tf: &mut Transform, dt: f32) {
        let Some(track) = self.track.as_mut() else {
            return;
        };

        track.elapsed += dt;
        if track.elapsed >= track.duration {
            tf.pos = track.to;
            self.track = None;
            return;
        }

        let t = track.elapsed / track.duration;
        tf.pos = track.from.lerp(track.to, t);
    }
}

pub fn update_glides(dt: f32, mut tf: ViewMut<Transform>, mut glide: ViewMut<Glide>) {
    for (mut tf, mut glide) in (&mut tf, &mut glide).iter() {
        glide.advance(&mut tf, dt);
    }
}
