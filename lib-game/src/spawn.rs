use std::fmt;

use macroquad::math::{UVec2, Vec2, uvec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use shipyard::Unique;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The target does not fit into the playfield with the
/// one-target margin kept on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnError {
    pub axis: Axis,
    pub field: u32,
    pub target: u32,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target {:?} size {} needs a field of at least {}, but the field is {}",
            self.axis,
            self.target,
            u64::from(self.target) * 2,
            self.field,
        )
    }
}

impl std::error::Error for SpawnError {}

/// The range of valid top-left corners for a target.
/// Both ranges are inclusive: `0..=max.x` and `0..=max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRegion {
    max: UVec2,
}

impl SpawnRegion {
    pub fn new(field: UVec2, target: UVec2) -> Result<Self, SpawnError> {
        Ok(Self {
            max: uvec2(
                Self::axis_max(Axis::X, field.x, target.x)?,
                Self::axis_max(Axis::Y, field.y, target.y)?,
            ),
        })
    }

    fn axis_max(axis: Axis, field: u32, target: u32) -> Result<u32, SpawnError> {
        target
            .checked_mul(2)
            .and_then(|margin| field.checked_sub(margin))
            .ok_or(SpawnError {
                axis,
                field,
                target,
            })
    }

    pub fn max(&self) -> UVec2 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> UVec2 {
        let x = rng.random_range(0..=self.max.x);
        let y = rng.random_range(0..=self.max.y);

        uvec2(x, y)
    }
}

/// Picks a random top-left corner for a target of size `target`
/// inside a field of size `field`.
pub fn spawn<R: Rng + ?Sized>(field: UVec2, target: UVec2, rng: &mut R) -> Result<UVec2, SpawnError> {
    SpawnRegion::new(field, target).map(|region| region.sample(rng))
}

/// Picks new fish positions. Lives in the world as a unique, so the
/// systems moving fish share one random stream.
#[derive(Debug, Clone, Unique)]
pub struct Spawner {
    region: SpawnRegion,
    rng: Pcg32,
    pub glide_time: f32,
}

impl Spawner {
    pub fn new(region: SpawnRegion, seed: u64, glide_time: f32) -> Self {
        Self {
            region,
            rng: Pcg32::seed_from_u64(seed),
            glide_time,
        }
    }

    pub fn next_pos(&mut self) -> Vec2 {
        self.region.sample(&mut self.rng).as_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_pins_to_origin() {
        let region = SpawnRegion::new(uvec2(128, 64), uvec2(64, 32)).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);

        assert_eq!(region.max(), uvec2(0, 0));
        for _ in 0..16 {
            assert_eq!(region.sample(&mut rng), uvec2(0, 0));
        }
    }

    #[test]
    fn test_margin_overflow_rejected() {
        let err = SpawnRegion::new(uvec2(100, 100), uvec2(u32::MAX, 1)).unwrap_err();

        assert_eq!(err.axis, Axis::X);
    }

    #[test]
    fn test_error_names_axis() {
        let err = SpawnRegion::new(uvec2(1600, 900), uvec2(64, 451)).unwrap_err();

        assert_eq!(
            err,
            SpawnError {
                axis: Axis::Y,
                field: 900,
                target: 451,
            }
        );
        assert!(err.to_string().contains("902"));
    }
}
