use lib_game::*;
use macroquad::prelude::*;
use shipyard::{EntityId, Get, UniqueView, View, ViewMut, World};

pub const SEED: u64 = 0xF15E;

/// Builds a world with one fish per position, all of size `size`.
/// The fish are moved to the given positions after the initial
/// random spawn.
#[allow(dead_code)]
pub fn world_with_fish(poses: &[Vec2], size: u32, glide_time: f32) -> (World, Vec<EntityId>) {
    let mut cfg = GameCfg::default();
    cfg.fish.count = poses.len() as u32;
    cfg.fish.width = size;
    cfg.fish.height = size;
    cfg.fish.glide_time = glide_time;

    let mut world = World::new();
    let fish = init_world(&mut world, &cfg, SEED).expect("default geometry is valid");

    world.run(|mut tf: ViewMut<Transform>| {
        for (&id, &pos) in fish.iter().zip(poses) {
            (&mut tf).get(id).unwrap().pos = pos;
        }
    });

    (world, fish)
}

#[allow(dead_code)]
pub fn fish_pos(world: &World, id: EntityId) -> Vec2 {
    world.run(|tf: View<Transform>| tf.get(id).unwrap().pos)
}

#[allow(dead_code)]
pub fn score(world: &World) -> u32 {
    world.run(|score: UniqueView<Score>| score.0)
}
