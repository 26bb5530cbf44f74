use log::info;
use macroquad::prelude::*;
use shipyard::{EntityId, Get, IntoIter, UniqueViewMut, View, ViewMut, World};

use crate::{ConfigError, GameCfg, Glide, Playtime, Score, Spawner, Target, Transform, ZOrder};

/// Puts the game uniques into the world and spawns the fish.
/// Fails before touching the world if the config is invalid.
pub fn init_world(world: &mut World, cfg: &GameCfg, seed: u64) -> Result<Vec<EntityId>, ConfigError> {
    let region = cfg.validate()?;

    world.add_unique(Score::default());
    world.add_unique(Playtime::default());
    world.add_unique(Spawner::new(region, seed, cfg.fish.glide_time));

    let size = cfg.fish_size().as_vec2();
    let fish = (0..cfg.fish.count)
        .map(|_| spawn_fish(world, size))
        .collect::<Vec<_>>();
    info!("Spawned {} fish", fish.len());

    Ok(fish)
}

pub fn spawn_fish(world: &mut World, size: Vec2) -> EntityId {
    let pos = world.run(|mut spawner: UniqueViewMut<Spawner>| spawner.next_pos());

    world.add_entity((
        Transform::from_pos(pos),
        Target { size },
        ZOrder::FISH,
        Glide::default(),
    ))
}

/// Scores every fish under the click and sends it elsewhere.
/// Overlapping fish all count. Returns the number of hits.
pub fn dispatch_click(
    click: Vec2,
    mut tf: ViewMut<Transform>,
    target: View<Target>,
    mut glide: ViewMut<Glide>,
    mut spawner: UniqueViewMut<Spawner>,
    mut score: UniqueViewMut<Score>,
) -> u32 {
    let hits = (&tf, &target)
        .iter()
        .with_id()
        .filter(|(_, (tf, target))| target.bounds(tf).is_hit(click))
        .map(|(id, _)| id)
        .collect::<Vec<_>>();

    for &id in &hits {
        let Ok((mut tf, mut glide)) = (&mut tf, &mut glide).get(id) else {
            continue;
        };

        score.0 += 1;
        let dest = spawner.next_pos();
        glide.start(&mut tf, dest, spawner.glide_time);
    }

    hits.len() as u32
}

/// Sends every fish to a new random spot.
pub fn respawn_all(
    mut tf: ViewMut<Transform>,
    target: View<Target>,
    mut glide: ViewMut<Glide>,
    mut spawner: UniqueViewMut<Spawner>,
) {
    for (mut tf, _, mut glide) in (&mut tf, &target, &mut glide).iter() {
        let dest = spawner.next_pos();
        glide.start(&mut tf, dest, spawner.glide_time);
    }
}

pub fn advance_playtime(dt: f32, mut playtime: UniqueViewMut<Playtime>) {
    playtime.0 += dt;
}
