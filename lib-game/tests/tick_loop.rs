mod common;

use lib_game::*;
use shipyard::{UniqueView, World};

const TICK: f32 = 1.0 / 60.0;

/// Runs `frames` frames of `fps` and counts the updates.
fn run_frames(state: AppState, fps: f32, frames: u32) -> u32 {
    let mut ticker = Ticker::new(TICK);
    (0..frames).map(|_| ticker.advance(state, fps.recip())).sum()
}

fn assert_ticks_near(got: u32, expected: u32) {
    // Float accumulation may leave the last tick a hair short
    assert!(got.abs_diff(expected) <= 1, "got {got} ticks, expected {expected}");
}

#[test]
fn sixty_fps_ticks_once_per_frame() {
    assert_ticks_near(run_frames(AppState::Playing, 60.0, 60), 60);
}

#[test]
fn thirty_fps_catches_up() {
    assert_ticks_near(run_frames(AppState::Playing, 30.0, 30), 60);
}

#[test]
fn forty_five_fps_catches_up() {
    assert_ticks_near(run_frames(AppState::Playing, 45.0, 60), 80);
}

#[test]
fn slow_frames_keep_up_over_time() {
    let mut ticker = Ticker::new(TICK);
    let mut total = 0;
    for _ in 0..20 {
        // 10 FPS, 6 ticks per frame, over the catch up limit
        total += ticker.advance(AppState::Playing, 0.1);
    }

    assert_eq!(total, 20 * MAX_TICKS_PER_FRAME);
}

#[test]
fn menu_gets_no_updates() {
    assert_eq!(run_frames(AppState::Menu, 60.0, 120), 0);
    assert_eq!(run_frames(AppState::Menu, 30.0, 60), 0);
}

#[test]
fn playtime_only_advances_while_playing() {
    let cfg = GameCfg::default();
    let mut world = World::new();
    init_world(&mut world, &cfg, common::SEED).unwrap();

    let mut ticker = Ticker::new(0.25);
    let mut step = |state: AppState, dt: f32| {
        for _ in 0..ticker.advance(state, dt) {
            world.run_with_data(advance_playtime, ticker.tick());
        }
        world.run(|playtime: UniqueView<Playtime>| playtime.0)
    };

    assert_eq!(step(AppState::Menu, 1.0), 0.0);
    assert_eq!(step(AppState::Playing, 0.5), 0.5);
    assert_eq!(step(AppState::Playing, 0.75), 1.25);
}
