use lib_game::*;
use log::info;
use macroquad::prelude::*;
use shipyard::{EntityId, IntoIter, UniqueView, View, World};

use crate::ui;

const MISSING_FISH_COLOR: Color = ORANGE;

pub struct FishGame {
    fish: Vec<EntityId>,
}

impl FishGame {
    pub fn new() -> Self {
        Self { fish: Vec::new() }
    }

    fn export_fish(
        render: &mut Render,
        tf: View<Transform>,
        target: View<Target>,
        z: View<ZOrder>,
    ) {
        for (tf, target, z) in (&tf, &target, &z).iter() {
            render.put_sprite(SpriteDraw {
                texture: TextureId::Fish,
                pos: tf.pos,
                size: target.size,
                z: *z,
                fallback: Some(MISSING_FISH_COLOR),
            });
        }
    }
}

impl Game for FishGame {
    fn init(&mut self, resources: &Resources, world: &mut World) -> anyhow::Result<()> {
        self.fish = init_world(world, &resources.cfg, resources.seed)?;

        Ok(())
    }

    fn input_phase(
        &mut self,
        state: AppState,
        input: &InputModel,
        _resources: &Resources,
        world: &mut World,
    ) {
        if input.respawn_requested {
            info!("Respawning {} fish", self.fish.len());
            world.run(respawn_all);
        }

        if !state.is_playing() {
            return;
        }
        let Some(click) = input.click else {
            return;
        };

        let hits = world.run_with_data(dispatch_click, click);
        if hits > 0 {
            let score = world.run(|score: UniqueView<Score>| score.0);
            info!("Caught {hits} fish, score: {score}");
        }
    }

    fn update(&mut self, dt: f32, _resources: &Resources, world: &mut World) {
        world.run_with_data(advance_playtime, dt);
        world.run_with_data(update_glides, dt);
    }

    fn render_export(
        &self,
        state: AppState,
        highlight: Option<MenuSelection>,
        resources: &Resources,
        world: &World,
        render: &mut Render,
    ) {
        render.put_sprite(SpriteDraw {
            texture: TextureId::Background,
            pos: Vec2::ZERO,
            size: resources.cfg.field_size().as_vec2(),
            z: ZOrder::BACKGROUND,
            fallback: None,
        });

        match state {
            AppState::Menu => ui::export_menu(highlight, render),
            AppState::Playing => {
                world.run_with_data(Self::export_fish, &mut *render);
                let (score, playtime) = world.run(|score: UniqueView<Score>, playtime: UniqueView<Playtime>| {
                    (*score, *playtime)
                });
                ui::export_hud(score, playtime, render);
            }
            AppState::Exit => (),
        }
    }
}
