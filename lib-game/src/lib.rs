mod assets;
mod components;
mod fish;
mod glide;
mod hit;
mod input;
mod menu;
mod render;
mod spawn;
mod tick;

pub mod config;
pub mod sys;

pub use assets::*;
pub use components::*;
pub use config::{ConfigError, GameCfg};
pub use fish::*;
pub use glide::*;
pub use hit::*;
pub use input::*;
pub use menu::*;
pub use render::*;
pub use spawn::*;
pub use tick::*;

use log::info;
use macroquad::prelude::*;
use quad_dbg::{GLOBAL_DUMP, ScreenDump, draw_on_screen_log, dump};
use shipyard::World;

/// The trait containing all callbacks for the game,
/// that is run inside the App. The game state itself
/// lives in the ECS world the App passes in.
///
/// Every frame the App:
/// 1. Captures the input and advances the menu state machine
/// 2. Calls Game::input_phase
/// 3. Calls Game::update once per due fixed tick while the game is being played
/// 4. Calls Game::render_export and draws the result
pub trait Game: 'static {
    /// Put all the appropriate data into the ECS World.
    fn init(&mut self, resources: &Resources, world: &mut World) -> anyhow::Result<()>;

    /// Handle the input events of this frame. Runs every frame,
    /// in every state.
    fn input_phase(
        &mut self,
        state: AppState,
        input: &InputModel,
        resources: &Resources,
        world: &mut World,
    );

    /// Fixed-rate update. Only runs while playing.
    fn update(&mut self, dt: f32, resources: &Resources, world: &mut World);

    /// Export the game world for rendering.
    /// `highlight` is the menu option to mark. It stays [None]
    /// until the player first moves the menu cursor.
    fn render_export(
        &self,
        state: AppState,
        highlight: Option<MenuSelection>,
        resources: &Resources,
        world: &World,
        render: &mut Render,
    );
}

pub struct Resources {
    pub cfg: GameCfg,
    pub seed: u64,
}

/// The app runs all the boilerplate code to make the game tick.
/// The following features are provided:
/// * Menu state transitions
/// * Consistent tickrate timing
/// * Fullscreen toggling
/// * Drawing of the on-screen log and the `dump!` overlay
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),

    state: AppState,
    selection: MenuSelection,
    menu_touched: bool,
    pub resources: Resources,
    ticker: Ticker,

    pub render: Render,
    world: World,

    show_dump: bool,
}

impl App {
    /// Validates the config and loads the assets. Missing assets
    /// are only reported, a bad config is an error.
    pub async fn new(cfg: GameCfg) -> anyhow::Result<Self> {
        cfg.validate()?;

        let seed = cfg.rng.seed.unwrap_or_else(clock_seed);
        info!("RNG seed: {seed}");

        let mut render = Render::new();
        load_assets(&cfg.assets, &mut render).await;

        Ok(Self {
            fullscreen: cfg.window.fullscreen,
            old_size: (cfg.window.width, cfg.window.height),

            state: AppState::Menu,
            selection: MenuSelection::default(),
            menu_touched: false,
            ticker: Ticker::new(cfg.tick()),
            resources: Resources { cfg, seed },

            render,
            world: World::new(),

            show_dump: false,
        })
    }

    /// Just runs the game. Returns once the player picks "exit"
    /// in the menu.
    pub async fn run<G: Game>(mut self, game: &mut G) -> anyhow::Result<()> {
        game.init(&self.resources, &mut self.world)?;

        sys::done_loading();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        loop {
            ScreenDump::new_frame();

            let input = InputModel::capture();
            let real_dt = get_frame_time();
            self.fullscreen_toggles(&input);
            if input.dump_toggle_requested {
                self.show_dump = !self.show_dump;
            }

            self.next_state(&input);
            if self.state == AppState::Exit {
                info!("Exiting");
                return Ok(());
            }

            game.input_phase(self.state, &input, &self.resources, &mut self.world);
            let ticks = self.ticker.advance(self.state, real_dt);
            for _ in 0..ticks {
                game.update(self.ticker.tick(), &self.resources, &mut self.world);
            }

            self.game_present(game);
            self.debug_info();
            if self.show_dump {
                GLOBAL_DUMP.draw();
            }
            draw_on_screen_log();

            next_frame().await
        }
    }

    fn game_present<G: Game>(&mut self, game: &G) {
        self.render.new_frame();
        game.render_export(
            self.state,
            self.menu_touched.then_some(self.selection),
            &self.resources,
            &self.world,
            &mut self.render,
        );
        self.render.render();
    }

    fn next_state(&mut self, input: &InputModel) {
        if self.state == AppState::Menu && input.menu_toggle_requested {
            self.menu_touched = true;
        }

        let next = self.state.next(&mut self.selection, input);
        if next != self.state {
            info!("{:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    fn debug_info(&self) {
        dump!("FPS: {:?}", get_fps());
        dump!("state: {:?}", self.state);
        dump!("menu selection: {}", self.selection.index());
        dump!("tick acc: {:.4}", self.ticker.accumulated());
    }
}

fn clock_seed() -> u64 {
    (miniquad::date::now() * 1000.0) as u64
}
