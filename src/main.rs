use clap::Parser;
use game::FishGame;
use lib_game::{App, GameCfg, sys};
use log::{LevelFilter, error, info};
use macroquad::prelude::*;
use quad_dbg::init_on_screen_log;

mod cli;
mod game;
mod ui;

fn window_conf(cfg: &GameCfg) -> Conf {
    // Checked by GameCfg::validate
    let (window_width, window_height) = cfg.window_size().unwrap_or_default();

    Conf {
        window_title: cfg.window.title.clone(),
        high_dpi: false,
        window_width,
        window_height,
        window_resizable: false,
        fullscreen: cfg.window.fullscreen,
        ..Default::default()
    }
}

fn main() {
    init_on_screen_log(LevelFilter::Info);

    let args = cli::Args::parse();
    let cfg = match args.load_cfg() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Bad configuration: {e:#}");
            std::process::exit(1);
        }
    };

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    macroquad::Window::from_config(window_conf(&cfg), async move {
        if let Err(e) = run(cfg).await {
            error!("{e:?}");
            sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
        }
    });
}

async fn run(cfg: GameCfg) -> anyhow::Result<()> {
    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let app = App::new(cfg).await?;
    let mut game = FishGame::new();

    app.run(&mut game).await
}
