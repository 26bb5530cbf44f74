use std::path::PathBuf;

use clap::Parser;
use lib_game::GameCfg;

/// Click the fish.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The RON config to load. A missing file means the defaults.
    #[arg(long, value_name = "PATH", default_value = "fish.ron")]
    pub config: PathBuf,
    /// Seed for the fish positions. Overrides the config.
    #[arg(long)]
    pub seed: Option<u64>,
    /// How many fish to spawn. Overrides the config.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub fish: Option<u32>,
}

impl Args {
    pub fn apply(&self, cfg: &mut GameCfg) {
        if let Some(seed) = self.seed {
            cfg.rng.seed = Some(seed);
        }
        if let Some(count) = self.fish {
            cfg.fish.count = count;
        }
    }

    /// Loads the config, applies the overrides and validates
    /// the result, so that bad geometry is reported before
    /// the window opens.
    pub fn load_cfg(&self) -> anyhow::Result<GameCfg> {
        let mut cfg = GameCfg::load(&self.config)?;
        self.apply(&mut cfg);
        cfg.validate()?;

        Ok(cfg)
    }
}
