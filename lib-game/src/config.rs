use std::fmt;
use std::path::Path;

use log::info;
use macroquad::math::{UVec2, uvec2};
use serde::{Deserialize, Serialize};

use crate::{SpawnError, SpawnRegion};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameCfg {
    pub window: sections::Window,
    pub fish: sections::Fish,
    pub assets: sections::Assets,
    pub rng: sections::Rng,
}

pub mod sections {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    #[serde(default)]
    pub struct Window {
        pub title: String,
        pub width: u32,
        pub height: u32,
        /// Simulation ticks per second.
        pub tick_rate: f32,
        pub fullscreen: bool,
    }

    impl Default for Window {
        fn default() -> Self {
            Self {
                title: "The Fish Game".to_owned(),
                width: 1600,
                height: 900,
                tick_rate: 60.0,
                fullscreen: false,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    #[serde(default)]
    pub struct Fish {
        pub count: u32,
        pub width: u32,
        pub height: u32,
        /// Seconds a hit fish takes to swim to its new spot.
        /// Zero teleports it.
        pub glide_time: f32,
    }

    impl Default for Fish {
        fn default() -> Self {
            Self {
                count: 1,
                width: 64,
                height: 64,
                glide_time: 0.0,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    #[serde(default)]
    pub struct Assets {
        pub background: String,
        pub fish: String,
        pub font: String,
    }

    impl Default for Assets {
        fn default() -> Self {
            Self {
                background: "assets/background.png".to_owned(),
                fish: "assets/fish.png".to_owned(),
                font: "assets/main_font.ttf".to_owned(),
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default)]
    pub struct Rng {
        /// A fixed seed makes fish positions reproducible.
        pub seed: Option<u64>,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(ron::error::SpannedError),
    NoFish,
    BadTickRate(f32),
    BadGlideTime(f32),
    WindowTooLarge(UVec2),
    Spawn(SpawnError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse the config: {e}"),
            ConfigError::NoFish => write!(f, "fish count must be at least 1"),
            ConfigError::BadTickRate(rate) => write!(f, "tick rate must be positive, got {rate}"),
            ConfigError::BadGlideTime(time) => {
                write!(f, "glide time must be finite and not negative, got {time}")
            }
            ConfigError::WindowTooLarge(size) => {
                write!(f, "window size {}x{} is too large", size.x, size.y)
            }
            ConfigError::Spawn(e) => write!(f, "invalid spawn geometry: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpawnError> for ConfigError {
    fn from(e: SpawnError) -> Self {
        ConfigError::Spawn(e)
    }
}

impl GameCfg {
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        ron::from_str(s).map_err(ConfigError::Parse)
    }

    /// Reads the config from `path`. A missing file (or a platform
    /// without a file system) means the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use std::io::ErrorKind;

        let src = match std::fs::read_to_string(path) {
            Ok(x) => x,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::Unsupported) => {
                info!("No config at {path:?}, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let cfg = Self::from_ron(&src)?;
        info!("Loaded config from {path:?}");

        Ok(cfg)
    }

    pub fn field_size(&self) -> UVec2 {
        uvec2(self.window.width, self.window.height)
    }

    /// The window size as the engine takes it. [None] if it
    /// does not fit.
    pub fn window_size(&self) -> Option<(i32, i32)> {
        let width = i32::try_from(self.window.width).ok()?;
        let height = i32::try_from(self.window.height).ok()?;

        Some((width, height))
    }

    pub fn fish_size(&self) -> UVec2 {
        uvec2(self.fish.width, self.fish.height)
    }

    pub fn tick(&self) -> f32 {
        self.window.tick_rate.recip()
    }

    /// Checks everything that would otherwise fail mid-game
    /// and returns the region the fish will spawn in.
    pub fn validate(&self) -> Result<SpawnRegion, ConfigError> {
        if self.fish.count == 0 {
            return Err(ConfigError::NoFish);
        }

        let rate = self.window.tick_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::BadTickRate(rate));
        }

        let glide_time = self.fish.glide_time;
        if !glide_time.is_finite() || glide_time < 0.0 {
            return Err(ConfigError::BadGlideTime(glide_time));
        }

        if self.window_size().is_none() {
            return Err(ConfigError::WindowTooLarge(self.field_size()));
        }

        let region = SpawnRegion::new(self.field_size(), self.fish_size())?;

        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = GameCfg::default();
        let region = cfg.validate().unwrap();

        assert_eq!(region.max(), uvec2(1600 - 128, 900 - 128));
        assert_eq!(cfg.tick(), 1.0 / 60.0);
    }

    #[test]
    fn test_error_source_chain() {
        let mut cfg = GameCfg::default();
        cfg.fish.width = 1000;

        let err = cfg.validate().unwrap_err();
        let source = std::error::Error::source(&err).unwrap();

        assert!(source.to_string().contains("2000"));
    }
}
