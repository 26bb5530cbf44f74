use std::fmt;

use log::{info, warn};
use macroquad::prelude::*;

use crate::{Render, config::sections};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
pub enum TextureId {
    Background,
    Fish,
}

impl TextureId {
    pub fn path(self, cfg: &sections::Assets) -> &str {
        match self {
            TextureId::Background => &cfg.background,
            TextureId::Fish => &cfg.fish,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture(TextureId),
    Font,
}

/// An asset that could not be loaded. The game keeps running
/// without it.
#[derive(Debug)]
pub struct AssetLoadError {
    pub kind: AssetKind,
    pub path: String,
    pub reason: macroquad::Error,
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            AssetKind::Texture(id) => <&'static str>::from(id),
            AssetKind::Font => "font",
        };
        write!(f, "failed to load {kind} from {:?}: {}", self.path, self.reason)
    }
}

impl std::error::Error for AssetLoadError {}

/// Loads every texture and the font into `render`. Failures
/// are logged and returned, never fatal.
pub async fn load_assets(cfg: &sections::Assets, render: &mut Render) -> Vec<AssetLoadError> {
    use strum::VariantArray;

    let mut errors = Vec::new();

    for &id in TextureId::VARIANTS {
        let path = id.path(cfg);
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                render.add_texture(id, texture);
            }
            Err(reason) => errors.push(AssetLoadError {
                kind: AssetKind::Texture(id),
                path: path.to_owned(),
                reason,
            }),
        }
    }

    match load_ttf_font(&cfg.font).await {
        Ok(font) => render.set_font(font),
        Err(reason) => errors.push(AssetLoadError {
            kind: AssetKind::Font,
            path: cfg.font.clone(),
            reason,
        }),
    }

    for e in &errors {
        warn!("{e}");
    }
    info!("Assets loaded, {} missing", errors.len());

    errors
}
