use hashbrown::HashMap;
use macroquad::prelude::*;

use crate::{TextureId, ZOrder};

const FONT_SCALE: f32 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct SpriteDraw {
    pub texture: TextureId,
    pub pos: Vec2,
    pub size: Vec2,
    pub z: ZOrder,
    /// Drawn as a plain rectangle when the texture is missing.
    /// [None] skips the sprite instead.
    pub fallback: Option<Color>,
}

#[derive(Clone, Debug)]
pub struct TextDraw {
    pub string: String,
    pub pos: Vec2,
    pub font_size: u16,
    pub color: Color,
}

/// Collects the draw requests of a frame and draws them in
/// z-order. Also owns the loaded textures and the font.
pub struct Render {
    pub clear_color: Color,
    textures: HashMap<TextureId, Texture2D>,
    font: Option<Font>,
    sprites: Vec<SpriteDraw>,
    texts: Vec<TextDraw>,
}

impl Render {
    pub fn new() -> Self {
        Self {
            clear_color: YELLOW,
            textures: HashMap::new(),
            font: None,
            sprites: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn add_texture(&mut self, key: TextureId, texture: Texture2D) {
        self.textures.insert(key, texture);
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    pub fn new_frame(&mut self) {
        self.sprites.clear();
        self.texts.clear();
    }

    pub fn put_sprite(&mut self, sprite: SpriteDraw) {
        self.sprites.push(sprite);
    }

    pub fn put_text(&mut self, text: TextDraw) {
        self.texts.push(text);
    }

    /// Sorts the sprites by their z-order. Sprites with
    /// equal z keep the order they were put in.
    fn sort_sprites(&mut self) {
        self.sprites.sort_by_key(|sprite| sprite.z);
    }

    pub fn render(&mut self) {
        set_default_camera();
        clear_background(self.clear_color);

        self.sort_sprites();
        for sprite in &self.sprites {
            match self.textures.get(&sprite.texture) {
                Some(texture) => draw_texture_ex(
                    texture,
                    sprite.pos.x,
                    sprite.pos.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(sprite.size),
                        ..Default::default()
                    },
                ),
                None => {
                    let Some(color) = sprite.fallback else {
                        continue;
                    };
                    draw_rectangle(
                        sprite.pos.x,
                        sprite.pos.y,
                        sprite.size.x,
                        sprite.size.y,
                        color,
                    );
                }
            }
        }

        for text in &self.texts {
            draw_text_ex(
                &text.string,
                text.pos.x,
                text.pos.y,
                TextParams {
                    font: self.font.as_ref(),
                    font_size: text.font_size,
                    font_scale: FONT_SCALE,
                    color: text.color,
                    ..Default::default()
                },
            );
        }
    }
}

impl Default for Render {
    fn default() -> Self {
        Self::new()
    }
}
