//! Bitmap font atlas.
//!
//! The font texture is a 16×16 grid of glyph cells indexed by character code
//! (left-to-right, top-to-bottom). [`BitmapFont::layout`] turns a string into
//! one textured quad per character; the renderer only has to draw them.

use bevy_ecs::prelude::Resource;
use glam::{Vec2, Vec4};

/// Glyph cells per row and per column of the atlas.
pub const FONTBANK_SIZE: u32 = 16;

/// One character quad in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub center: Vec2,
    pub size: f32,
    /// Normalised atlas rectangle as `(u, v, width, height)`.
    pub uv: Vec4,
}

#[derive(Resource, Debug, Clone)]
pub struct BitmapFont {
    pub tex_key: String,
    pub grid: u32,
}

impl BitmapFont {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            grid: FONTBANK_SIZE,
        }
    }

    /// Atlas cell of a character code. Codes past the grid wrap around.
    pub fn glyph_uv(&self, code: u32) -> Vec4 {
        let grid = self.grid.max(1);
        let cell = 1.0 / grid as f32;
        let index = code % (grid * grid);
        Vec4::new(
            (index % grid) as f32 * cell,
            (index / grid) as f32 * cell,
            cell,
            cell,
        )
    }

    /// Lay out `text` starting with the first glyph centred on `origin`.
    /// Each following glyph is `size + spacing` further right.
    pub fn layout(&self, text: &str, size: f32, spacing: f32, origin: Vec2) -> Vec<GlyphQuad> {
        text.chars()
            .enumerate()
            .map(|(i, ch)| GlyphQuad {
                center: origin + Vec2::new((size + spacing) * i as f32, 0.0),
                size,
                uv: self.glyph_uv(ch as u32),
            })
            .collect()
    }
}
