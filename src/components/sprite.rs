use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec4};

/// Sprite is identified by a texture key and its size in world units. When the
/// texture is a sprite sheet, `columns`/`rows` describe the grid and `frame`
/// selects the cell (left-to-right, top-to-bottom).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub size: Vec2,
    pub columns: u32,
    pub rows: u32,
    pub frame: usize,
}

impl Sprite {
    /// Whole-texture sprite.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            size: Vec2::new(width, height),
            columns: 1,
            rows: 1,
            frame: 0,
        }
    }

    pub fn with_sheet(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns.max(1);
        self.rows = rows.max(1);
        self
    }

    /// Normalised source rectangle of the current frame as `(u, v, width, height)`.
    pub fn frame_uv(&self) -> Vec4 {
        let cols = self.columns.max(1) as usize;
        let rows = self.rows.max(1) as usize;
        let frame = self.frame % (cols * rows);
        let w = 1.0 / cols as f32;
        let h = 1.0 / rows as f32;
        Vec4::new(
            (frame % cols) as f32 * w,
            (frame / cols) as f32 * h,
            w,
            h,
        )
    }
}
