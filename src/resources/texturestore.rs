//! Texture store resource.
//!
//! A non-send resource that stores loaded textures keyed by string IDs.
//! Components refer to textures by key only; the store owns the GPU handles.
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file as a texture under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<(), String> {
        let mut texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Unable to load image {}: {}", path, e))?;
        // Pixel art: no smoothing between texels
        texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
        self.textures.insert(key.into(), texture);
        Ok(())
    }

    /// Get a texture by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
