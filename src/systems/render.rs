//! Drawing.
//!
//! [`render_frame`] draws one frame inside raylib's drawing scope:
//! sprites (platforms first, the player on top), the blinking end-of-mission
//! banner and, while [`DebugMode`] is present, collider outlines and a
//! status line.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::bitmapfont::BitmapFont;
use crate::resources::camera2d::OrthoCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::mission::{BANNER_GLYPH_SIZE, MissionOutcome, banner_visible};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Draw `uv` (normalised `(u, v, w, h)`) of `texture` centred on `center`.
fn draw_quad(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    uv: glam::Vec4,
    center: Vec2,
    size: Vec2,
) {
    let (tw, th) = (texture.width as f32, texture.height as f32);
    let src = Rectangle {
        x: uv.x * tw,
        y: uv.y * th,
        width: uv.z * tw,
        height: uv.w * th,
    };
    let dest = Rectangle {
        x: center.x,
        y: center.y,
        width: size.x,
        height: size.y,
    };
    let origin = Vector2 {
        x: size.x * 0.5,
        y: size.y * 0.5,
    };
    d.draw_texture_pro(texture, src, dest, origin, 0.0, Color::WHITE);
}

#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    camera: Res<OrthoCamera>,
    font: Res<BitmapFont>,
    outcome: Res<MissionOutcome>,
    time: Res<WorldTime>,
    debug_mode: Option<Res<DebugMode>>,
    sprites: Query<(&Sprite, &MapPosition, &EntityKind)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    let screen = Vec2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    let fps = rl.get_fps();
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(Color::BLACK);

    let mut to_draw: Vec<(&Sprite, Vec2, EntityKind)> =
        sprites.iter().map(|(s, p, k)| (s, p.pos, *k)).collect();
    to_draw.sort_by_key(|(_, _, kind)| *kind == EntityKind::Player);

    for (sprite, pos, kind) in to_draw {
        if kind == EntityKind::Player {
            trace!("Player at ({:.3}, {:.3})", pos.x, pos.y);
        }
        let Some(texture) = textures.get(&sprite.tex_key) else {
            continue;
        };
        draw_quad(
            &mut d,
            texture,
            sprite.frame_uv(),
            camera.world_to_screen(pos, screen),
            camera.size_to_screen(sprite.size, screen),
        );
    }

    if let Some((message, origin)) = outcome.banner() {
        if let Some(texture) = textures.get(&font.tex_key) {
            if banner_visible(time.frame_count) {
                for glyph in font.layout(message, BANNER_GLYPH_SIZE, 0.0, origin) {
                    draw_quad(
                        &mut d,
                        texture,
                        glyph.uv,
                        camera.world_to_screen(glyph.center, screen),
                        camera.size_to_screen(Vec2::splat(glyph.size), screen),
                    );
                }
            }
        }
    }

    if debug_mode.is_some() {
        for (collider, position) in colliders.iter() {
            let (min, max) = collider.aabb(position.pos);
            // World y grows upwards, so the top-left screen corner is (min.x, max.y)
            let top_left = camera.world_to_screen(Vec2::new(min.x, max.y), screen);
            let size = camera.size_to_screen(max - min, screen);
            d.draw_rectangle_lines(
                top_left.x as i32,
                top_left.y as i32,
                size.x as i32,
                size.y as i32,
                Color::RED,
            );
        }
        let status = format!(
            "DEBUG MODE (F11) | FPS: {} | frame {} | {:?}",
            fps, time.frame_count, *outcome
        );
        d.draw_text(&status, 10, 10, 10, Color::RAYWHITE);
    }
}
