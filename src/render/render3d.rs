//! Column renderer: backdrop gradient plus one shaded wall strip per ray.

use raylib::prelude::*;

use crate::core::casters::Intersect;
use crate::core::config::Config;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;
use crate::render::projection::{plane_distance, project};

const CEIL_TOP: Color = Color::new(10, 12, 18, 255);
const CEIL_MID: Color = Color::new(20, 24, 32, 255);
const FLOOR_NEAR: Color = Color::new(56, 58, 62, 255);
const FLOOR_FAR: Color = Color::new(26, 28, 30, 255);

/// Horizontal-family wall faces render slightly darker than vertical ones
/// so adjoining faces stay distinguishable without textures.
const HORZ_FACE_DIM: f32 = 0.8;

#[inline]
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t) as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}

fn paint_backdrop(fb: &mut Framebuffer) {
    let w = fb.width;
    let h = fb.height;
    let hh = h / 2;
    for y in 0..hh {
        let t = y as f32 / hh as f32;
        fb.set_current_color(lerp_color(CEIL_TOP, CEIL_MID, t));
        for x in 0..w {
            fb.set_pixel(x, y);
        }
    }
    for y in hh..h {
        let t = (y - hh) as f32 / (h - hh) as f32;
        fb.set_current_color(lerp_color(FLOOR_FAR, FLOOR_NEAR, t));
        for x in 0..w {
            fb.set_pixel(x, y);
        }
    }
}

/// Draws the first-person view for one frame: one vertical strip per cast
/// ray, centered on the horizon, dimmed with distance.
pub fn render_3d(fb: &mut Framebuffer, rays: &[Intersect], player: &Player, config: &Config) {
    paint_backdrop(fb);

    let hh = fb.height as f32 * 0.5;
    let plane = plane_distance(config.fov, config.viewport_width as f32);

    for (i, ray) in rays.iter().enumerate() {
        if !ray.distance.is_finite() {
            continue;
        }

        let strip = project(ray.distance, ray.angle, player.a, config.tile_size, plane);

        let face = if ray.vertical { 1.0 } else { HORZ_FACE_DIM };
        let level = (255.0 * strip.shade * face) as u8;
        let alpha = (255.0 * strip.shade) as u8;
        fb.set_current_color(Color::new(level, level, level, alpha));

        let top = (hh - strip.height * 0.5).max(0.0);
        let bottom = (hh + strip.height * 0.5).min(fb.height as f32);
        fb.fill_rect(
            i as i32 * config.strip_width,
            top as i32,
            config.strip_width,
            (bottom - top) as i32,
        );
    }
}
