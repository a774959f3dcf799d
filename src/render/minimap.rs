//! Scaled top-down overlay: map tiles, the cast ray fan and the player.

use raylib::prelude::*;

use crate::core::casters::Intersect;
use crate::core::map::TileMap;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;
use crate::render::line::draw_line;

const WALL_TILE: Color = Color::new(34, 34, 34, 255);
const OPEN_TILE: Color = Color::new(255, 255, 255, 255);
const RAY_COLOR: Color = Color::new(255, 0, 0, 120);
const PLAYER_COLOR: Color = Color::RED;

/// Length of the heading indicator in unscaled world pixels.
const HEADING_LEN: f32 = 30.0;

pub fn render_minimap(
    fb: &mut Framebuffer,
    map: &TileMap,
    player: &Player,
    rays: &[Intersect],
    scale: f32,
) {
    let tile = map.tile_size();
    let side = (tile * scale).ceil() as i32;

    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let color = if map.cell(col, row) != 0 { WALL_TILE } else { OPEN_TILE };
            fb.set_current_color(color);
            fb.fill_rect(
                (col as f32 * tile * scale) as i32,
                (row as f32 * tile * scale) as i32,
                side,
                side,
            );
        }
    }

    let px = player.pos.x * scale;
    let py = player.pos.y * scale;

    fb.set_current_color(RAY_COLOR);
    for ray in rays {
        if !ray.distance.is_finite() {
            continue;
        }
        draw_line(
            fb,
            px as i32,
            py as i32,
            (ray.hit_x * scale) as i32,
            (ray.hit_y * scale) as i32,
        );
    }

    fb.set_current_color(PLAYER_COLOR);
    fb.fill_rect(px as i32 - 1, py as i32 - 1, 3, 3);
    draw_line(
        fb,
        px as i32,
        py as i32,
        ((player.pos.x + player.a.cos() * HEADING_LEN) * scale) as i32,
        ((player.pos.y + player.a.sin() * HEADING_LEN) * scale) as i32,
    );
}
