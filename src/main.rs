// main.rs
#![allow(dead_code)]

mod core;
mod render;

use std::f32::consts::FRAC_PI_2;
use std::thread;
use std::time::Duration;

use raylib::prelude::*;

use crate::core::casters::{self, Intersect};
use crate::core::config::Config;
use crate::core::map::TileMap;
use crate::core::player::Player;
use crate::core::process_events::sample_input;
use crate::render::framebuffer::Framebuffer;
use crate::render::minimap::render_minimap;
use crate::render::render3d::render_3d;

/// Everything the frame loop mutates, owned here and passed by reference
/// into update and render. No module-level state.
struct Scene {
    map: TileMap,
    player: Player,
    rays: Vec<Intersect>,
}

impl Scene {
    fn new(map: TileMap, config: &Config) -> Self {
        // Start at the middle of the map, facing down.
        let player = Player::new(
            map.width_px() / 2.0,
            map.height_px() / 2.0,
            FRAC_PI_2,
            config,
        );
        Self {
            map,
            player,
            rays: Vec::with_capacity(config.num_rays()),
        }
    }

    /// One ray per screen column, rebuilt every tick.
    fn cast_all_rays(&mut self, config: &Config) {
        self.rays.clear();
        for angle in casters::ray_angles(self.player.a, config.fov, config.num_rays()) {
            self.rays.push(casters::cast(
                self.player.pos.x,
                self.player.pos.y,
                angle,
                &self.map,
            ));
        }
    }
}

fn main() {
    let config = Config::default();

    let map = TileMap::from_file("map.txt", config.tile_size).unwrap_or_else(|err| {
        eprintln!("map.txt unavailable ({err}); using the built-in layout");
        TileMap::embedded(config.tile_size)
    });
    let mut scene = Scene::new(map, &config);

    let (mut rl, raylib_thread) = raylib::init()
        .size(config.viewport_width, config.viewport_height)
        .title("tilecast")
        .build();

    let mut framebuffer = Framebuffer::new(
        config.viewport_width as u32,
        config.viewport_height as u32,
    );
    framebuffer.set_background_color(Color::new(33, 33, 33, 255));

    let blank = Image::gen_image_color(
        config.viewport_width,
        config.viewport_height,
        Color::BLACK,
    );
    let mut screen = rl
        .load_texture_from_image(&raylib_thread, &blank)
        .expect("framebuffer texture");

    let mut show_minimap = true;

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            show_minimap = !show_minimap;
        }

        // Poll input, move the player, then cast. The map is read-only from
        // here on and the rays see this tick's committed position.
        let dt = rl.get_frame_time();
        let intent = sample_input(&rl);
        scene.player.update(intent, &scene.map, dt);
        scene.cast_all_rays(&config);

        framebuffer.clear();
        render_3d(&mut framebuffer, &scene.rays, &scene.player, &config);
        if show_minimap {
            render_minimap(
                &mut framebuffer,
                &scene.map,
                &scene.player,
                &scene.rays,
                config.minimap_scale,
            );
        }
        framebuffer.upload_to_texture(&mut screen);

        let fps = rl.get_fps();
        {
            let mut d = rl.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            d.draw_texture(&screen, 0, 0, Color::WHITE);
            d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::WHITE);
        }

        // ~60 FPS
        thread::sleep(Duration::from_millis(16));
    }
}
