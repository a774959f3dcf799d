//! Startup-fixed engine configuration.

use std::f32::consts::PI;

/// Tunables resolved once at startup and never reloaded. The window size,
/// ray count and minimap all derive from these values.
#[derive(Clone, Debug)]
pub struct Config {
    /// Edge length of a square map tile in world pixels.
    pub tile_size: f32,
    /// Total angular width of the view cone, radians.
    pub fov: f32,
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Width of one projected wall strip in pixels. One ray per strip.
    pub strip_width: i32,
    /// Walk speed in world pixels per second.
    pub move_speed: f32,
    /// Turn speed in radians per second.
    pub turn_speed: f32,
    pub minimap_scale: f32,
}

impl Config {
    /// Number of rays cast per frame, one per screen column of strips.
    pub fn num_rays(&self) -> usize {
        (self.viewport_width / self.strip_width) as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            fov: PI / 3.0, // 60 degrees
            viewport_width: 960,
            viewport_height: 704,
            strip_width: 15,
            move_speed: 120.0,
            turn_speed: 2.0 * PI / 3.0,
            minimap_scale: 0.2,
        }
    }
}
