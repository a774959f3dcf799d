//! Distance-to-screen projection.

/// Distance at which a wall still renders at full brightness; farther walls
/// fade proportionally.
const SHADE_FALLOFF: f32 = 170.0;

/// Floor for the corrected distance so the strip height stays finite.
const MIN_DISTANCE: f32 = 1e-4;

/// One projected wall column.
#[derive(Clone, Copy, Debug)]
pub struct WallStrip {
    /// On-screen height in pixels.
    pub height: f32,
    /// Brightness in [0, 1], falling off with distance.
    pub shade: f32,
}

/// Distance from the eye to the projection plane, fixed by the field of
/// view and viewport width.
#[inline]
pub fn plane_distance(fov: f32, viewport_width: f32) -> f32 {
    (viewport_width / 2.0) / (fov / 2.0).tan()
}

/// Converts a ray's raw distance into a wall strip. The raw distance is
/// scaled by the cosine of the ray's offset from the view direction first;
/// without that, walls bow outward at the screen edges.
pub fn project(
    ray_distance: f32,
    ray_angle: f32,
    player_angle: f32,
    tile_size: f32,
    plane_distance: f32,
) -> WallStrip {
    let corrected = (ray_distance * (ray_angle - player_angle).cos()).max(MIN_DISTANCE);
    WallStrip {
        height: tile_size / corrected * plane_distance,
        shade: (SHADE_FALLOFF / corrected).clamp(0.0, 1.0),
    }
}
