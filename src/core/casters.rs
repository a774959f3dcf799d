//! Ray/grid intersection.
//!
//! Each ray runs two independent searches, one along the horizontal grid
//! lines and one along the vertical grid lines, each advancing a full tile
//! per step along its primary axis. The nearer of the two hits is the ray's
//! result.

use std::f32::consts::{PI, TAU};

use crate::core::map::TileMap;

/// Smallest tangent magnitude fed into the intercept divisions. Axis-aligned
/// rays would otherwise divide by zero; with the clamp the off-axis family
/// steps out of bounds immediately and the other family decides the hit.
const TAN_MIN: f32 = 1e-6;

/// Result of casting a single ray.
#[derive(Clone, Copy, Debug)]
pub struct Intersect {
    /// Normalized ray angle, radians in [0, 2pi).
    pub angle: f32,
    pub hit_x: f32,
    pub hit_y: f32,
    /// Euclidean distance from the ray origin to the hit point. Infinite
    /// when neither family found a wall before leaving the grid.
    pub distance: f32,
    /// True when the vertical line family produced the hit.
    pub vertical: bool,
}

/// Wraps an angle to [0, 2pi). Idempotent, handles negatives and multiples
/// of a full turn.
pub fn normalize_angle(a: f32) -> f32 {
    let a = a.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

#[inline]
fn distance_between(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}

#[inline]
fn clamped_tan(a: f32) -> f32 {
    let t = a.tan();
    if t.abs() < TAN_MIN { TAN_MIN.copysign(t) } else { t }
}

/// Per-column ray angles: the view cone split into `num_rays` equal
/// increments, left edge first. The last angle stays one increment short of
/// the right edge of the cone.
pub fn ray_angles(player_a: f32, fov: f32, num_rays: usize) -> impl Iterator<Item = f32> {
    let start = player_a - fov / 2.0;
    let step = fov / num_rays as f32;
    (0..num_rays).map(move |i| start + i as f32 * step)
}

/// Casts one ray from `(origin_x, origin_y)` and returns the nearest wall
/// intersection. Both stepping loops advance their primary coordinate by a
/// full signed tile every iteration and stop once the probe point leaves the
/// grid's pixel bounds, so they always terminate.
pub fn cast(origin_x: f32, origin_y: f32, angle: f32, map: &TileMap) -> Intersect {
    let a = normalize_angle(angle);
    let tile = map.tile_size();

    let facing_down = a > 0.0 && a < PI;
    let facing_up = !facing_down;
    let facing_right = a < 0.5 * PI || a > 1.5 * PI;
    let facing_left = !facing_right;

    let tan_a = clamped_tan(a);

    let in_bounds =
        |x: f32, y: f32| x >= 0.0 && x <= map.width_px() && y >= 0.0 && y <= map.height_px();

    // Horizontal line family: y advances one tile per step.
    let mut horz_hit: Option<(f32, f32)> = None;
    {
        let y_intercept = (origin_y / tile).floor() * tile + if facing_down { tile } else { 0.0 };
        let x_intercept = origin_x + (y_intercept - origin_y) / tan_a;

        let y_step = if facing_up { -tile } else { tile };
        let mut x_step = tile / tan_a;
        // The quotient's sign flips with the tangent's; force the step to
        // point the way the ray actually faces.
        if (facing_left && x_step > 0.0) || (facing_right && x_step < 0.0) {
            x_step = -x_step;
        }

        let mut next_x = x_intercept;
        let mut next_y = y_intercept;
        while in_bounds(next_x, next_y) {
            // Up-facing rays probe one pixel into the cell above the line,
            // otherwise the query lands in the cell below it.
            let probe_y = next_y - if facing_up { 1.0 } else { 0.0 };
            if map.is_wall(next_x, probe_y) {
                horz_hit = Some((next_x, next_y));
                break;
            }
            next_x += x_step;
            next_y += y_step;
        }
    }

    // Vertical line family: the symmetric construction, x advances one tile
    // per step.
    let mut vert_hit: Option<(f32, f32)> = None;
    {
        let x_intercept = (origin_x / tile).floor() * tile + if facing_right { tile } else { 0.0 };
        let y_intercept = origin_y + (x_intercept - origin_x) * tan_a;

        let x_step = if facing_left { -tile } else { tile };
        let mut y_step = tile * tan_a;
        if (facing_up && y_step > 0.0) || (facing_down && y_step < 0.0) {
            y_step = -y_step;
        }

        let mut next_x = x_intercept;
        let mut next_y = y_intercept;
        while in_bounds(next_x, next_y) {
            let probe_x = next_x - if facing_left { 1.0 } else { 0.0 };
            if map.is_wall(probe_x, next_y) {
                vert_hit = Some((next_x, next_y));
                break;
            }
            next_x += x_step;
            next_y += y_step;
        }
    }

    let horz_distance = horz_hit
        .map(|(x, y)| distance_between(origin_x, origin_y, x, y))
        .unwrap_or(f32::INFINITY);
    let vert_distance = vert_hit
        .map(|(x, y)| distance_between(origin_x, origin_y, x, y))
        .unwrap_or(f32::INFINITY);

    let vertical = vert_distance < horz_distance;
    let ((hit_x, hit_y), distance) = if vertical {
        (vert_hit.unwrap_or((origin_x, origin_y)), vert_distance)
    } else {
        (horz_hit.unwrap_or((origin_x, origin_y)), horz_distance)
    };

    Intersect {
        angle: a,
        hit_x,
        hit_y,
        distance,
        vertical,
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI, TAU};

    use super::*;

    const EPS: f32 = 0.01;

    /// A 5x5 map: open 3x3 interior ringed by wall, tile edge 64.
    fn bordered_room() -> TileMap {
        TileMap::from_text("11111\n10001\n10001\n10001\n11111", 64.0).expect("valid map")
    }

    #[test]
    fn normalize_angle_stays_in_range() {
        for &a in &[-10.0, -TAU, -0.5, 0.0, 1.0, PI, TAU, 7.5, 100.0] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "normalize({a}) gave {n}");
            assert!((normalize_angle(n) - n).abs() < 1e-6, "not idempotent at {a}");
        }
    }

    #[test]
    fn normalize_angle_wraps_negative_angles_up() {
        assert!((normalize_angle(-FRAC_PI_2) - 1.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ray_facing_right_hits_the_vertical_family() {
        let map = bordered_room();
        // Exact center of the center tile.
        let hit = cast(160.0, 160.0, 0.0, &map);
        assert!(hit.vertical);
        assert!((hit.hit_x - 256.0).abs() < EPS, "hit_x = {}", hit.hit_x);
        assert!((hit.hit_y - 160.0).abs() < EPS, "hit_y = {}", hit.hit_y);
        assert!((hit.distance - 96.0).abs() < EPS, "distance = {}", hit.distance);
    }

    #[test]
    fn ray_facing_down_hits_the_horizontal_family() {
        let map = bordered_room();
        let hit = cast(160.0, 160.0, FRAC_PI_2, &map);
        assert!(!hit.vertical);
        assert!((hit.hit_y - 256.0).abs() < EPS, "hit_y = {}", hit.hit_y);
        assert!((hit.hit_x - 160.0).abs() < EPS, "hit_x = {}", hit.hit_x);
        assert!((hit.distance - 96.0).abs() < EPS);
    }

    #[test]
    fn ray_facing_left_hits_the_near_wall_plane() {
        let map = bordered_room();
        let hit = cast(160.0, 160.0, PI, &map);
        assert!(hit.vertical);
        assert!((hit.hit_x - 64.0).abs() < EPS);
        assert!((hit.distance - 96.0).abs() < EPS);
    }

    #[test]
    fn ray_facing_up_hits_the_near_wall_plane() {
        let map = bordered_room();
        let hit = cast(160.0, 160.0, 1.5 * PI, &map);
        assert!(!hit.vertical);
        assert!((hit.hit_y - 64.0).abs() < EPS);
        assert!((hit.distance - 96.0).abs() < EPS);
    }

    #[test]
    fn axis_and_near_axis_angles_terminate_with_finite_hits() {
        let map = bordered_room();
        let axes = [0.0, FRAC_PI_2, PI, 1.5 * PI];
        for &axis in &axes {
            for &nudge in &[-1e-4, 0.0, 1e-4] {
                let hit = cast(160.0, 160.0, axis + nudge, &map);
                assert!(
                    hit.distance.is_finite(),
                    "angle {} produced a non-finite distance",
                    axis + nudge
                );
                assert!(hit.distance >= 64.0 && hit.distance <= 160.0);
            }
        }
    }

    #[test]
    fn every_direction_hits_inside_a_closed_room() {
        let map = bordered_room();
        for i in 0..360 {
            let a = i as f32 * TAU / 360.0;
            let hit = cast(160.0, 160.0, a, &map);
            assert!(hit.distance.is_finite(), "angle {a} escaped the room");
            // Nothing in the room is closer than the wall plane or farther
            // than the corner-to-corner span.
            assert!(hit.distance >= 96.0 - EPS, "angle {a}: {}", hit.distance);
            assert!(hit.distance <= 160.0, "angle {a}: {}", hit.distance);
        }
    }

    #[test]
    fn diagonal_ray_reports_the_nearer_family() {
        let map = bordered_room();
        // 30 degrees below the positive x axis: the vertical plane at
        // x = 256 is 96 / cos(30) away, the horizontal plane at y = 256 is
        // 96 / sin(30) = 192 away, so the vertical family must win.
        let hit = cast(160.0, 160.0, FRAC_PI_6, &map);
        assert!(hit.vertical);
        assert!((hit.hit_x - 256.0).abs() < EPS);
        assert!((hit.distance - 96.0 / FRAC_PI_6.cos()).abs() < EPS);
    }

    #[test]
    fn fov_partition_covers_the_cone_left_to_right() {
        let fov = PI / 3.0; // 60 degrees
        let num_rays = 60; // 900 px viewport, 15 px strips
        let player_a = 1.0;
        let angles: Vec<f32> = ray_angles(player_a, fov, num_rays).collect();
        assert_eq!(angles.len(), num_rays);
        assert!((angles[0] - (player_a - fov / 2.0)).abs() < 1e-6);
        let expected_last = player_a + fov / 2.0 - fov / num_rays as f32;
        assert!((angles[num_rays - 1] - expected_last).abs() < 1e-5);
        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
