//! Player state and motion.

use raylib::prelude::*;

use crate::core::casters::normalize_angle;
use crate::core::config::Config;
use crate::core::map::TileMap;

/// Per-tick turn intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    None,
    Right,
}

impl Turn {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::None => 0.0,
            Turn::Right => 1.0,
        }
    }
}

/// Per-tick walk intent along the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    Forward,
    None,
    Backward,
}

impl Walk {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Walk::Forward => 1.0,
            Walk::None => 0.0,
            Walk::Backward => -1.0,
        }
    }
}

/// What the input collaborator wants the player to do this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionIntent {
    pub turn: Turn,
    pub walk: Walk,
}

pub struct Player {
    pub pos: Vector2,
    /// Heading in radians, kept in [0, 2pi).
    pub a: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32, config: &Config) -> Self {
        Self {
            pos: Vector2::new(x, y),
            a: normalize_angle(angle),
            move_speed: config.move_speed,
            turn_speed: config.turn_speed,
        }
    }

    /// Applies one tick of motion. The rotation always lands; the walk step
    /// is computed along the already-rotated heading and committed as a
    /// whole pair or not at all. There is no axis-split slide along walls,
    /// so grazing a corner can stop all movement.
    pub fn update(&mut self, intent: MotionIntent, map: &TileMap, dt: f32) {
        self.a = normalize_angle(self.a + intent.turn.sign() * self.turn_speed * dt);

        let step = intent.walk.sign() * self.move_speed * dt;
        let next_x = self.pos.x + self.a.cos() * step;
        let next_y = self.pos.y + self.a.sin() * step;
        if !map.is_wall(next_x, next_y) {
            self.pos.x = next_x;
            self.pos.y = next_y;
        }
    }
}
