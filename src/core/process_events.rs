//! Level-polled input sampling.
//!
//! Keys are sampled by level (`is_key_down`) once per tick into an immutable
//! snapshot. Edge-triggered press/release events are not enough here: with
//! several movement keys held at once, releases arriving out of order leave
//! a stale direction flag set and the player keeps moving. Reading the
//! current key levels every tick sidesteps that entirely.

use raylib::prelude::*;

use crate::core::player::{MotionIntent, Turn, Walk};

/// Snapshot of the four movement keys for this tick.
pub fn sample_input(rl: &RaylibHandle) -> MotionIntent {
    let turn = if rl.is_key_down(KeyboardKey::KEY_LEFT) {
        Turn::Left
    } else if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
        Turn::Right
    } else {
        Turn::None
    };

    let walk = if rl.is_key_down(KeyboardKey::KEY_UP) {
        Walk::Forward
    } else if rl.is_key_down(KeyboardKey::KEY_DOWN) {
        Walk::Backward
    } else {
        Walk::None
    };

    MotionIntent { turn, walk }
}
