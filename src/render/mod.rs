//! Rendering utilities and the first-person renderer.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer
//! - `line`: Bresenham integer line drawing
//! - `projection`: Distance-to-screen projection math
//! - `render3d`: Column renderer for walls and backdrop
//! - `minimap`: Scaled top-down overlay

pub mod framebuffer;
pub mod line;
pub mod projection;
pub mod render3d;
pub mod minimap;
