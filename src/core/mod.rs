//! Core engine types and logic (configuration, map, player, rays).
//!
//! Re-exports:
//! - `config`: Startup-fixed tunables
//! - `map`: Tile map loading and occupancy queries
//! - `player`: Player state and motion intents
//! - `process_events`: Level-polled input sampling
//! - `casters`: Ray/grid intersection

pub mod config;
pub mod map;
pub mod player;
pub mod process_events;
pub mod casters;
