//! Domain types: slab geometry, tunables, session state and presentation events.

pub mod config;
pub mod events;
pub mod geometry;
pub mod state;
