//! RigidBodySystem - Minimal box physics for the stacking game
//!
//! This is intentionally simple (no SAT on rotated boxes / no impulse solver).
//! Goals:
//! - Settled layers are static boxes; overhangs fall, land, and tip off edges.
//! - Keep bodies stable and deterministic under a fixed time step.
//!
//! Current behavior:
//! - Dynamic bodies collide only with static bodies, using world-space AABBs.
//! - Rotation is integrated for looks; contacts ignore it beyond the AABB.

mod collision;
mod system;

pub use system::RigidBodySystem;
