//! RigidBox - A solid box body that moves as a unit
//!
//! The body stores its shapes in local coordinates (relative to its center)
//! and is placed in the world by position and orientation.

mod body;

pub use body::{BodyHandle, BoxShape, RigidBox};
