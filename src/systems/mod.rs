//! Systems: overlap resolution, box physics, and the binding between physics
//! bodies and their visuals.

pub mod binding;
pub mod overlap;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod scene;
