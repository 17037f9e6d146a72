use glam::{Mat3, Quat, Vec3};

/// Stable identifier of a body inside a [`RigidBodySystem`](crate::rigid_body_system::RigidBodySystem).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// Axis-aligned box shape in body-local space.
///
/// Shapes never change once attached. Resizing a body means swapping its shape
/// (see [`RigidBox::replace_shape`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    pub half_extents: Vec3,
}

impl BoxShape {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

/// Rigid Box - a body made of one or more box shapes, moving as a unit
pub struct RigidBox {
    // === Physics State ===
    /// World position (center of mass)
    pub position: Vec3,
    pub quaternion: Quat,
    /// Linear velocity (m/s)
    pub velocity: Vec3,
    /// Angular velocity (rad/s, world space)
    pub angular_velocity: Vec3,
    /// Zero mass means static: unaffected by gravity, still collidable
    mass: f32,
    /// Assigned by the system on insertion
    pub(crate) handle: BodyHandle,

    // === Shape Definition ===
    shapes: Vec<BoxShape>,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Fraction of tangential velocity removed per contact
    pub friction: f32,
}

impl RigidBox {
    pub fn new(mass: f32, shape: BoxShape, position: Vec3) -> Self {
        Self {
            position,
            quaternion: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: mass.max(0.0),
            handle: BodyHandle(0),
            shapes: vec![shape],
            restitution: 0.1,
            friction: 0.3,
        }
    }

    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }

    pub fn shapes(&self) -> &[BoxShape] {
        &self.shapes
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    pub fn add_shape(&mut self, shape: BoxShape) {
        self.shapes.push(shape);
    }

    /// Drop every attached shape and attach `shape` in one step.
    pub fn replace_shape(&mut self, shape: BoxShape) {
        self.clear_shapes();
        self.add_shape(shape);
    }

    /// Local half extents covering all shapes (zero when there are none).
    pub fn local_half_extents(&self) -> Vec3 {
        self.shapes
            .iter()
            .fold(Vec3::ZERO, |acc, s| acc.max(s.half_extents))
    }

    /// Half extents of the world-space AABB of the rotated body.
    pub fn world_half_extents(&self) -> Vec3 {
        let h = self.local_half_extents();
        let m = Mat3::from_quat(self.quaternion);
        m.x_axis.abs() * h.x + m.y_axis.abs() * h.y + m.z_axis.abs() * h.z
    }
}
