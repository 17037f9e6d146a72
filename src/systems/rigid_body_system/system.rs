use glam::{Quat, Vec3};

use crate::rigid_body::{BodyHandle, RigidBox};

use super::collision::{box_contact, Aabb};

/// Horizontal acceleration applied while a body's center hangs past its support.
const TIP_ACCEL: f32 = 6.0;
/// Angular acceleration (rad/s²) of the same tipping motion.
const TIP_SPIN: f32 = 2.0;
const ANGULAR_DAMPING: f32 = 0.6;
/// Below this speed a resting body is put to rest.
const REST_SPEED: f32 = 0.05;
const MAX_SPEED: f32 = 50.0;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    bodies: Vec<RigidBox>,
    next_id: u32,
    gravity: Vec3,
    accumulator: f32,
}

impl RigidBodySystem {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity,
            accumulator: 0.0,
        }
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Register a body and return its handle.
    pub fn add_body(&mut self, mut body: RigidBox) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        body.handle = handle;
        self.bodies.push(body);
        handle
    }

    /// Remove a rigid body by handle. Returns false if it was not registered.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.handle == handle) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBox> {
        self.bodies.iter().find(|b| b.handle == handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBox> {
        self.bodies.iter_mut().find(|b| b.handle == handle)
    }

    /// Remove all bodies (used on session reset).
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
        self.accumulator = 0.0;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_dynamic()).count()
    }

    /// Advance the world by `frame_delta` seconds in fixed increments.
    ///
    /// At most `max_sub_steps` steps of `fixed_step` run per call; any backlog
    /// beyond that is dropped so a long frame cannot snowball. Returns the number
    /// of steps taken.
    pub fn step(&mut self, fixed_step: f32, frame_delta: f32, max_sub_steps: u32) -> u32 {
        if !(fixed_step > 0.0) || !frame_delta.is_finite() || frame_delta <= 0.0 {
            return 0;
        }

        self.accumulator += frame_delta;
        let mut steps = 0;
        while self.accumulator >= fixed_step && steps < max_sub_steps {
            self.step_once(fixed_step);
            self.accumulator -= fixed_step;
            steps += 1;
        }
        if self.accumulator >= fixed_step {
            self.accumulator %= fixed_step;
        }
        steps
    }

    /// One fixed integration step.
    fn step_once(&mut self, dt: f32) {
        // Static and kinematic bodies do not move during the step, so their
        // boxes can be gathered once.
        let statics: Vec<Aabb> = self
            .bodies
            .iter()
            .filter(|b| !b.is_dynamic() && !b.shapes().is_empty())
            .map(|b| Aabb::from_center(b.position, b.local_half_extents()))
            .collect();

        for body in self.bodies.iter_mut().filter(|b| b.is_dynamic()) {
            integrate(body, self.gravity, dt);
            if body.shapes().is_empty() {
                continue;
            }
            for support in statics.iter() {
                resolve_contact(body, support, dt);
            }
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -9.82, 0.0))
    }
}

/// Semi-implicit Euler for position and orientation.
fn integrate(body: &mut RigidBox, gravity: Vec3, dt: f32) {
    body.velocity += gravity * dt;
    body.velocity = body.velocity.clamp_length_max(MAX_SPEED);
    body.position += body.velocity * dt;

    let spin = body.angular_velocity;
    let angle = spin.length() * dt;
    if angle > 1e-6 {
        let delta = Quat::from_axis_angle(spin.normalize(), angle);
        body.quaternion = (delta * body.quaternion).normalize();
    }
    body.angular_velocity *= (1.0 - ANGULAR_DAMPING * dt).max(0.0);
}

fn resolve_contact(body: &mut RigidBox, support: &Aabb, dt: f32) {
    let own = Aabb::from_center(body.position, body.world_half_extents());
    let Some(contact) = box_contact(&own, support) else {
        return;
    };

    body.position += contact.normal * contact.depth;

    let vn = body.velocity.dot(contact.normal);
    if vn < 0.0 {
        body.velocity -= contact.normal * vn * (1.0 + body.restitution);
    }
    let tangential = body.velocity - contact.normal * body.velocity.dot(contact.normal);
    body.velocity -= tangential * body.friction.clamp(0.0, 1.0);

    if contact.normal.y <= 0.5 {
        return;
    }

    // Resting on top of the support: tip over the edge when the center of mass
    // is outside the contact patch.
    let center = body.position;
    let clamped = Vec3::new(
        center.x.clamp(contact.patch_min.x, contact.patch_max.x),
        center.y,
        center.z.clamp(contact.patch_min.z, contact.patch_max.z),
    );
    let hang = Vec3::new(center.x - clamped.x, 0.0, center.z - clamped.z);
    if hang.length_squared() > 1e-8 {
        let dir = hang.normalize();
        body.velocity += dir * TIP_ACCEL * dt;
        body.angular_velocity += Vec3::Y.cross(dir) * TIP_SPIN * dt;
    } else if body.velocity.length() < REST_SPEED {
        body.velocity = Vec3::ZERO;
    }
}
