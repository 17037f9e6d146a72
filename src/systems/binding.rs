//! Physics binding: one [`Layer`] owns both the visual and the physics side of a
//! slab and keeps them in step.
//!
//! Settled and in-flight layers are driven by game logic (logic -> visual and
//! body). Debris is driven by the physics world (body -> visual).

use glam::Vec3;

use crate::domain::geometry::{Axis, Slab};
use crate::rigid_body::{BodyHandle, BoxShape, RigidBox};
use crate::rigid_body_system::RigidBodySystem;

use super::scene::{Scene, VisualBox, VisualId};

/// A slab in play: its geometry plus the handles it exclusively owns.
pub struct Layer {
    pub slab: Slab,
    /// Set for stack layers, `None` for debris
    pub travel_axis: Option<Axis>,
    visual: VisualBox,
    body: BodyHandle,
}

impl Layer {
    /// Create the body and the visual for `slab` and register both.
    ///
    /// Zero mass makes a static stack layer; positive mass a falling overhang.
    pub fn spawn(
        visual_id: VisualId,
        slab: Slab,
        travel_axis: Option<Axis>,
        mass: f32,
        hue: f32,
        physics: &mut RigidBodySystem,
        scene: &mut dyn Scene,
    ) -> Self {
        let body = RigidBox::new(mass, BoxShape::new(slab.half_extents()), slab.position);
        let body = physics.add_body(body);
        let visual = VisualBox::new(visual_id, &slab, hue, mass > 0.0);
        scene.add(&visual);
        Self { slab, travel_axis, visual, body }
    }

    pub fn visual(&self) -> &VisualBox {
        &self.visual
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn is_perfect(&self) -> bool {
        self.visual.perfect
    }

    /// Move along one horizontal axis, mirroring into the body.
    pub fn set_axis_position(
        &mut self,
        axis: Axis,
        value: f32,
        physics: &mut RigidBodySystem,
        scene: &mut dyn Scene,
    ) {
        axis.set_component(&mut self.slab.position, value);
        axis.set_component(&mut self.visual.position, value);
        if let Some(body) = physics.body_mut(self.body) {
            axis.set_component(&mut body.position, value);
        }
        scene.update(&self.visual);
    }

    /// Shrink to `retained`. Shapes cannot be resized, so the body gets a
    /// fresh shape of the new size and is moved with the visual.
    pub fn cut_to(&mut self, retained: &Slab, physics: &mut RigidBodySystem, scene: &mut dyn Scene) {
        self.slab = *retained;
        self.visual.fit(retained);
        if let Some(body) = physics.body_mut(self.body) {
            body.replace_shape(BoxShape::new(retained.half_extents()));
            body.position = retained.position;
        }
        scene.update(&self.visual);
    }

    /// Land exactly on `snapped` and show the perfect variant.
    pub fn snap_to(&mut self, snapped: &Slab, physics: &mut RigidBodySystem, scene: &mut dyn Scene) {
        self.slab = *snapped;
        self.visual.fit(snapped);
        self.visual.perfect = true;
        if let Some(body) = physics.body_mut(self.body) {
            body.position = snapped.position;
        }
        scene.update(&self.visual);
    }

    /// Copy the simulated transform onto the visual. Returns the body position,
    /// or `None` when the body is gone.
    pub fn sync_from_physics(&mut self, physics: &RigidBodySystem, scene: &mut dyn Scene) -> Option<Vec3> {
        let body = physics.body(self.body)?;
        self.slab.position = body.position;
        self.visual.position = body.position;
        self.visual.quaternion = body.quaternion;
        scene.update(&self.visual);
        Some(body.position)
    }

    /// Release the body and the visual.
    pub fn dispose(self, physics: &mut RigidBodySystem, scene: &mut dyn Scene) {
        physics.remove_body(self.body);
        scene.dispose(self.visual.id);
    }
}
