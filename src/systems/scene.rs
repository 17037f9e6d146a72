//! Renderer collaborator.
//!
//! The core describes every slab as a [`VisualBox`] and pushes changes to a
//! [`Scene`]; how (and whether) they are drawn is up to the implementation.

use glam::{Quat, Vec3};

use crate::domain::geometry::Slab;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub(crate) u32);

/// Render-side representation of one slab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualBox {
    pub id: VisualId,
    pub position: Vec3,
    pub quaternion: Quat,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Hue in degrees, wrapped to [0, 360)
    pub hue: f32,
    /// Landed with no overhang
    pub perfect: bool,
    /// Falling overhang rather than part of the tower
    pub debris: bool,
}

impl VisualBox {
    pub fn new(id: VisualId, slab: &Slab, hue: f32, debris: bool) -> Self {
        Self {
            id,
            position: slab.position,
            quaternion: Quat::IDENTITY,
            width: slab.width,
            height: slab.height,
            depth: slab.depth,
            hue: hue.rem_euclid(360.0),
            perfect: false,
            debris,
        }
    }

    /// Take size and position from `slab`, keeping orientation and flags.
    pub fn fit(&mut self, slab: &Slab) {
        self.position = slab.position;
        self.width = slab.width;
        self.height = slab.height;
        self.depth = slab.depth;
    }
}

pub trait Scene {
    fn add(&mut self, visual: &VisualBox);
    /// Transform, size or flags of an added visual changed.
    fn update(&mut self, visual: &VisualBox);
    /// Release everything held for `id`. Unknown ids are ignored.
    fn dispose(&mut self, id: VisualId);
    fn camera(&self) -> Vec3;
    fn camera_mut(&mut self) -> &mut Vec3;
    fn render(&mut self);
}
