use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal axis a layer slides along (and is cut along).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The other horizontal axis. Travel alternates every drop.
    #[inline]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    #[inline]
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }

    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Position and extent of one slab. Height is global and lives in the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slab {
    /// World-space centre
    pub position: Vec3,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Slab {
    pub fn new(position: Vec3, width: f32, depth: f32, height: f32) -> Self {
        Self { position, width, depth, height }
    }

    /// Extent along a horizontal axis (width on X, depth on Z).
    #[inline]
    pub fn size_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    #[inline]
    pub fn set_size_along(&mut self, axis: Axis, size: f32) {
        match axis {
            Axis::X => self.width = size,
            Axis::Z => self.depth = size,
        }
    }

    #[inline]
    pub fn footprint_area(&self) -> f32 {
        self.width * self.depth
    }

    /// Half extents in the order physics shapes expect them.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.height * 0.5, self.depth * 0.5)
    }
}
