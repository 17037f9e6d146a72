use std::collections::BTreeMap;

use glam::Vec3;

use crate::scene::{Scene, VisualBox, VisualId};

/// Floats written per visual: x y z qx qy qz qw width height depth hue flags
pub const FLOATS_PER_VISUAL: usize = 12;

pub const FLAG_PERFECT: u32 = 1;
pub const FLAG_DEBRIS: u32 = 1 << 1;

/// Scene that mirrors every visual and packs them into a flat `f32` buffer on
/// each render, for the JS host to read straight out of wasm memory.
pub struct ExtractScene {
    visuals: BTreeMap<VisualId, VisualBox>,
    camera: Vec3,
    transfer_buffer: Vec<f32>,
    rendered_count: usize,
    frames: u64,
}

impl ExtractScene {
    pub fn new(camera: Vec3) -> Self {
        Self {
            visuals: BTreeMap::new(),
            camera,
            transfer_buffer: Vec::with_capacity(64 * FLOATS_PER_VISUAL),
            rendered_count: 0,
            frames: 0,
        }
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn visual(&self, id: VisualId) -> Option<&VisualBox> {
        self.visuals.get(&id)
    }

    /// Visuals packed by the last render
    pub fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn transfer_buffer(&self) -> &[f32] {
        &self.transfer_buffer[..self.rendered_count * FLOATS_PER_VISUAL]
    }

    /// Get pointer to the packed transforms (for JS rendering)
    pub fn transfer_ptr(&self) -> *const f32 {
        self.transfer_buffer.as_ptr()
    }

    pub fn transfer_len(&self) -> usize {
        self.rendered_count * FLOATS_PER_VISUAL
    }
}

impl Scene for ExtractScene {
    fn add(&mut self, visual: &VisualBox) {
        self.visuals.insert(visual.id, *visual);
    }

    fn update(&mut self, visual: &VisualBox) {
        if let Some(slot) = self.visuals.get_mut(&visual.id) {
            *slot = *visual;
        }
    }

    fn dispose(&mut self, id: VisualId) {
        self.visuals.remove(&id);
    }

    fn camera(&self) -> Vec3 {
        self.camera
    }

    fn camera_mut(&mut self) -> &mut Vec3 {
        &mut self.camera
    }

    fn render(&mut self) {
        self.transfer_buffer.clear();
        for v in self.visuals.values() {
            let mut flags = 0u32;
            if v.perfect {
                flags |= FLAG_PERFECT;
            }
            if v.debris {
                flags |= FLAG_DEBRIS;
            }
            self.transfer_buffer.extend_from_slice(&[
                v.position.x,
                v.position.y,
                v.position.z,
                v.quaternion.x,
                v.quaternion.y,
                v.quaternion.z,
                v.quaternion.w,
                v.width,
                v.height,
                v.depth,
                v.hue,
                flags as f32,
            ]);
        }
        self.rendered_count = self.visuals.len();
        self.frames += 1;
    }
}
