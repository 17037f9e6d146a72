use crate::binding::Layer;
use crate::rigid_body_system::RigidBodySystem;
use crate::scene::{Scene, VisualId};

/// Settled layers in insertion order, plus the debris cut off during play.
///
/// Index 0 and 1 are the foundations; layer `n` sits at `n * box_height`.
/// The last layer is the one currently in flight.
pub struct LayerStack {
    layers: Vec<Layer>,
    debris: Vec<Layer>,
    next_visual: u32,
}

impl LayerStack {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            debris: Vec::new(),
            next_visual: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn debris(&self) -> &[Layer] {
        &self.debris
    }

    pub fn debris_count(&self) -> usize {
        self.debris.len()
    }

    pub fn top(&self) -> Option<&Layer> {
        self.layers.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Layer> {
        self.layers.last_mut()
    }

    /// The in-flight layer and the one directly beneath it.
    pub fn top_pair_mut(&mut self) -> Option<(&Layer, &mut Layer)> {
        let (top, rest) = self.layers.split_last_mut()?;
        let previous = rest.last()?;
        Some((previous, top))
    }

    pub(crate) fn next_visual_id(&mut self) -> VisualId {
        let id = VisualId(self.next_visual);
        self.next_visual = self.next_visual.saturating_add(1);
        id
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn push_debris(&mut self, layer: Layer) {
        self.debris.push(layer);
    }

    /// Copy every debris body's transform onto its visual.
    pub fn sync_debris(&mut self, physics: &RigidBodySystem, scene: &mut dyn Scene) {
        for layer in self.debris.iter_mut() {
            layer.sync_from_physics(physics, scene);
        }
    }

    /// Dispose debris that fell below `floor_y`. Returns how many went.
    pub fn cull_debris(&mut self, floor_y: f32, physics: &mut RigidBodySystem, scene: &mut dyn Scene) -> usize {
        let mut culled = 0;
        let mut i = 0;
        while i < self.debris.len() {
            if self.debris[i].slab.position.y < floor_y {
                let layer = self.debris.swap_remove(i);
                layer.dispose(physics, scene);
                culled += 1;
            } else {
                i += 1;
            }
        }
        culled
    }

    /// Dispose every layer and every piece of debris. Both collections are
    /// empty afterwards, so nothing can be disposed twice.
    pub fn dispose_all(&mut self, physics: &mut RigidBodySystem, scene: &mut dyn Scene) {
        for layer in self.layers.drain(..).chain(self.debris.drain(..)) {
            layer.dispose(physics, scene);
        }
        self.next_visual = 1;
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}
