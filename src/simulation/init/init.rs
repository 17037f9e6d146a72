use glam::Vec3;

use crate::binding::Layer;
use crate::config::GameConfig;
use crate::events::Presenter;
use crate::geometry::{Axis, Slab};
use crate::random::{next_unit, sanitize_seed};
use crate::rigid_body_system::RigidBodySystem;
use crate::scene::Scene;
use crate::state::SessionState;

use super::{GameSession, LayerStack};

pub(super) fn create_session<S: Scene, P: Presenter>(
    config: GameConfig,
    mut scene: S,
    presenter: P,
) -> GameSession<S, P> {
    *scene.camera_mut() = Vec3::from_array(config.camera_start);

    let mut session = GameSession {
        physics: RigidBodySystem::new(Vec3::new(0.0, config.gravity, 0.0)),
        stack: LayerStack::new(),
        state: SessionState::new(config.timer_seconds),
        scene,
        presenter,
        elapsed: 0.0,
        base_hue: 0.0,
        rng_state: sanitize_seed(config.seed),
        config,
    };
    roll_base_hue(&mut session);
    spawn_foundations(&mut session);
    session.scene.render();
    session
}

/// Pick the colour the tower starts from.
pub(super) fn roll_base_hue<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) {
    session.base_hue = next_unit(&mut session.rng_state) * 360.0;
}

/// Hue of the layer (or debris) created while the stack holds `index` layers.
pub(super) fn hue_for(base_hue: f32, hue_step: f32, index: usize) -> f32 {
    base_hue + index as f32 * hue_step
}

/// Layer 0 sits on the tower axis; layer 1 waits off-stage on X, one slab up.
pub(super) fn spawn_foundations<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) {
    let size = session.config.box_size;
    let h = session.config.box_height;
    let extent = session.config.travel_extent;

    let base = Slab::new(Vec3::ZERO, size, size, h);
    let first = Slab::new(Vec3::new(-extent, h, 0.0), size, size, h);
    for slab in [base, first] {
        spawn_stack_layer(session, slab, Axis::X);
    }
}

/// Add a static stack layer travelling along `axis`.
pub(super) fn spawn_stack_layer<S: Scene, P: Presenter>(
    session: &mut GameSession<S, P>,
    slab: Slab,
    axis: Axis,
) {
    let hue = hue_for(session.base_hue, session.config.hue_step, session.stack.len());
    let id = session.stack.next_visual_id();
    let layer = Layer::spawn(
        id,
        slab,
        Some(axis),
        0.0,
        hue,
        &mut session.physics,
        &mut session.scene,
    );
    session.stack.push_layer(layer);
}
