use crate::binding::Layer;
use crate::events::Presenter;
use crate::geometry::Slab;
use crate::scene::Scene;

use super::init::hue_for;
use super::GameSession;

/// Turn a cut-off overhang into a falling body.
pub(super) fn spawn_debris<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, overhang: Slab) {
    let mass = session.config.debris_mass_for(overhang.width, overhang.depth);
    let hue = hue_for(session.base_hue, session.config.hue_step, session.stack.len());
    let id = session.stack.next_visual_id();
    let layer = Layer::spawn(
        id,
        overhang,
        None,
        mass,
        hue,
        &mut session.physics,
        &mut session.scene,
    );
    session.stack.push_debris(layer);
}

/// Pull simulated transforms onto the debris visuals and drop whatever fell
/// out of the world.
pub(super) fn update_debris<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) {
    session.stack.sync_debris(&session.physics, &mut session.scene);
    let culled = session.stack.cull_debris(
        session.config.debris_cull_y,
        &mut session.physics,
        &mut session.scene,
    );
    if culled > 0 {
        log::debug!("culled {} debris bodies", culled);
    }
}
