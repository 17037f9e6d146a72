use crate::events::Presenter;
use crate::geometry::Axis;
use crate::scene::Scene;
use crate::state::SessionStatus;

use super::camera::raise_camera;
use super::rigid::update_debris;
use super::GameSession;

pub(super) fn tick<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, frame_delta: f32) -> bool {
    if session.state.status != SessionStatus::Running {
        return false;
    }
    let dt = if frame_delta.is_finite() { frame_delta.max(0.0) } else { 0.0 };

    // === PHYSICS ===
    session.physics.step(
        session.config.fixed_step,
        dt,
        session.config.max_sub_steps,
    );
    update_debris(session);

    // === TOP LAYER OSCILLATION ===
    session.elapsed += dt;
    let position = oscillation(
        session.elapsed,
        session.config.speed_at(session.state.score),
        -session.config.travel_extent,
    );
    let GameSession { stack, physics, scene, .. } = session;
    if let Some(top) = stack.top_mut() {
        let axis = top.travel_axis.unwrap_or(Axis::X);
        top.set_axis_position(axis, position, physics, scene);
    }

    // === CAMERA ===
    let target = session.config.box_height * session.stack.len() as f32 + session.config.camera_lead;
    raise_camera(session.scene.camera_mut(), target, session.config.camera_rise_step);

    session.scene.render();
    true
}

/// Position along the travel axis after `elapsed` seconds. With a negative
/// amplitude the cycle starts on the spawn side.
#[inline]
pub(super) fn oscillation(elapsed: f32, speed: f32, amplitude: f32) -> f32 {
    (elapsed * speed).cos() * amplitude
}
