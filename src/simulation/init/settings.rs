use glam::Vec3;

use crate::events::Presenter;
use crate::scene::Scene;

use super::GameSession;

pub(super) fn set_speed_scaling<S: Scene, P: Presenter>(
    session: &mut GameSession<S, P>,
    base_speed: f32,
    speed_per_layer: f32,
) {
    if base_speed.is_finite() && speed_per_layer.is_finite() {
        session.config.base_speed = base_speed;
        session.config.speed_per_layer = speed_per_layer;
    } else {
        log::warn!("ignoring non-finite speed scaling ({}, {})", base_speed, speed_per_layer);
    }
}

pub(super) fn set_debris_mass<S: Scene, P: Presenter>(
    session: &mut GameSession<S, P>,
    mass: f32,
    scale_by_area: bool,
) {
    if mass.is_finite() && mass > 0.0 {
        session.config.debris_mass = mass;
        session.config.scale_debris_mass = scale_by_area;
    } else {
        log::warn!("ignoring debris mass {}", mass);
    }
}

pub(super) fn set_gravity<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, gravity: f32) {
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity {}", gravity);
        return;
    }
    session.config.gravity = gravity;
    session.physics.set_gravity(Vec3::new(0.0, gravity, 0.0));
}
