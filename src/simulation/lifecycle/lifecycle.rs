use glam::Vec3;

use crate::events::Presenter;
use crate::scene::Scene;
use crate::state::{GameOverReason, SessionState, SessionStatus};

use super::init::{roll_base_hue, spawn_foundations};
use super::GameSession;

pub(super) fn start<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) -> bool {
    if session.state.status != SessionStatus::Intro {
        return false;
    }
    session.state.status = SessionStatus::Running;
    session.elapsed = 0.0;
    session.presenter.started();
    log::info!("session started");
    true
}

pub(super) fn pause<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) -> bool {
    if session.state.status != SessionStatus::Running {
        return false;
    }
    session.state.status = SessionStatus::Paused;
    session.presenter.paused();
    log::info!("session paused at score {}", session.state.score);
    true
}

pub(super) fn reset<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, start_now: bool) {
    // Collections are emptied as they are disposed.
    session.stack.dispose_all(&mut session.physics, &mut session.scene);
    session.physics.clear();

    session.state = SessionState::new(session.config.timer_seconds);
    session.elapsed = 0.0;
    *session.scene.camera_mut() = Vec3::from_array(session.config.camera_start);
    roll_base_hue(session);
    spawn_foundations(session);

    session.presenter.reset();
    log::info!("session reset");

    if start_now {
        start(session);
    }
    session.scene.render();
}

pub(super) fn timer_tick<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) {
    if session.state.status != SessionStatus::Running {
        return;
    }
    session.state.timer = session.state.timer.saturating_sub(1);
    session.presenter.timer_tick(session.state.timer);
    if session.state.timer == 0 {
        end_game(session, GameOverReason::TimeUp);
    }
}

pub(super) fn end_game<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, reason: GameOverReason) {
    session.state.status = SessionStatus::Over;
    session.presenter.game_over(session.state.score, reason);
    log::info!("game over ({:?}) with score {}", reason, session.state.score);
}
