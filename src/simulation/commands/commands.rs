use crate::events::Presenter;
use crate::geometry::{Axis, Slab};
use crate::overlap::{self, DropOutcome};
use crate::scene::Scene;
use crate::state::{GameOverReason, SessionStatus};

use super::init::spawn_stack_layer;
use super::lifecycle::{end_game, start};
use super::rigid::spawn_debris;
use super::GameSession;

pub(super) fn handle_input<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) -> Option<DropOutcome> {
    match session.state.status {
        SessionStatus::Intro => {
            start(session);
            None
        }
        SessionStatus::Running => drop_layer(session),
        SessionStatus::Paused | SessionStatus::Over => None,
    }
}

pub(super) fn drop_layer<S: Scene, P: Presenter>(session: &mut GameSession<S, P>) -> Option<DropOutcome> {
    if session.state.status != SessionStatus::Running {
        return None;
    }

    let GameSession { stack, physics, scene, .. } = session;
    let (previous, top) = stack.top_pair_mut()?;
    let axis = top.travel_axis.unwrap_or(Axis::X);
    let outcome = overlap::resolve(&top.slab, &previous.slab, axis);

    match outcome {
        DropOutcome::Perfect { snapped } => {
            top.snap_to(&snapped, physics, scene);
            session.state.perfect = true;
            session.state.perfect_streak += 1;
            session.presenter.perfect(session.state.perfect_streak);
            log::debug!("perfect drop on axis {:?} (streak {})", axis, session.state.perfect_streak);
            advance(session, snapped, axis);
        }
        DropOutcome::Partial(cut) => {
            top.cut_to(&cut.retained, physics, scene);
            session.state.perfect = false;
            session.state.perfect_streak = 0;
            log::debug!(
                "cut on axis {:?}: kept {:.3}, dropped {:.3}",
                axis,
                cut.overlap,
                cut.overhang_size
            );
            spawn_debris(session, cut.overhang);
            advance(session, cut.retained, axis);
        }
        DropOutcome::Miss { overlap } => {
            log::debug!("missed on axis {:?} (overlap {:.3})", axis, overlap);
            end_game(session, GameOverReason::Missed);
        }
    }

    Some(outcome)
}

/// Spawn the next layer above `placed`, then score and rewind the clocks.
fn advance<S: Scene, P: Presenter>(session: &mut GameSession<S, P>, placed: Slab, used_axis: Axis) {
    let (next, next_axis) = overlap::next_layer(
        &placed,
        used_axis,
        session.stack.len(),
        session.config.travel_extent,
    );
    spawn_stack_layer(session, next, next_axis);

    session.state.score = session.stack.len().saturating_sub(2) as u32;
    session.state.timer = session.config.timer_seconds;
    session.elapsed = 0.0;
    session.presenter.score_changed(session.state.score);
}
