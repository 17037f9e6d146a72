use glam::Vec3;

use super::*;
use crate::events::{EventQueue, GameEvent, NullPresenter};
use crate::geometry::Axis;
use crate::state::GameOverReason;

type TestSession = GameSession<ExtractScene, EventQueue>;

const FRAME: f32 = 1.0 / 60.0;

fn session_with(config: GameConfig) -> TestSession {
    let camera = Vec3::from_array(config.camera_start);
    GameSession::new(config, ExtractScene::new(camera), EventQueue::new())
}

fn running_session() -> TestSession {
    let mut session = session_with(GameConfig::default());
    assert!(session.start());
    session.presenter_mut().drain();
    session
}

/// Put the in-flight layer at `value` on its travel axis.
fn place_top(session: &mut TestSession, value: f32) {
    let GameSession { stack, physics, scene, .. } = session;
    let top = stack.top_mut().expect("stack has a top layer");
    let axis = top.travel_axis.expect("stack layers have a travel axis");
    top.set_axis_position(axis, value, physics, scene);
}

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "expected {}, got {}", expected, actual);
}

#[test]
fn new_session_waits_in_intro_with_two_foundations() {
    let session = session_with(GameConfig::default());

    assert_eq!(session.status(), SessionStatus::Intro);
    assert!(!session.is_loop_active());
    assert_eq!(session.score(), 0);
    assert_eq!(session.timer(), 10);

    let layers = session.stack().layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].slab.position, Vec3::ZERO);
    assert_eq!(layers[1].slab.position, Vec3::new(-10.0, 1.0, 0.0));
    assert!(layers.iter().all(|l| l.travel_axis == Some(Axis::X)));
    assert_eq!(session.stack().debris_count(), 0);

    assert_eq!(session.physics().body_count(), 2);
    assert_eq!(session.physics().dynamic_body_count(), 0);
    assert_eq!(session.scene().visual_count(), 2);
    // The intro frame is drawn once so the host has something to show.
    assert_eq!(session.scene().rendered_count(), 2);
    assert_eq!(session.camera(), Vec3::new(10.0, 10.0, 10.0));
}

#[test]
fn first_input_starts_the_game() {
    let mut session = session_with(GameConfig::default());

    assert!(session.drop_layer().is_none());
    assert!(session.handle_input().is_none());
    assert_eq!(session.status(), SessionStatus::Running);
    assert!(session.is_loop_active());
    assert_eq!(session.presenter().events(), &[GameEvent::Started]);
    assert_eq!(session.stack().len(), 2);
}

#[test]
fn partial_drop_cuts_layer_and_spawns_debris() {
    let mut session = running_session();
    place_top(&mut session, 3.0);

    let outcome = session.handle_input();
    assert!(matches!(outcome, Some(DropOutcome::Partial(_))));

    assert_eq!(session.stack().len(), 3);
    assert_eq!(session.stack().debris_count(), 1);
    assert_eq!(session.score(), 1);
    assert!(!session.is_perfect());

    // Retained part of the dropped layer
    let cut = &session.stack().layers()[1];
    assert_eq!(cut.slab.width, 2.0);
    assert_eq!(cut.slab.depth, 5.0);
    assert_eq!(cut.slab.position, Vec3::new(1.5, 1.0, 0.0));
    assert_eq!(cut.visual().width, 2.0);
    let body = session.physics().body(cut.body()).expect("cut layer keeps its body");
    assert_eq!(body.shapes().len(), 1);
    assert_eq!(body.shapes()[0].half_extents, Vec3::new(1.0, 0.5, 2.5));
    assert_eq!(body.position, Vec3::new(1.5, 1.0, 0.0));
    assert_eq!(body.mass(), 0.0);

    // Overhang
    let debris = &session.stack().debris()[0];
    assert_eq!(debris.travel_axis, None);
    assert_eq!(debris.slab.width, 3.0);
    assert_eq!(debris.slab.depth, 5.0);
    assert_eq!(debris.slab.position, Vec3::new(4.0, 1.0, 0.0));
    let body = session.physics().body(debris.body()).expect("debris has a body");
    assert!(body.is_dynamic());
    assert_eq!(body.mass(), 0.5);
    assert!(debris.visual().debris);

    // Next layer enters on Z, lined up with the retained part
    let next = session.stack().top().expect("next layer");
    assert_eq!(next.travel_axis, Some(Axis::Z));
    assert_eq!(next.slab.position, Vec3::new(1.5, 2.0, -10.0));
    assert_eq!(next.slab.width, 2.0);

    assert_eq!(session.presenter().events(), &[GameEvent::ScoreChanged { score: 1 }]);
}

#[test]
fn near_exact_drop_is_perfect() {
    let mut session = running_session();
    place_top(&mut session, 0.04);

    let outcome = session.drop_layer();
    assert!(matches!(outcome, Some(DropOutcome::Perfect { .. })));

    assert_eq!(session.stack().len(), 3);
    assert_eq!(session.stack().debris_count(), 0);
    assert_eq!(session.score(), 1);
    assert!(session.is_perfect());

    let landed = &session.stack().layers()[1];
    assert_eq!(landed.slab.position.x, 0.0);
    assert_eq!(landed.slab.width, 5.0);
    assert!(landed.is_perfect());
    let body = session.physics().body(landed.body()).expect("body");
    assert_eq!(body.position.x, 0.0);

    assert_eq!(
        session.presenter().events(),
        &[GameEvent::Perfect { streak: 1 }, GameEvent::ScoreChanged { score: 1 }]
    );
}

#[test]
fn perfect_streak_resets_on_a_cut() {
    let mut session = running_session();
    place_top(&mut session, 0.0);
    session.drop_layer();
    place_top(&mut session, 0.0);
    session.drop_layer();
    assert_eq!(session.state().perfect_streak, 2);

    place_top(&mut session, 1.0);
    session.drop_layer();
    assert_eq!(session.state().perfect_streak, 0);
    assert!(!session.is_perfect());
    assert_eq!(session.score(), 3);
}

#[test]
fn miss_ends_the_game_without_touching_the_stack() {
    let mut session = running_session();
    place_top(&mut session, 5.0);

    let outcome = session.handle_input();
    assert!(matches!(outcome, Some(DropOutcome::Miss { .. })));

    assert_eq!(session.status(), SessionStatus::Over);
    assert_eq!(session.stack().len(), 2);
    assert_eq!(session.stack().debris_count(), 0);
    assert_eq!(session.physics().body_count(), 2);
    assert_eq!(
        session.presenter().events(),
        &[GameEvent::GameOver { score: 0, reason: GameOverReason::Missed }]
    );

    // Nothing runs after game over.
    assert!(session.handle_input().is_none());
    assert!(!session.tick(FRAME));
    session.timer_tick();
    assert_eq!(session.timer(), 10);
}

#[test]
fn travel_axis_alternates_every_drop() {
    let mut session = running_session();
    place_top(&mut session, 1.0);
    session.drop_layer();
    place_top(&mut session, -1.0);
    session.drop_layer();

    let axes: Vec<Option<Axis>> = session.stack().layers().iter().map(|l| l.travel_axis).collect();
    assert_eq!(
        axes,
        vec![Some(Axis::X), Some(Axis::X), Some(Axis::Z), Some(Axis::X)]
    );

    // Second cut was along Z: width carried over, depth shrank by 1.
    let second = &session.stack().layers()[2];
    assert_eq!(second.slab.width, 4.0);
    assert_eq!(second.slab.depth, 4.0);
    assert_eq!(second.slab.position, Vec3::new(0.5, 2.0, -0.5));
    let body = session.physics().body(second.body()).expect("cut layer keeps its body");
    assert_eq!(body.shapes().len(), 1);
    assert_eq!(body.shapes()[0].half_extents, Vec3::new(2.0, 0.5, 2.0));
    assert_eq!(body.position, second.slab.position);
    assert_eq!(session.stack().debris_count(), 2);

    let top = session.stack().top().expect("top");
    assert_eq!(top.slab.position, Vec3::new(-10.0, 3.0, -0.5));
}

#[test]
fn countdown_runs_out() {
    let mut session = running_session();
    for _ in 0..9 {
        session.timer_tick();
    }
    assert_eq!(session.timer(), 1);
    assert_eq!(session.status(), SessionStatus::Running);

    session.timer_tick();
    assert_eq!(session.timer(), 0);
    assert_eq!(session.status(), SessionStatus::Over);

    let events = session.presenter().events();
    assert_eq!(events.len(), 11);
    assert_eq!(events[0], GameEvent::TimerTick { remaining: 9 });
    assert_eq!(
        events[10],
        GameEvent::GameOver { score: 0, reason: GameOverReason::TimeUp }
    );
}

#[test]
fn successful_drop_rewinds_the_countdown() {
    let mut session = running_session();
    session.timer_tick();
    session.timer_tick();
    assert_eq!(session.timer(), 8);

    place_top(&mut session, 2.0);
    session.drop_layer();
    assert_eq!(session.timer(), 10);
}

#[test]
fn paused_session_only_leaves_through_reset() {
    let mut session = running_session();
    assert!(session.pause());
    assert_eq!(session.status(), SessionStatus::Paused);
    assert!(!session.is_loop_active());

    assert!(!session.tick(FRAME));
    assert!(session.handle_input().is_none());
    session.timer_tick();
    assert_eq!(session.timer(), 10);
    assert!(!session.start());
    assert!(!session.pause());

    session.restart();
    assert_eq!(session.status(), SessionStatus::Running);
    assert_eq!(
        session.presenter().events(),
        &[GameEvent::Paused, GameEvent::Reset, GameEvent::Started]
    );
}

#[test]
fn reset_rebuilds_a_fresh_session() {
    let mut session = running_session();
    place_top(&mut session, 3.0);
    session.drop_layer();
    place_top(&mut session, 1.0);
    session.drop_layer();
    for _ in 0..30 {
        session.tick(FRAME);
    }
    session.timer_tick();
    assert!(session.stack().debris_count() > 0);
    assert!(session.camera().y > 10.0);

    session.reset(false);

    assert_eq!(session.status(), SessionStatus::Intro);
    let layers = session.stack().layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].slab.position.y, 0.0);
    assert_eq!(layers[1].slab.position.y, 1.0);
    assert_eq!(layers[1].slab.width, 5.0);
    assert_eq!(session.stack().debris_count(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.timer(), 10);
    assert!(!session.is_perfect());

    assert_eq!(session.physics().body_count(), 2);
    assert_eq!(session.scene().visual_count(), 2);
    assert_eq!(session.camera(), Vec3::new(10.0, 10.0, 10.0));
}

#[test]
fn tick_oscillates_top_layer_and_mirrors_physics() {
    let mut session = running_session();
    assert!(session.tick(0.5));

    let expected = (0.5f32).cos() * -10.0;
    let top = session.stack().top().expect("top");
    assert_close(top.slab.position.x, expected);
    assert_close(top.visual().position.x, expected);
    let body = session.physics().body(top.body()).expect("body");
    assert_close(body.position.x, expected);
    // Only the travel axis moves.
    assert_eq!(body.position.y, 1.0);
    assert_eq!(body.position.z, 0.0);

    let rendered = session.scene().transfer_buffer();
    assert_eq!(rendered.len(), 2 * FLOATS_PER_VISUAL);
}

#[test]
fn oscillation_restarts_at_spawn_after_each_drop() {
    let mut session = running_session();
    session.tick(1.0);
    place_top(&mut session, 0.0);
    session.drop_layer();

    session.tick(0.0);
    let top = session.stack().top().expect("top");
    assert_eq!(top.travel_axis, Some(Axis::Z));
    assert_close(top.slab.position.z, -10.0);
}

#[test]
fn speed_scaling_is_configurable() {
    let mut session = running_session();
    session.set_speed_scaling(2.0, 0.0);
    session.tick(0.5);
    let top = session.stack().top().expect("top");
    assert_close(top.slab.position.x, (1.0f32).cos() * -10.0);
}

#[test]
fn camera_rises_until_it_clears_the_stack() {
    let mut session = running_session();

    // Two layers: target is 2 + 8 = 10, the camera is already there.
    session.tick(FRAME);
    assert_eq!(session.camera().y, 10.0);

    place_top(&mut session, 0.0);
    session.drop_layer();
    session.tick(FRAME);
    assert_close(session.camera().y, 10.15);

    for _ in 0..20 {
        session.tick(FRAME);
    }
    let settled = session.camera().y;
    assert!(settled >= 11.0 && settled < 11.15 + 1e-4, "camera at {}", settled);
    session.tick(FRAME);
    assert_eq!(session.camera().y, settled);
}

#[test]
fn debris_falls_and_is_collected() {
    let mut session = running_session();
    place_top(&mut session, 3.0);
    session.drop_layer();
    let debris_body = session.stack().debris()[0].body();

    for _ in 0..30 {
        session.tick(FRAME);
    }
    let debris = &session.stack().debris()[0];
    assert!(debris.slab.position.y < 1.0);
    let body = session.physics().body(debris_body).expect("still simulated");
    assert_eq!(debris.visual().position, body.position);

    for _ in 0..600 {
        session.tick(FRAME);
    }
    assert_eq!(session.stack().debris_count(), 0);
    assert!(session.physics().body(debris_body).is_none());
    assert_eq!(session.physics().body_count(), 3);
    assert_eq!(session.scene().visual_count(), 3);
}

#[test]
fn non_finite_gravity_is_ignored() {
    let mut session = running_session();
    session.set_gravity(f32::NAN);
    session.set_gravity(f32::INFINITY);
    assert_eq!(session.config().gravity, -9.82);

    // Debris still falls out of the world and is collected.
    place_top(&mut session, 3.0);
    session.drop_layer();
    for _ in 0..600 {
        session.tick(FRAME);
    }
    assert_eq!(session.stack().debris_count(), 0);
    assert_eq!(session.physics().dynamic_body_count(), 0);

    session.set_gravity(-20.0);
    assert_eq!(session.config().gravity, -20.0);
}

#[test]
fn debris_mass_can_scale_with_footprint() {
    let config = GameConfig { scale_debris_mass: true, ..GameConfig::default() };
    let mut session = session_with(config);
    session.start();
    place_top(&mut session, 3.0);
    session.drop_layer();

    let debris = &session.stack().debris()[0];
    let body = session.physics().body(debris.body()).expect("debris body");
    // 3 x 5 out of a 5 x 5 reference
    assert_close(body.mass(), 0.3);
}

#[test]
fn layer_hues_step_with_stack_index() {
    let mut session = running_session();
    place_top(&mut session, 0.0);
    session.drop_layer();

    let base = session.base_hue();
    for (i, layer) in session.stack().layers().iter().enumerate() {
        assert_close(layer.visual().hue, (base + 5.0 * i as f32).rem_euclid(360.0));
    }
}

#[test]
fn same_seed_gives_same_colours() {
    let a = session_with(GameConfig::default());
    let b = session_with(GameConfig::default());
    assert_eq!(a.base_hue(), b.base_hue());

    let c = session_with(GameConfig { seed: 42, ..GameConfig::default() });
    assert_ne!(a.base_hue(), c.base_hue());
}

#[test]
fn session_runs_without_a_presenter() {
    let mut session = GameSession::new(
        GameConfig::default(),
        ExtractScene::new(Vec3::splat(10.0)),
        NullPresenter,
    );
    session.handle_input();
    assert!(session.tick(FRAME));
    assert_eq!(session.status(), SessionStatus::Running);
}
