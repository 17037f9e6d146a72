//! GameSession - one game of stacking, from intro to game over
//!
//! The session owns everything a game needs: config, physics world, layer
//! stack, scene and presenter. The host drives it from three callbacks (frame,
//! countdown, input); all mutation goes through the transition functions below
//! (`tick`, `timer_tick`, `drop_layer`, `start`, `pause`, `reset`).
//!
//! Split by concern:
//! - init/       - construction, foundations, runtime settings
//! - lifecycle/  - status transitions and the countdown
//! - commands/   - drop resolution
//! - step/       - per-frame tick
//! - camera/     - camera follow
//! - render/     - flat transform buffer for the JS renderer

use glam::Vec3;

use crate::binding::Layer;
use crate::config::GameConfig;
use crate::events::Presenter;
use crate::overlap::DropOutcome;
use crate::rigid_body_system::RigidBodySystem;
use crate::scene::Scene;
use crate::state::{SessionState, SessionStatus};

#[path = "stack/stack.rs"]
mod stack;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "step/step.rs"]
mod step;
#[path = "camera/camera.rs"]
mod camera;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use camera::raise_camera;
pub use facade::StackGame;
pub use render_extract::{ExtractScene, FLAG_DEBRIS, FLAG_PERFECT, FLOATS_PER_VISUAL};
pub use stack::LayerStack;

/// One game session
pub struct GameSession<S: Scene, P: Presenter> {
    config: GameConfig,
    physics: RigidBodySystem,
    stack: LayerStack,
    state: SessionState,
    scene: S,
    presenter: P,

    /// Oscillation clock of the in-flight layer; restarts on every drop
    elapsed: f32,
    base_hue: f32,
    rng_state: u32,
}

impl<S: Scene, P: Presenter> GameSession<S, P> {
    /// Create a session in `Intro` with the two foundation layers in place.
    pub fn new(config: GameConfig, scene: S, presenter: P) -> Self {
        init::create_session(config, scene, presenter)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn timer(&self) -> u32 {
        self.state.timer
    }

    pub fn is_perfect(&self) -> bool {
        self.state.perfect
    }

    /// Frame and countdown callbacks should keep re-registering only while this
    /// is true.
    pub fn is_loop_active(&self) -> bool {
        self.state.status == SessionStatus::Running
    }

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    pub fn top_layer(&self) -> Option<&Layer> {
        self.stack.top()
    }

    pub fn physics(&self) -> &RigidBodySystem {
        &self.physics
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn camera(&self) -> Vec3 {
        self.scene.camera()
    }

    pub fn base_hue(&self) -> f32 {
        self.base_hue
    }

    // === TRANSITIONS ===

    /// Intro -> Running. Returns false in any other state.
    pub fn start(&mut self) -> bool {
        lifecycle::start(self)
    }

    /// Running -> Paused. A paused session only leaves through a reset.
    pub fn pause(&mut self) -> bool {
        lifecycle::pause(self)
    }

    /// Tear everything down and rebuild the foundations. With `start` the new
    /// session begins running right away, otherwise it waits in `Intro`.
    pub fn reset(&mut self, start: bool) {
        lifecycle::reset(self, start)
    }

    /// Reset straight into a running session.
    pub fn restart(&mut self) {
        lifecycle::reset(self, true)
    }

    /// One countdown second.
    pub fn timer_tick(&mut self) {
        lifecycle::timer_tick(self)
    }

    /// Click/tap: starts the game from the intro, drops a layer while running,
    /// ignored otherwise.
    pub fn handle_input(&mut self) -> Option<DropOutcome> {
        commands::handle_input(self)
    }

    /// Resolve the in-flight layer against the one below. `None` when the
    /// session is not running.
    pub fn drop_layer(&mut self) -> Option<DropOutcome> {
        commands::drop_layer(self)
    }

    /// Advance one frame by `frame_delta` seconds. Returns false (and does
    /// nothing) unless running.
    pub fn tick(&mut self, frame_delta: f32) -> bool {
        step::tick(self, frame_delta)
    }

    // === SETTINGS ===

    pub fn set_speed_scaling(&mut self, base_speed: f32, speed_per_layer: f32) {
        settings::set_speed_scaling(self, base_speed, speed_per_layer)
    }

    pub fn set_debris_mass(&mut self, mass: f32, scale_by_area: bool) {
        settings::set_debris_mass(self, mass, scale_by_area)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
