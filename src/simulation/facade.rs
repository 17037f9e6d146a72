use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::events::EventQueue;
use crate::overlap::DropOutcome;

use super::render_extract::{ExtractScene, FLOATS_PER_VISUAL};
use super::GameSession;

/// Where the packed transforms live in wasm memory.
#[wasm_bindgen]
pub struct RenderLayout {
    transfer_ptr: u32,
    transfer_len_elements: u32,
    transfer_len_bytes: u32,
    floats_per_visual: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn transfer_ptr(&self) -> u32 { self.transfer_ptr }
    #[wasm_bindgen(getter)]
    pub fn transfer_len_elements(&self) -> u32 { self.transfer_len_elements }
    #[wasm_bindgen(getter)]
    pub fn transfer_len_bytes(&self) -> u32 { self.transfer_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn floats_per_visual(&self) -> u32 { self.floats_per_visual }
}

/// JS-facing handle to one game session
#[wasm_bindgen]
pub struct StackGame {
    core: GameSession<ExtractScene, EventQueue>,
}

impl StackGame {
    pub fn from_config(config: GameConfig) -> Self {
        let camera = glam::Vec3::from_array(config.camera_start);
        Self {
            core: GameSession::new(config, ExtractScene::new(camera), EventQueue::new()),
        }
    }

    pub fn session(&self) -> &GameSession<ExtractScene, EventQueue> {
        &self.core
    }
}

#[wasm_bindgen]
impl StackGame {
    /// Create a game with the default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// Create a game from a JSON config document (missing fields use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<StackGame, JsValue> {
        let config = GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_config(config))
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === CALLBACKS ===

    /// Per-frame callback. Returns false once the loop should stop.
    pub fn tick(&mut self, frame_delta: f32) -> bool {
        self.core.tick(frame_delta)
    }

    /// Per-second countdown callback
    pub fn timer_tick(&mut self) {
        self.core.timer_tick();
    }

    /// Click/tap. Returns the drop result: "perfect", "cut", "miss", or "" when
    /// the input only started the game or was ignored.
    pub fn handle_input(&mut self) -> String {
        outcome_name(self.core.handle_input()).to_string()
    }

    pub fn drop_layer(&mut self) -> String {
        outcome_name(self.core.drop_layer()).to_string()
    }

    // === LIFECYCLE ===

    pub fn start(&mut self) -> bool {
        self.core.start()
    }

    pub fn pause(&mut self) -> bool {
        self.core.pause()
    }

    pub fn reset(&mut self) {
        self.core.reset(false);
    }

    pub fn restart(&mut self) {
        self.core.restart();
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.core.status().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn loop_active(&self) -> bool {
        self.core.is_loop_active()
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.core.score() }

    #[wasm_bindgen(getter)]
    pub fn timer(&self) -> u32 { self.core.timer() }

    #[wasm_bindgen(getter)]
    pub fn perfect(&self) -> bool { self.core.is_perfect() }

    #[wasm_bindgen(getter)]
    pub fn stack_len(&self) -> usize { self.core.stack().len() }

    #[wasm_bindgen(getter)]
    pub fn debris_count(&self) -> usize { self.core.stack().debris_count() }

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 { self.core.camera().x }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 { self.core.camera().y }

    #[wasm_bindgen(getter)]
    pub fn camera_z(&self) -> f32 { self.core.camera().z }

    /// Drain queued presentation events as a JSON array
    pub fn drain_events_json(&mut self) -> String {
        self.core.presenter_mut().drain_json()
    }

    // === SETTINGS ===

    pub fn set_speed_scaling(&mut self, base_speed: f32, speed_per_layer: f32) {
        self.core.set_speed_scaling(base_speed, speed_per_layer);
    }

    pub fn set_debris_mass(&mut self, mass: f32, scale_by_area: bool) {
        self.core.set_debris_mass(mass, scale_by_area);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    // === RENDERING API ===

    /// Get pointer to packed visual transforms (for JS rendering)
    pub fn transfer_ptr(&self) -> *const f32 {
        self.core.scene().transfer_ptr()
    }

    /// Floats written by the last render
    pub fn transfer_len(&self) -> usize {
        self.core.scene().transfer_len()
    }

    /// Copy of the packed transforms, for hosts that do not read wasm memory
    pub fn transfer_buffer(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.scene().transfer_buffer())
    }

    pub fn render_layout(&self) -> RenderLayout {
        let scene = self.core.scene();
        let len = scene.transfer_len();
        RenderLayout {
            transfer_ptr: scene.transfer_ptr() as u32,
            transfer_len_elements: len as u32,
            transfer_len_bytes: (len * std::mem::size_of::<f32>()) as u32,
            floats_per_visual: FLOATS_PER_VISUAL as u32,
        }
    }
}

impl Default for StackGame {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_name(outcome: Option<DropOutcome>) -> &'static str {
    match outcome {
        Some(DropOutcome::Perfect { .. }) => "perfect",
        Some(DropOutcome::Partial(_)) => "cut",
        Some(DropOutcome::Miss { .. }) => "miss",
        None => "",
    }
}
