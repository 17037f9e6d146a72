//! Stacker Engine - layer stacking core for the Stacker block game, in WASM
//!
//! Blocks slide over a growing tower; each drop keeps the overlapping part
//! and turns the rest into falling debris.
//!
//! Architecture:
//! - core/        - logging and random numbers
//! - domain/      - slab geometry, config, session state, presentation events
//! - systems/     - overlap resolution, box physics, physics/visual binding
//! - simulation/  - game session (loop driver, lifecycle) and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short internal/external paths)
pub use crate::core::random;
pub use domain::config;
pub use domain::events;
pub use domain::geometry;
pub use domain::state;
pub use systems::binding;
pub use systems::overlap;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::scene;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(log::LevelFilter::Info);
    log::info!("Stacker WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::GameConfig;
pub use events::{EventQueue, GameEvent, NullPresenter, Presenter};
pub use geometry::{Axis, Slab};
pub use overlap::DropOutcome;
pub use scene::{Scene, VisualBox, VisualId};
pub use simulation::{ExtractScene, GameSession, LayerStack, StackGame};
pub use state::{GameOverReason, SessionStatus};
