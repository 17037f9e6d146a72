use serde::{Deserialize, Serialize};

/// Tunable game parameters.
///
/// Loaded from a JSON document by the host (`GameConfig::from_json`); every field
/// is optional and falls back to the classic game's values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Height of every slab
    pub box_height: f32,
    /// Width/depth of the foundation layers, and the reference footprint for debris mass
    pub box_size: f32,
    /// Distance from the tower axis where new layers spawn; also the oscillation amplitude
    pub travel_extent: f32,
    /// Oscillation angular speed (rad/s)
    pub base_speed: f32,
    /// Extra angular speed per scored layer
    pub speed_per_layer: f32,
    pub debris_mass: f32,
    /// Scale debris mass by its footprint relative to `box_size²`
    pub scale_debris_mass: bool,
    /// Gravity along Y (m/s²)
    pub gravity: f32,
    pub fixed_step: f32,
    pub max_sub_steps: u32,
    pub camera_start: [f32; 3],
    /// Target camera height above the top of the stack
    pub camera_lead: f32,
    pub camera_rise_step: f32,
    /// Countdown start value, in timer ticks (seconds)
    pub timer_seconds: u32,
    /// Debris below this height is dropped from the world
    pub debris_cull_y: f32,
    /// Hue shift between consecutive layers (degrees)
    pub hue_step: f32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            box_height: 1.0,
            box_size: 5.0,
            travel_extent: 10.0,
            base_speed: 1.0,
            speed_per_layer: 0.0,
            debris_mass: 0.5,
            scale_debris_mass: false,
            gravity: -9.82,
            fixed_step: 1.0 / 60.0,
            max_sub_steps: 3,
            camera_start: [10.0, 10.0, 10.0],
            camera_lead: 8.0,
            camera_rise_step: 0.15,
            timer_seconds: 10,
            debris_cull_y: -40.0,
            hue_step: 5.0,
            seed: 0x9E37_79B9,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("box_height", self.box_height),
            ("box_size", self.box_size),
            ("travel_extent", self.travel_extent),
            ("fixed_step", self.fixed_step),
            ("debris_mass", self.debris_mass),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if self.max_sub_steps == 0 {
            return Err("max_sub_steps must be at least 1".to_string());
        }
        if self.timer_seconds == 0 {
            return Err("timer_seconds must be at least 1".to_string());
        }
        if !self.base_speed.is_finite() || !self.speed_per_layer.is_finite() {
            return Err("oscillation speed must be finite".to_string());
        }
        let finite = [
            ("gravity", self.gravity),
            ("debris_cull_y", self.debris_cull_y),
            ("camera_lead", self.camera_lead),
            ("hue_step", self.hue_step),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if !(self.camera_rise_step.is_finite() && self.camera_rise_step >= 0.0) {
            return Err(format!(
                "camera_rise_step must be a finite non-negative number, got {}",
                self.camera_rise_step
            ));
        }
        Ok(())
    }

    /// Oscillation speed for a tower with `score` scored layers.
    #[inline]
    pub fn speed_at(&self, score: u32) -> f32 {
        self.base_speed + self.speed_per_layer * score as f32
    }

    /// Mass of an overhang with the given footprint.
    pub fn debris_mass_for(&self, width: f32, depth: f32) -> f32 {
        if self.scale_debris_mass {
            let reference = self.box_size * self.box_size;
            self.debris_mass * (width * depth) / reference
        } else {
            self.debris_mass
        }
    }
}
