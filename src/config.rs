// All tunable simulation constants in one place.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};
use std::path::Path;

use crate::error::SimResult;

// World (normalized unit square, always toroidal)
pub const COLLISION_DISTANCE: f32 = 0.01;
pub const INITIAL_SPEED: f32 = 0.002;

// Spawn defaults
pub const DEFAULT_ANIMALS: usize = 40;
pub const DEFAULT_FOODS: usize = 60;
pub const DEFAULT_FOV_RANGE: f32 = 0.25;
pub const DEFAULT_FOV_ANGLE: f32 = PI + FRAC_PI_4;
pub const DEFAULT_CELLS: usize = 9;

// Step defaults
pub const DEFAULT_SPEED_MIN: f32 = 0.001;
pub const DEFAULT_SPEED_MAX: f32 = 0.005;
pub const DEFAULT_SPEED_ACCEL: f32 = 0.2;
pub const DEFAULT_ROTATION_ACCEL: f32 = FRAC_PI_4;
pub const DEFAULT_GENERATION_LENGTH: usize = 2500;

// Slider ranges
pub const ANIMALS_RANGE: (usize, usize) = (0, 200);
pub const FOODS_RANGE: (usize, usize) = (0, 300);
pub const FOV_RANGE_RANGE: (f32, f32) = (0.01, 1.0);
pub const FOV_ANGLE_RANGE: (f32, f32) = (0.1, 2.0 * PI);
pub const CELLS_RANGE: (usize, usize) = (1, 32);
pub const SPEED_RANGE: (f32, f32) = (0.0, 0.02);
pub const SPEED_ACCEL_RANGE: (f32, f32) = (0.0, 1.0);
pub const ROTATION_ACCEL_RANGE: (f32, f32) = (0.0, PI);
pub const GENERATION_LENGTH_RANGE: (usize, usize) = (1, 10_000);

// Genetic algorithm
pub const MUTATION_CHANCE: f32 = 0.01;
pub const MUTATION_COEFF: f32 = 0.3;

// Rendering (fractions of viewport width)
pub const ANIMAL_SIZE: f32 = 0.01;
pub const FOOD_RADIUS: f32 = 0.01 / 2.0;

// Stats
pub const FITNESS_HISTORY: usize = 500;

pub const DEFAULT_SETTINGS_PATH: &str = "forager.json";
pub const DEFAULT_SAVE_PATH: &str = "forager_save.bin";

/// Values read once per restart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnParams {
    pub animals: usize,
    pub foods: usize,
    pub fov_range: f32,
    pub fov_angle: f32,
    pub cells: usize,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            animals: DEFAULT_ANIMALS,
            foods: DEFAULT_FOODS,
            fov_range: DEFAULT_FOV_RANGE,
            fov_angle: DEFAULT_FOV_ANGLE,
            cells: DEFAULT_CELLS,
        }
    }
}

impl SpawnParams {
    /// Force field-of-view values into a usable shape.
    pub fn sanitize(&mut self) {
        self.cells = self.cells.max(1);
        self.fov_range = positive_or(self.fov_range, DEFAULT_FOV_RANGE);
        self.fov_angle = positive_or(self.fov_angle, DEFAULT_FOV_ANGLE);
    }
}

/// Values re-read on every frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepParams {
    pub speed_min: f32,
    pub speed_max: f32,
    pub speed_accel: f32,
    pub rotation_accel: f32,
    pub generation_length: usize,
    pub fov_range: f32,
    pub fov_angle: f32,
    pub cells: usize,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            speed_accel: DEFAULT_SPEED_ACCEL,
            rotation_accel: DEFAULT_ROTATION_ACCEL,
            generation_length: DEFAULT_GENERATION_LENGTH,
            fov_range: DEFAULT_FOV_RANGE,
            fov_angle: DEFAULT_FOV_ANGLE,
            cells: DEFAULT_CELLS,
        }
    }
}

impl StepParams {
    /// Pull `speed_min` down to `speed_max`. Returns true when it had to.
    pub fn clamp_speed_range(&mut self) -> bool {
        if self.speed_min > self.speed_max {
            self.speed_min = self.speed_max;
            true
        } else {
            false
        }
    }

    pub fn sanitize(&mut self) {
        self.speed_min = finite_or(self.speed_min, DEFAULT_SPEED_MIN);
        self.speed_max = finite_or(self.speed_max, DEFAULT_SPEED_MAX);
        self.clamp_speed_range();
        self.speed_accel = finite_or(self.speed_accel, DEFAULT_SPEED_ACCEL).abs();
        self.rotation_accel = finite_or(self.rotation_accel, DEFAULT_ROTATION_ACCEL).abs();
        self.cells = self.cells.max(1);
        self.fov_range = positive_or(self.fov_range, DEFAULT_FOV_RANGE);
        self.fov_angle = positive_or(self.fov_angle, DEFAULT_FOV_ANGLE);
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Optional on-disk overrides for the slider defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seed: Option<u64>,
    pub spawn: SpawnParams,
    pub step: StepParams,
}

impl Settings {
    pub fn from_json(text: &str) -> SimResult<Self> {
        let mut settings: Settings = serde_json::from_str(text)?;
        settings.spawn.sanitize();
        settings.step.sanitize();
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Missing file means defaults; a malformed one is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let settings = Self::load(path)?;
        tracing::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_speed_min_down_to_speed_max() {
        let mut params = StepParams {
            speed_min: 0.01,
            speed_max: 0.004,
            ..StepParams::default()
        };

        assert!(params.clamp_speed_range());
        assert_eq!(params.speed_min, 0.004);
        assert!(params.speed_min <= params.speed_max);

        assert!(!params.clamp_speed_range());
    }

    #[test]
    fn clamp_leaves_ordered_range_untouched() {
        let mut params = StepParams::default();
        let before = params;
        assert!(!params.clamp_speed_range());
        assert_eq!(params, before);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "spawn": { "animals": 12 } }"#).unwrap();

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.spawn.animals, 12);
        assert_eq!(settings.spawn.foods, DEFAULT_FOODS);
        assert_eq!(settings.step, StepParams::default());
    }

    #[test]
    fn settings_sanitize_bad_values() {
        let settings = Settings::from_json(
            r#"{ "spawn": { "cells": 0, "fov_range": -1.0 },
                 "step": { "speed_min": 0.5, "speed_max": 0.1, "cells": 0 } }"#,
        )
        .unwrap();

        assert_eq!(settings.spawn.cells, 1);
        assert_eq!(settings.spawn.fov_range, DEFAULT_FOV_RANGE);
        assert_eq!(settings.step.cells, 1);
        assert!((settings.step.speed_min - 0.1).abs() < 1e-6);
    }

    #[test]
    fn non_finite_step_values_fall_back_to_defaults() {
        let mut params = StepParams {
            speed_min: f32::NAN,
            speed_max: f32::INFINITY,
            speed_accel: f32::NAN,
            rotation_accel: f32::NEG_INFINITY,
            ..StepParams::default()
        };
        params.sanitize();

        assert_eq!(params.speed_min, DEFAULT_SPEED_MIN);
        assert_eq!(params.speed_max, DEFAULT_SPEED_MAX);
        assert_eq!(params.speed_accel, DEFAULT_SPEED_ACCEL);
        assert_eq!(params.rotation_accel, DEFAULT_ROTATION_ACCEL);
    }

    #[test]
    fn malformed_settings_are_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_settings_file_gives_defaults() {
        let settings = Settings::load_or_default("/nonexistent/forager.json").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
