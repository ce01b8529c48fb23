use macroquad::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::config;
use crate::food::Food;

/// Field-of-view sensor. Splits the visible arc into `cells` buckets and
/// reports how close the food in each bucket is.
#[derive(Clone, Debug, PartialEq)]
pub struct Eye {
    fov_range: f32,
    fov_angle: f32,
    cells: usize,
}

impl Eye {
    pub fn new(fov_range: f32, fov_angle: f32, cells: usize) -> Self {
        assert!(fov_range > 0.0);
        assert!(fov_angle > 0.0);
        assert!(cells > 0);

        Self {
            fov_range,
            fov_angle,
            cells,
        }
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn fov_range(&self) -> f32 {
        self.fov_range
    }

    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    pub fn process_vision(&self, position: Vec2, rotation: f32, foods: &[Food]) -> Vec<f32> {
        let mut cells = vec![0.0; self.cells];
        let half_fov = self.fov_angle / 2.0;

        for food in foods {
            let to_food = food.position - position;
            let distance = to_food.length();

            if distance >= self.fov_range {
                continue;
            }

            // Heading at rotation 0 is +y; measure the angle from there.
            let angle = wrap_angle(heading_angle(to_food) - rotation);

            if !(-half_fov..=half_fov).contains(&angle) {
                continue;
            }

            let cell = ((angle + half_fov) / self.fov_angle * self.cells as f32) as usize;
            let cell = cell.min(self.cells - 1);

            cells[cell] += (self.fov_range - distance) / self.fov_range;
        }

        cells
    }
}

impl Default for Eye {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_FOV_RANGE,
            config::DEFAULT_FOV_ANGLE,
            config::DEFAULT_CELLS,
        )
    }
}

/// Unit vector an animal with this rotation is facing.
pub fn heading(rotation: f32) -> Vec2 {
    vec2(-rotation.sin(), rotation.cos())
}

/// Inverse of [`heading`]: rotation that faces along `v`.
fn heading_angle(v: Vec2) -> f32 {
    (-v.x).atan2(v.y)
}

/// Map any angle into [-PI, PI).
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Map any angle into [0, TAU).
pub fn wrap_rotation(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // Tiny negatives round up to exactly TAU.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
