use ::rand::RngCore;
use macroquad::prelude::*;

use crate::animal::Animal;
use crate::config::SpawnParams;
use crate::error::SimResult;
use crate::eye::Eye;
use crate::food::Food;

/// Unit square with wrap-around edges.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub(crate) animals: Vec<Animal>,
    pub(crate) foods: Vec<Food>,
}

impl World {
    pub fn random(rng: &mut dyn RngCore, params: &SpawnParams) -> SimResult<Self> {
        let eye = Eye::new(params.fov_range, params.fov_angle, params.cells);

        let animals = (0..params.animals)
            .map(|_| Animal::random(rng, eye.clone()))
            .collect::<SimResult<Vec<_>>>()?;

        let foods = (0..params.foods).map(|_| Food::random(rng)).collect();

        Ok(Self { animals, foods })
    }

    pub(crate) fn from_parts(animals: Vec<Animal>, foods: Vec<Food>) -> Self {
        Self { animals, foods }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
}

/// Wrap position into [0, 1) on both axes.
pub fn wrap(mut pos: Vec2) -> Vec2 {
    pos.x = wrap_unit(pos.x);
    pos.y = wrap_unit(pos.y);
    pos
}

fn wrap_unit(v: f32) -> f32 {
    let wrapped = v.rem_euclid(1.0);
    // Tiny negatives round up to exactly 1.0.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
