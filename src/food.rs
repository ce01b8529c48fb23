use ::rand::{Rng, RngCore};
use macroquad::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    pub(crate) position: Vec2,
}

impl Food {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self::new(random_position(rng))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Uniform point in the unit square.
pub fn random_position(rng: &mut dyn RngCore) -> Vec2 {
    vec2(rng.gen(), rng.gen())
}
