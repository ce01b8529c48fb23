use ::rand::{Rng, RngCore};
use macroquad::prelude::*;
use std::f32::consts::TAU;

use crate::brain::Brain;
use crate::config;
use crate::error::SimResult;
use crate::eye::{self, Eye};
use crate::food;
use crate::genetic_algorithm::Chromosome;

#[derive(Clone, Debug)]
pub struct Animal {
    pub(crate) position: Vec2,
    /// Radians in [0, TAU). Zero faces +y.
    pub(crate) rotation: f32,
    pub(crate) speed: f32,
    pub(crate) eye: Eye,
    pub(crate) brain: Brain,
    /// Foods eaten this generation.
    pub(crate) satiation: usize,
}

impl Animal {
    pub fn random(rng: &mut dyn RngCore, eye: Eye) -> SimResult<Self> {
        let brain = Brain::random(rng, &eye)?;
        Ok(Self::new(eye, brain, rng))
    }

    /// Builds an animal from a bred chromosome. If the chromosome no longer
    /// fits the eye (cell count changed), a fresh random brain is used.
    pub fn from_chromosome(
        chromosome: Chromosome,
        eye: Eye,
        rng: &mut dyn RngCore,
    ) -> SimResult<Self> {
        let brain = match Brain::from_chromosome(chromosome, &eye) {
            Ok(brain) => brain,
            Err(err) => {
                tracing::warn!(
                    cells = eye.cells(),
                    "chromosome does not fit the eye ({err}), using a random brain"
                );
                Brain::random(rng, &eye)?
            }
        };

        Ok(Self::new(eye, brain, rng))
    }

    pub(crate) fn from_parts(
        position: Vec2,
        rotation: f32,
        speed: f32,
        eye: Eye,
        brain: Brain,
        satiation: usize,
    ) -> Self {
        Self {
            position,
            rotation,
            speed,
            eye,
            brain,
            satiation,
        }
    }

    fn new(eye: Eye, brain: Brain, rng: &mut dyn RngCore) -> Self {
        Self {
            position: food::random_position(rng),
            rotation: rng.gen_range(0.0..TAU),
            speed: config::INITIAL_SPEED,
            eye,
            brain,
            satiation: 0,
        }
    }

    pub fn as_chromosome(&self) -> Chromosome {
        self.brain.as_chromosome()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn satiation(&self) -> usize {
        self.satiation
    }

    pub fn eye(&self) -> &Eye {
        &self.eye
    }

    /// Unit vector the animal is facing.
    pub fn heading(&self) -> Vec2 {
        eye::heading(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_animal_starts_inside_unit_square() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            let animal = Animal::random(&mut rng, Eye::default()).unwrap();
            assert!((0.0..1.0).contains(&animal.position.x));
            assert!((0.0..1.0).contains(&animal.position.y));
            assert!((0.0..TAU).contains(&animal.rotation));
            assert_eq!(animal.speed, config::INITIAL_SPEED);
            assert_eq!(animal.satiation, 0);
        }
    }

    #[test]
    fn chromosome_roundtrip_preserves_brain() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let parent = Animal::random(&mut rng, Eye::default()).unwrap();

        let child =
            Animal::from_chromosome(parent.as_chromosome(), Eye::default(), &mut rng).unwrap();
        assert_eq!(child.as_chromosome(), parent.as_chromosome());
        assert_eq!(child.satiation, 0);
    }

    #[test]
    fn mismatched_chromosome_falls_back_to_random_brain() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let parent = Animal::random(&mut rng, Eye::new(0.25, 3.0, 4)).unwrap();

        let eye = Eye::new(0.25, 3.0, 7);
        let child =
            Animal::from_chromosome(parent.as_chromosome(), eye.clone(), &mut rng).unwrap();

        assert_eq!(child.as_chromosome().len(), Brain::chromosome_len(&eye));
        assert_eq!(child.eye(), &eye);
    }
}
