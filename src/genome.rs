use ::rand::RngCore;

use crate::animal::Animal;
use crate::error::SimResult;
use crate::eye::Eye;
use crate::genetic_algorithm::{Chromosome, Individual};

/// Heritable part of an animal, scored by how much it ate.
pub struct Genome {
    chromosome: Chromosome,
    fitness: f32,
}

impl Individual for Genome {
    fn create(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: 0.0,
        }
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn fitness(&self) -> f32 {
        self.fitness
    }
}

impl Genome {
    pub fn of(animal: &Animal) -> Self {
        Self {
            chromosome: animal.as_chromosome(),
            fitness: animal.satiation() as f32,
        }
    }

    /// Grow a fresh animal (random placement, zero satiation) from this genome.
    pub fn hatch(self, rng: &mut dyn RngCore, eye: Eye) -> SimResult<Animal> {
        Animal::from_chromosome(self.chromosome, eye, rng)
    }
}
