use ::rand::RngCore;

use crate::brain::Decision;
use crate::config::{self, SpawnParams, StepParams};
use crate::energy;
use crate::error::SimResult;
use crate::eye::Eye;
use crate::genetic_algorithm::{
    GaussianMutation, GeneticAlgorithm, RouletteWheelSelection, Statistics, UniformCrossover,
};
use crate::genome::Genome;
use crate::physics;
use crate::world::World;

pub struct Simulation {
    world: World,
    ga: GeneticAlgorithm<RouletteWheelSelection>,
    age: usize,
    generation: usize,
}

impl Simulation {
    pub fn random(rng: &mut dyn RngCore, params: &SpawnParams) -> SimResult<Self> {
        let world = World::random(rng, params)?;
        Ok(Self::from_parts(world, 0, 0))
    }

    pub(crate) fn from_parts(world: World, age: usize, generation: usize) -> Self {
        let ga = GeneticAlgorithm::new(
            RouletteWheelSelection,
            UniformCrossover,
            GaussianMutation::new(config::MUTATION_CHANCE, config::MUTATION_COEFF),
        );

        Self {
            world,
            ga,
            age,
            generation,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Ticks elapsed in the current generation.
    pub fn age(&self) -> usize {
        self.age
    }

    /// Advance one tick. Returns the outgoing population's statistics
    /// when this tick closed a generation.
    pub fn step(
        &mut self,
        rng: &mut dyn RngCore,
        params: &StepParams,
    ) -> SimResult<Option<Statistics>> {
        // Eating
        energy::consume_food(&mut self.world.animals, &mut self.world.foods, rng);

        // Vision + brains
        let foods = &self.world.foods;
        let decisions: Vec<Decision> = self
            .world
            .animals
            .iter()
            .map(|animal| {
                let vision = animal
                    .eye
                    .process_vision(animal.position, animal.rotation, foods);
                animal.brain.decide(vision, params)
            })
            .collect();

        // Physics
        physics::apply_decisions(&mut self.world.animals, &decisions, params);
        physics::integrate(&mut self.world.animals);

        self.age += 1;

        if self.age > params.generation_length {
            self.generation += 1;
            return self.evolve(rng, params).map(Some);
        }

        Ok(None)
    }

    /// Step until the current generation ends.
    pub fn train(&mut self, rng: &mut dyn RngCore, params: &StepParams) -> SimResult<Statistics> {
        loop {
            if let Some(stats) = self.step(rng, params)? {
                return Ok(stats);
            }
        }
    }

    /// Breed the next population from this one's satiation scores. Newborn
    /// eyes take the current step FOV values.
    fn evolve(&mut self, rng: &mut dyn RngCore, params: &StepParams) -> SimResult<Statistics> {
        self.age = 0;

        let stats = if self.world.animals.is_empty() {
            Statistics::default()
        } else {
            let parents: Vec<Genome> = self.world.animals.iter().map(Genome::of).collect();
            let (children, stats) = self.ga.evolve(rng, &parents)?;

            let eye = Eye::new(params.fov_range, params.fov_angle, params.cells);
            self.world.animals = children
                .into_iter()
                .map(|genome| genome.hatch(rng, eye.clone()))
                .collect::<SimResult<Vec<_>>>()?;

            stats
        };

        energy::reseed_food(&mut self.world.foods, rng);

        Ok(stats)
    }
}
