use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{SpawnParams, StepParams};
use crate::error::SimResult;
use crate::genetic_algorithm::Statistics;
use crate::simulation::Simulation;
use crate::snapshot::WorldSnapshot;

/// Handle to one running simulation: the RNG, the simulation itself and
/// the spawn values it was started with.
pub struct Session {
    rng: ChaCha8Rng,
    sim: Simulation,
    spawn: SpawnParams,
}

impl Session {
    pub fn new(
        num_animals: usize,
        num_foods: usize,
        fov_range: f32,
        fov_angle: f32,
        cells: usize,
    ) -> SimResult<Self> {
        let spawn = SpawnParams {
            animals: num_animals,
            foods: num_foods,
            fov_range,
            fov_angle,
            cells,
        };
        Self::from_params(spawn, None)
    }

    /// Seeded sessions replay identically; `None` draws from OS entropy.
    pub fn from_params(mut spawn: SpawnParams, seed: Option<u64>) -> SimResult<Self> {
        spawn.sanitize();

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let sim = Simulation::random(&mut rng, &spawn)?;

        tracing::info!(
            animals = spawn.animals,
            foods = spawn.foods,
            cells = spawn.cells,
            "session started"
        );

        Ok(Self { rng, sim, spawn })
    }

    pub(crate) fn from_parts(rng: ChaCha8Rng, sim: Simulation, spawn: SpawnParams) -> Self {
        Self { rng, sim, spawn }
    }

    /// Replace the simulation with a fresh one. The RNG stream carries on.
    pub fn restart(&mut self, mut spawn: SpawnParams) -> SimResult<()> {
        spawn.sanitize();
        self.sim = Simulation::random(&mut self.rng, &spawn)?;
        self.spawn = spawn;

        tracing::info!(
            animals = spawn.animals,
            foods = spawn.foods,
            cells = spawn.cells,
            "session restarted"
        );
        Ok(())
    }

    pub fn step(&mut self, params: &StepParams) -> SimResult<Option<Statistics>> {
        let mut params = *params;
        params.sanitize();

        let stats = self.sim.step(&mut self.rng, &params)?;
        if let Some(stats) = &stats {
            log_generation(self.sim.generation(), stats);
        }
        Ok(stats)
    }

    /// Fast-forward to the end of the current generation.
    pub fn train(&mut self, params: &StepParams) -> SimResult<Statistics> {
        let mut params = *params;
        params.sanitize();

        let stats = self.sim.train(&mut self.rng, &params)?;
        log_generation(self.sim.generation(), &stats);
        Ok(stats)
    }

    pub fn generation(&self) -> usize {
        self.sim.generation()
    }

    pub fn world(&self) -> WorldSnapshot {
        WorldSnapshot::from(self.sim.world())
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn spawn_params(&self) -> &SpawnParams {
        &self.spawn
    }

    pub(crate) fn rng(&self) -> &ChaCha8Rng {
        &self.rng
    }
}

fn log_generation(generation: usize, stats: &Statistics) {
    tracing::info!(
        generation,
        min = stats.min_fitness,
        max = stats.max_fitness,
        avg = stats.avg_fitness,
        "generation finished"
    );
}
