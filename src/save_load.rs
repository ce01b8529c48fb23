use macroquad::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::animal::Animal;
use crate::brain::Brain;
use crate::config::SpawnParams;
use crate::error::{SimError, SimResult};
use crate::eye::{wrap_rotation, Eye};
use crate::food::Food;
use crate::genetic_algorithm::Chromosome;
use crate::session::Session;
use crate::simulation::Simulation;
use crate::world::{self, World};

const SAVE_VERSION: u32 = 1;

// Serde-friendly wrapper types for macroquad primitives.

#[derive(Clone, Copy, Serialize, Deserialize)]
struct SerdVec2 {
    x: f32,
    y: f32,
}

impl From<Vec2> for SerdVec2 {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SerdVec2 {
    fn restore(self) -> Option<Vec2> {
        if self.x.is_finite() && self.y.is_finite() {
            Some(world::wrap(vec2(self.x, self.y)))
        } else {
            None
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct SerdEye {
    fov_range: f32,
    fov_angle: f32,
    cells: usize,
}

impl From<&Eye> for SerdEye {
    fn from(eye: &Eye) -> Self {
        Self {
            fov_range: eye.fov_range(),
            fov_angle: eye.fov_angle(),
            cells: eye.cells(),
        }
    }
}

impl SerdEye {
    fn restore(&self) -> Option<Eye> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if self.cells == 0 || !usable(self.fov_range) || !usable(self.fov_angle) {
            return None;
        }
        Some(Eye::new(self.fov_range, self.fov_angle, self.cells))
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct SerdAnimal {
    position: SerdVec2,
    rotation: f32,
    speed: f32,
    satiation: usize,
    eye: SerdEye,
    chromosome: Chromosome,
}

impl From<&Animal> for SerdAnimal {
    fn from(animal: &Animal) -> Self {
        Self {
            position: animal.position().into(),
            rotation: animal.rotation(),
            speed: animal.speed(),
            satiation: animal.satiation(),
            eye: animal.eye().into(),
            chromosome: animal.as_chromosome(),
        }
    }
}

impl SerdAnimal {
    fn restore(self, index: usize) -> SimResult<Animal> {
        let invalid = |what: &str| SimError::InvalidSave(format!("animal {index}: {what}"));

        let position = self
            .position
            .restore()
            .ok_or_else(|| invalid("non-finite position"))?;
        if !self.rotation.is_finite() || !self.speed.is_finite() {
            return Err(invalid("non-finite rotation or speed"));
        }
        let eye = self.eye.restore().ok_or_else(|| invalid("unusable eye"))?;
        let brain = Brain::from_chromosome(self.chromosome, &eye)
            .map_err(|err| invalid(&err.to_string()))?;

        Ok(Animal::from_parts(
            position,
            wrap_rotation(self.rotation),
            self.speed,
            eye,
            brain,
            self.satiation,
        ))
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct SaveState {
    // Must stay the first field: it is peeked before the full decode.
    version: u32,
    spawn: SpawnParams,
    generation: usize,
    age: usize,
    rng: ChaCha8Rng,
    animals: Vec<SerdAnimal>,
    foods: Vec<SerdVec2>,
}

impl SaveState {
    fn from_session(session: &Session) -> Self {
        let sim = session.simulation();

        Self {
            version: SAVE_VERSION,
            spawn: *session.spawn_params(),
            generation: sim.generation(),
            age: sim.age(),
            rng: session.rng().clone(),
            animals: sim.world().animals().iter().map(SerdAnimal::from).collect(),
            foods: sim
                .world()
                .foods()
                .iter()
                .map(|food| food.position().into())
                .collect(),
        }
    }

    fn restore(self) -> SimResult<Session> {
        if self.version != SAVE_VERSION {
            return Err(SimError::UnsupportedSaveVersion(self.version));
        }

        let animals = self
            .animals
            .into_iter()
            .enumerate()
            .map(|(i, animal)| animal.restore(i))
            .collect::<SimResult<Vec<_>>>()?;

        let foods = self
            .foods
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                pos.restore()
                    .map(Food::new)
                    .ok_or_else(|| SimError::InvalidSave(format!("food {i}: non-finite position")))
            })
            .collect::<SimResult<Vec<_>>>()?;

        let mut spawn = self.spawn;
        spawn.sanitize();

        let sim = Simulation::from_parts(World::from_parts(animals, foods), self.age, self.generation);
        Ok(Session::from_parts(self.rng, sim, spawn))
    }
}

pub fn save_to_file(session: &Session, path: impl AsRef<Path>) -> SimResult<()> {
    let state = SaveState::from_session(session);
    let bytes = bincode::serialize(&state)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

pub fn load_from_file(path: impl AsRef<Path>) -> SimResult<Session> {
    let bytes = std::fs::read(path)?;

    let version: u32 = bincode::deserialize(&bytes)?;
    if version != SAVE_VERSION {
        return Err(SimError::UnsupportedSaveVersion(version));
    }

    let state: SaveState = bincode::deserialize(&bytes)?;
    state.restore()
}
