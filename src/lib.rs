//! Animals with small neural-network brains learn, generation by
//! generation, to find food in a wrap-around unit square.

pub mod animal;
pub mod brain;
pub mod config;
pub mod energy;
pub mod error;
pub mod eye;
pub mod food;
pub mod genetic_algorithm;
pub mod genome;
pub mod neural_network;
pub mod physics;
pub mod renderer;
pub mod reporting;
pub mod save_load;
pub mod session;
pub mod simulation;
pub mod snapshot;
pub mod stats;
pub mod ui;
pub mod world;

pub use error::{SimError, SimResult};
pub use session::Session;
pub use snapshot::{AnimalView, FoodView, WorldSnapshot};
