use ::rand::RngCore;

use crate::config::StepParams;
use crate::error::SimResult;
use crate::eye::Eye;
use crate::genetic_algorithm::Chromosome;
use crate::neural_network::{LayerTopology, Network};

/// Relative steering change requested by a brain for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    pub speed: f32,
    pub rotation: f32,
}

/// Network wired to an eye: one input per vision cell, two outputs
/// (speed delta, rotation delta).
#[derive(Clone, Debug)]
pub struct Brain {
    network: Network,
}

impl Brain {
    pub fn random(rng: &mut dyn RngCore, eye: &Eye) -> SimResult<Self> {
        let network = Network::random(rng, &Self::topology(eye))?;
        Ok(Self { network })
    }

    /// Fails when the chromosome was bred for a different number of cells.
    pub fn from_chromosome(chromosome: Chromosome, eye: &Eye) -> SimResult<Self> {
        let network = Network::from_weights(&Self::topology(eye), chromosome)?;
        Ok(Self { network })
    }

    pub fn as_chromosome(&self) -> Chromosome {
        self.network.weights().collect()
    }

    pub fn decide(&self, vision: Vec<f32>, params: &StepParams) -> Decision {
        let response = self.network.propagate(vision);

        Decision {
            speed: response[0].clamp(-params.speed_accel, params.speed_accel),
            rotation: response[1].clamp(-params.rotation_accel, params.rotation_accel),
        }
    }

    pub fn input_size(&self) -> usize {
        self.network.input_size()
    }

    fn topology(eye: &Eye) -> [LayerTopology; 3] {
        [
            LayerTopology {
                neurons: eye.cells(),
            },
            LayerTopology {
                neurons: 2 * eye.cells(),
            },
            LayerTopology { neurons: 2 },
        ]
    }

    pub fn chromosome_len(eye: &Eye) -> usize {
        Network::weight_count(&Self::topology(eye))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::TAU;

    #[test]
    fn brain_is_sized_from_eye() {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let eye = Eye::new(0.25, TAU, 5);
        let brain = Brain::random(&mut rng, &eye).unwrap();

        assert_eq!(brain.input_size(), 5);
        // (5 + 1) * 10 + (10 + 1) * 2
        assert_eq!(Brain::chromosome_len(&eye), 82);
        assert_eq!(brain.as_chromosome().len(), 82);
    }

    #[test]
    fn chromosome_roundtrip_keeps_behaviour() {
        let mut rng = ChaCha8Rng::seed_from_u64(55);
        let eye = Eye::new(0.25, TAU, 4);
        let brain = Brain::random(&mut rng, &eye).unwrap();

        let rebuilt = Brain::from_chromosome(brain.as_chromosome(), &eye).unwrap();
        let params = StepParams::default();
        let vision = vec![0.1, 0.9, 0.0, 0.4];

        assert_eq!(
            brain.decide(vision.clone(), &params),
            rebuilt.decide(vision, &params)
        );
    }

    #[test]
    fn chromosome_for_other_cell_count_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(56);
        let brain = Brain::random(&mut rng, &Eye::new(0.25, TAU, 4)).unwrap();

        let result = Brain::from_chromosome(brain.as_chromosome(), &Eye::new(0.25, TAU, 6));
        assert!(matches!(result, Err(SimError::NotEnoughWeights { .. })));

        let result = Brain::from_chromosome(brain.as_chromosome(), &Eye::new(0.25, TAU, 2));
        assert!(matches!(result, Err(SimError::TooManyWeights { .. })));
    }

    #[test]
    fn decisions_are_clamped_to_accelerations() {
        let eye = Eye::new(0.25, TAU, 1);
        // Hidden: two neurons passing the input through scaled by 100.
        // Output: both neurons sum the hidden layer.
        let genes = [0.0, 100.0, 0.0, 100.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
        let brain = Brain::from_chromosome(genes.into_iter().collect(), &eye).unwrap();

        let params = StepParams {
            speed_accel: 0.2,
            rotation_accel: 0.5,
            ..StepParams::default()
        };
        let decision = brain.decide(vec![1.0], &params);

        assert_eq!(decision.speed, 0.2);
        assert_eq!(decision.rotation, 0.5);

        let idle = brain.decide(vec![0.0], &params);
        assert_eq!(idle, Decision::default());
    }
}
