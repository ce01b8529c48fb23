use ::rand::{Rng, RngCore};
use std::iter::once;

use crate::error::{SimError, SimResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerTopology {
    pub neurons: usize,
}

/// Fully connected feed-forward network with ReLU neurons.
#[derive(Clone, Debug)]
pub struct Network {
    layers: Vec<Layer>,
}

#[derive(Clone, Debug)]
struct Layer {
    neurons: Vec<Neuron>,
}

#[derive(Clone, Debug)]
struct Neuron {
    bias: f32,
    weights: Vec<f32>,
}

impl Network {
    pub fn random(rng: &mut dyn RngCore, topology: &[LayerTopology]) -> SimResult<Self> {
        check_topology(topology)?;

        let layers = topology
            .windows(2)
            .map(|pair| Layer::random(rng, pair[0].neurons, pair[1].neurons))
            .collect();

        Ok(Self { layers })
    }

    /// Rebuild a network from the flat layout produced by [`Network::weights`].
    pub fn from_weights(
        topology: &[LayerTopology],
        weights: impl IntoIterator<Item = f32>,
    ) -> SimResult<Self> {
        check_topology(topology)?;

        let expected = Self::weight_count(topology);
        let mut weights = weights.into_iter();

        let layers = topology
            .windows(2)
            .map(|pair| Layer::from_weights(pair[0].neurons, pair[1].neurons, &mut weights, expected))
            .collect::<SimResult<Vec<_>>>()?;

        let leftover = weights.count();
        if leftover > 0 {
            return Err(SimError::TooManyWeights {
                expected,
                got: expected + leftover,
            });
        }

        Ok(Self { layers })
    }

    /// Number of floats (biases included) a network of this shape carries.
    pub fn weight_count(topology: &[LayerTopology]) -> usize {
        topology
            .windows(2)
            .map(|pair| (pair[0].neurons + 1) * pair[1].neurons)
            .sum()
    }

    /// Flattened parameters: per neuron, bias then input weights, layer by layer.
    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| &layer.neurons)
            .flat_map(|neuron| once(neuron.bias).chain(neuron.weights.iter().copied()))
    }

    pub fn input_size(&self) -> usize {
        self.layers
            .first()
            .and_then(|layer| layer.neurons.first())
            .map_or(0, |neuron| neuron.weights.len())
    }

    pub fn propagate(&self, inputs: Vec<f32>) -> Vec<f32> {
        self.layers
            .iter()
            .fold(inputs, |inputs, layer| layer.propagate(&inputs))
    }
}

fn check_topology(topology: &[LayerTopology]) -> SimResult<()> {
    if topology.len() < 2 {
        return Err(SimError::InvalidTopology(topology.len()));
    }
    Ok(())
}

impl Layer {
    fn random(rng: &mut dyn RngCore, input_size: usize, output_size: usize) -> Self {
        let neurons = (0..output_size)
            .map(|_| Neuron::random(rng, input_size))
            .collect();

        Self { neurons }
    }

    fn from_weights(
        input_size: usize,
        output_size: usize,
        weights: &mut dyn Iterator<Item = f32>,
        expected: usize,
    ) -> SimResult<Self> {
        let neurons = (0..output_size)
            .map(|_| Neuron::from_weights(input_size, weights, expected))
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self { neurons })
    }

    fn propagate(&self, inputs: &[f32]) -> Vec<f32> {
        self.neurons
            .iter()
            .map(|neuron| neuron.propagate(inputs))
            .collect()
    }
}

impl Neuron {
    fn random(rng: &mut dyn RngCore, input_size: usize) -> Self {
        let bias = rng.gen_range(-1.0..=1.0);
        let weights = (0..input_size)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Self { bias, weights }
    }

    fn from_weights(
        input_size: usize,
        weights: &mut dyn Iterator<Item = f32>,
        expected: usize,
    ) -> SimResult<Self> {
        let mut next = || weights.next().ok_or(SimError::NotEnoughWeights { expected });

        let bias = next()?;
        let weights = (0..input_size)
            .map(|_| next())
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self { bias, weights })
    }

    fn propagate(&self, inputs: &[f32]) -> f32 {
        assert_eq!(inputs.len(), self.weights.len());

        let output = inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum::<f32>();

        (self.bias + output).max(0.0)
    }
}
