use crate::animal::Animal;
use crate::brain::Decision;
use crate::config::StepParams;
use crate::eye;
use crate::world;

/// Apply brain decisions, indexed like `animals`, to speed and rotation.
pub fn apply_decisions(animals: &mut [Animal], decisions: &[Decision], params: &StepParams) {
    for (animal, decision) in animals.iter_mut().zip(decisions) {
        animal.speed = (animal.speed + decision.speed)
            .max(params.speed_min)
            .min(params.speed_max);
        animal.rotation = eye::wrap_rotation(animal.rotation + decision.rotation);
    }
}

/// Advance positions along each heading and wrap to the unit square.
pub fn integrate(animals: &mut [Animal]) {
    for animal in animals.iter_mut() {
        animal.position = world::wrap(animal.position + animal.heading() * animal.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eye::Eye;
    use ::rand::SeedableRng;
    use macroquad::prelude::vec2;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn animal(rng: &mut ChaCha8Rng) -> Animal {
        Animal::random(rng, Eye::default()).unwrap()
    }

    #[test]
    fn speed_is_clamped_and_rotation_wraps() {
        let mut rng = ChaCha8Rng::seed_from_u64(20);
        let mut animals = vec![animal(&mut rng), animal(&mut rng)];
        animals[0].speed = 0.004;
        animals[0].rotation = TAU - 0.1;
        animals[1].speed = 0.002;
        animals[1].rotation = 1.0;

        let params = StepParams {
            speed_min: 0.001,
            speed_max: 0.005,
            ..StepParams::default()
        };
        let decisions = [
            Decision {
                speed: 0.2,
                rotation: 0.3,
            },
            Decision {
                speed: -0.2,
                rotation: 0.0,
            },
        ];

        apply_decisions(&mut animals, &decisions, &params);

        assert_eq!(animals[0].speed, 0.005);
        assert!((animals[0].rotation - 0.2).abs() < 1e-5);
        assert_eq!(animals[1].speed, 0.001);
        assert_eq!(animals[1].rotation, 1.0);
    }

    #[test]
    fn tiny_negative_turn_from_zero_stays_below_tau() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut animals = vec![animal(&mut rng)];
        animals[0].rotation = 0.0;

        let decisions = [Decision {
            speed: 0.0,
            rotation: -1e-8,
        }];
        apply_decisions(&mut animals, &decisions, &StepParams::default());

        assert!((0.0..TAU).contains(&animals[0].rotation));
    }

    #[test]
    fn integrate_moves_along_heading_and_wraps() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut animals = vec![animal(&mut rng), animal(&mut rng)];

        animals[0].position = vec2(0.5, 0.995);
        animals[0].rotation = 0.0;
        animals[0].speed = 0.01;

        // Quarter turn faces -x.
        animals[1].position = vec2(0.004, 0.5);
        animals[1].rotation = FRAC_PI_2;
        animals[1].speed = 0.01;

        integrate(&mut animals);

        assert!((animals[0].position.x - 0.5).abs() < 1e-6);
        assert!((animals[0].position.y - 0.005).abs() < 1e-5);
        assert!((animals[1].position.x - 0.994).abs() < 1e-5);
        assert!((animals[1].position.y - 0.5).abs() < 1e-6);
    }
}
