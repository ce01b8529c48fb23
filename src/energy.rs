use ::rand::RngCore;

use crate::animal::Animal;
use crate::config;
use crate::food::{self, Food};

/// Let animals eat food within reach. An eaten item reappears somewhere
/// random straight away, so a later animal in the same pass may find it.
/// Returns how many items were eaten.
pub fn consume_food(animals: &mut [Animal], foods: &mut [Food], rng: &mut dyn RngCore) -> usize {
    let mut eaten = 0;

    for animal in animals.iter_mut() {
        for item in foods.iter_mut() {
            if animal.position.distance(item.position) <= config::COLLISION_DISTANCE {
                animal.satiation += 1;
                item.position = food::random_position(rng);
                eaten += 1;
            }
        }
    }

    eaten
}

/// Scatter every food item to a fresh random position.
pub fn reseed_food(foods: &mut [Food], rng: &mut dyn RngCore) {
    for item in foods.iter_mut() {
        item.position = food::random_position(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eye::Eye;
    use ::rand::SeedableRng;
    use macroquad::prelude::vec2;
    use rand_chacha::ChaCha8Rng;

    fn animal_at(rng: &mut ChaCha8Rng, x: f32, y: f32) -> Animal {
        let mut animal = Animal::random(rng, Eye::default()).unwrap();
        animal.position = vec2(x, y);
        animal
    }

    #[test]
    fn food_in_reach_is_eaten_and_moved() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut animals = vec![animal_at(&mut rng, 0.3, 0.3)];
        let mut foods = vec![Food::new(vec2(0.305, 0.3)), Food::new(vec2(0.8, 0.8))];

        let eaten = consume_food(&mut animals, &mut foods, &mut rng);

        assert_eq!(eaten, 1);
        assert_eq!(animals[0].satiation, 1);
        assert_ne!(foods[0].position, vec2(0.305, 0.3));
        assert_eq!(foods[1].position, vec2(0.8, 0.8));
    }

    #[test]
    fn reach_is_inclusive_and_not_toroidal() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut animals = vec![animal_at(&mut rng, 0.001, 0.5)];
        // Would be 0.002 away across the edge, but distance is measured directly.
        let mut foods = vec![Food::new(vec2(0.999, 0.5))];

        assert_eq!(consume_food(&mut animals, &mut foods, &mut rng), 0);
        assert_eq!(animals[0].satiation, 0);
    }

    #[test]
    fn reseed_moves_every_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut foods = vec![Food::new(vec2(0.5, 0.5)); 4];

        reseed_food(&mut foods, &mut rng);

        assert!(foods.iter().all(|f| f.position != vec2(0.5, 0.5)));
        assert!(foods
            .iter()
            .all(|f| (0.0..1.0).contains(&f.position.x) && (0.0..1.0).contains(&f.position.y)));
    }
}
