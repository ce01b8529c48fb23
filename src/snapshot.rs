use serde::Serialize;

use crate::world::World;

/// Read-only view of the world handed to the front end once per frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub animals: Vec<AnimalView>,
    pub foods: Vec<FoodView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnimalView {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FoodView {
    pub x: f32,
    pub y: f32,
}

impl From<&World> for WorldSnapshot {
    fn from(world: &World) -> Self {
        let animals = world
            .animals()
            .iter()
            .map(|animal| AnimalView {
                x: animal.position().x,
                y: animal.position().y,
                rotation: animal.rotation(),
            })
            .collect();

        let foods = world
            .foods()
            .iter()
            .map(|food| FoodView {
                x: food.position().x,
                y: food.position().y,
            })
            .collect();

        Self { animals, foods }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpawnParams;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn snapshot_mirrors_world() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let params = SpawnParams {
            animals: 3,
            foods: 4,
            ..SpawnParams::default()
        };
        let world = World::random(&mut rng, &params).unwrap();
        let snapshot = WorldSnapshot::from(&world);

        assert_eq!(snapshot.animals.len(), 3);
        assert_eq!(snapshot.foods.len(), 4);

        let first = &world.animals()[0];
        assert_eq!(snapshot.animals[0].x, first.position().x);
        assert_eq!(snapshot.animals[0].y, first.position().y);
        assert_eq!(snapshot.animals[0].rotation, first.rotation());
        assert_eq!(snapshot.foods[2].x, world.foods()[2].position().x);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = WorldSnapshot {
            animals: vec![AnimalView {
                x: 0.5,
                y: 0.25,
                rotation: 1.0,
            }],
            foods: vec![FoodView { x: 0.75, y: 0.0 }],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["animals"][0]["rotation"], 1.0);
        assert_eq!(json["foods"][0]["x"], 0.75);
    }
}
