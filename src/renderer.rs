use macroquad::prelude::*;
use std::f32::consts::PI;

use crate::config;
use crate::snapshot::{AnimalView, FoodView, WorldSnapshot};

const BG_COLOR: Color = Color::new(0.02, 0.03, 0.08, 1.0);
const FOOD_COLOR: Color = Color::new(0.2, 0.85, 0.2, 0.9);
const ANIMAL_COLOR: Color = Color::new(0.9, 0.95, 1.0, 1.0);

/// One draw call in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    Triangle { a: Vec2, b: Vec2, c: Vec2 },
}

/// Foods first, then animals, so animals are drawn on top.
pub fn build_draw_list(snapshot: &WorldSnapshot, width: f32, height: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(snapshot.foods.len() + snapshot.animals.len());

    shapes.extend(snapshot.foods.iter().map(|food| food_shape(food, width, height)));
    shapes.extend(
        snapshot
            .animals
            .iter()
            .map(|animal| animal_shape(animal, width, height)),
    );

    shapes
}

fn food_shape(food: &FoodView, width: f32, height: f32) -> Shape {
    Shape::Circle {
        center: vec2(food.x * width, food.y * height),
        radius: config::FOOD_RADIUS * width,
    }
}

fn animal_shape(animal: &AnimalView, width: f32, height: f32) -> Shape {
    let size = config::ANIMAL_SIZE * width;
    let center = vec2(animal.x * width, animal.y * height);
    let r = animal.rotation;

    // Same convention as the simulation: rotation 0 points along +y.
    let vertex = |angle: f32, radius: f32| center + vec2(-angle.sin(), angle.cos()) * radius;

    Shape::Triangle {
        a: vertex(r, size * 1.5),
        b: vertex(r + 2.0 / 3.0 * PI, size),
        c: vertex(r + 4.0 / 3.0 * PI, size),
    }
}

/// Clear the screen and draw one frame of the world.
pub fn draw(snapshot: &WorldSnapshot, generation: usize, paused: bool) {
    clear_background(BG_COLOR);

    for shape in build_draw_list(snapshot, screen_width(), screen_height()) {
        match shape {
            Shape::Circle { center, radius } => draw_circle(center.x, center.y, radius, FOOD_COLOR),
            Shape::Triangle { a, b, c } => draw_triangle(a, b, c, ANIMAL_COLOR),
        }
    }

    draw_hud(generation, snapshot.animals.len(), snapshot.foods.len(), paused);
}

fn draw_hud(generation: usize, animals: usize, foods: usize, paused: bool) {
    let tc = Color::new(0.7, 0.75, 0.8, 1.0);
    let sh = Color::new(0.0, 0.0, 0.0, 0.5);

    let lines = [
        format!("Generation: {generation}"),
        format!("Animals: {animals}  Food: {foods}"),
        format!("FPS: {}", get_fps()),
    ];
    for (i, text) in lines.iter().enumerate() {
        let y = 20.0 + i as f32 * 20.0;
        draw_text(text, 11.0, y + 1.0, 18.0, sh);
        draw_text(text, 10.0, y, 18.0, tc);
    }

    if paused {
        let pause_text = "PAUSED (Space to resume)";
        let tw = measure_text(pause_text, None, 24, 1.0).width;
        let x = screen_width() * 0.5 - tw * 0.5;
        draw_text(pause_text, x + 1.0, 31.0, 24.0, sh);
        draw_text(pause_text, x, 30.0, 24.0, Color::new(1.0, 0.8, 0.2, 0.9));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn one_shape_per_entity() {
        let snapshot = WorldSnapshot {
            animals: vec![
                AnimalView {
                    x: 0.1,
                    y: 0.2,
                    rotation: 0.0,
                };
                3
            ],
            foods: vec![FoodView { x: 0.5, y: 0.5 }; 5],
        };

        let shapes = build_draw_list(&snapshot, 800.0, 600.0);
        assert_eq!(shapes.len(), 8);

        let circles = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        assert_eq!(circles, 5);

        assert!(build_draw_list(&WorldSnapshot::default(), 800.0, 600.0).is_empty());
    }

    #[test]
    fn food_is_scaled_to_viewport() {
        let Shape::Circle { center, radius } = food_shape(&FoodView { x: 0.5, y: 0.25 }, 800.0, 600.0)
        else {
            panic!("food should be a circle");
        };

        assert!(close(center, vec2(400.0, 150.0)));
        assert!((radius - 4.0).abs() < 1e-4);
    }

    #[test]
    fn unrotated_animal_points_down_the_y_axis() {
        let animal = AnimalView {
            x: 0.5,
            y: 0.5,
            rotation: 0.0,
        };
        let Shape::Triangle { a, b, c } = animal_shape(&animal, 1000.0, 1000.0) else {
            panic!("animal should be a triangle");
        };

        // size = 10px, front vertex 15px ahead
        assert!(close(a, vec2(500.0, 515.0)));
        assert!(close(b, vec2(500.0 - 10.0 * (2.0 * PI / 3.0).sin(), 495.0)));
        assert!(close(c, vec2(500.0 + 10.0 * (2.0 * PI / 3.0).sin(), 495.0)));
    }

    #[test]
    fn quarter_turn_points_along_negative_x() {
        let animal = AnimalView {
            x: 0.5,
            y: 0.5,
            rotation: PI / 2.0,
        };
        let Shape::Triangle { a, .. } = animal_shape(&animal, 1000.0, 1000.0) else {
            panic!("animal should be a triangle");
        };

        assert!(close(a, vec2(485.0, 500.0)));
    }
}
