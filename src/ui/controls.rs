use egui;

use super::{UiActions, UiState};
use crate::config;

/// Spawn and step sliders plus the restart / train buttons.
pub fn draw_controls(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    generation: usize,
    actions: &mut UiActions,
) {
    egui::Window::new("Forager")
        .default_pos(egui::pos2(10.0, 80.0))
        .default_width(280.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Generation {generation}"))
                        .strong()
                        .color(egui::Color32::from_rgb(190, 220, 255)),
                );
                ui.separator();
                let pause_label = if ui_state.paused { "Play" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    ui_state.paused = !ui_state.paused;
                }
                if ui.button("Train").clicked() {
                    actions.train = true;
                }
                ui.toggle_value(&mut ui_state.show_graph, "Graph");
            });

            ui.separator();
            ui.collapsing("Spawn (applied on restart)", |ui| {
                let spawn = &mut ui_state.spawn;
                usize_slider(ui, &mut spawn.animals, config::ANIMALS_RANGE, "Animals");
                usize_slider(ui, &mut spawn.foods, config::FOODS_RANGE, "Foods");
                f32_slider(ui, &mut spawn.fov_range, config::FOV_RANGE_RANGE, "FOV range");
                f32_slider(ui, &mut spawn.fov_angle, config::FOV_ANGLE_RANGE, "FOV angle");
                usize_slider(ui, &mut spawn.cells, config::CELLS_RANGE, "Eye cells");

                if ui.button("Restart").clicked() {
                    actions.restart = true;
                }
            });

            ui.collapsing("Step (applied every frame)", |ui| {
                let step = &mut ui_state.step;
                f32_slider(ui, &mut step.speed_min, config::SPEED_RANGE, "Speed min");
                f32_slider(ui, &mut step.speed_max, config::SPEED_RANGE, "Speed max");
                f32_slider(ui, &mut step.speed_accel, config::SPEED_ACCEL_RANGE, "Speed accel");
                f32_slider(
                    ui,
                    &mut step.rotation_accel,
                    config::ROTATION_ACCEL_RANGE,
                    "Rotation accel",
                );
                usize_slider(
                    ui,
                    &mut step.generation_length,
                    config::GENERATION_LENGTH_RANGE,
                    "Generation length",
                );

                ui.label(
                    egui::RichText::new("Eyes of the next generation")
                        .small()
                        .color(egui::Color32::from_rgb(150, 170, 185)),
                );
                f32_slider(ui, &mut step.fov_range, config::FOV_RANGE_RANGE, "FOV range");
                f32_slider(ui, &mut step.fov_angle, config::FOV_ANGLE_RANGE, "FOV angle");
                usize_slider(ui, &mut step.cells, config::CELLS_RANGE, "Eye cells");
            });

            ui.separator();
            ui.label(
                egui::RichText::new("Space pause · Enter restart · T train · G graph · Ctrl+S/L save/load")
                    .small()
                    .color(egui::Color32::from_gray(140)),
            );
        });
}

fn f32_slider(ui: &mut egui::Ui, value: &mut f32, range: (f32, f32), label: &str) {
    ui.add(egui::Slider::new(value, range.0..=range.1).text(label));
}

fn usize_slider(ui: &mut egui::Ui, value: &mut usize, range: (usize, usize), label: &str) {
    ui.add(egui::Slider::new(value, range.0..=range.1).text(label));
}
