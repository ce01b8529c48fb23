pub mod controls;
pub mod graphs;

use crate::config::{Settings, SpawnParams, StepParams};
use crate::stats::FitnessHistory;

/// Slider values and panel toggles. The sliders bind straight to these
/// fields, so anything written here shows up in the widgets next frame.
pub struct UiState {
    pub spawn: SpawnParams,
    pub step: StepParams,
    pub show_graph: bool,
    pub paused: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl UiState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            spawn: settings.spawn,
            step: settings.step,
            show_graph: true,
            paused: false,
        }
    }

    /// Step values for this frame. An inverted speed range is fixed in
    /// the slider state itself.
    pub fn read_step_params(&mut self) -> StepParams {
        if self.step.clamp_speed_range() {
            tracing::debug!(speed = self.step.speed_max, "speed_min pulled down to speed_max");
        }
        self.step
    }
}

/// Buttons pressed during this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub restart: bool,
    pub train: bool,
}

/// Draw all egui UI panels.
pub fn draw_ui(ui_state: &mut UiState, history: &FitnessHistory, generation: usize) -> UiActions {
    let mut actions = UiActions::default();

    egui_macroquad::ui(|ctx| {
        controls::draw_controls(ctx, ui_state, generation, &mut actions);

        if ui_state.show_graph {
            graphs::draw_graphs(ctx, history);
        }
    });

    egui_macroquad::draw();
    actions
}

/// True while an egui widget has keyboard focus.
pub fn wants_keyboard() -> bool {
    let mut wants = false;
    egui_macroquad::cfg(|ctx| {
        wants = ctx.wants_keyboard_input();
    });
    wants
}
