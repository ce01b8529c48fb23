use egui;

use crate::stats::{FitnessHistory, RingBuffer};

const MAX_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 180, 90);
const AVG_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
const MIN_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 180, 255);

/// Satiation per generation: max, average and min on a shared scale.
pub fn draw_graphs(ctx: &egui::Context, history: &FitnessHistory) {
    egui::Window::new("Fitness")
        .default_pos(egui::pos2(300.0, 420.0))
        .default_size(egui::vec2(400.0, 160.0))
        .resizable(true)
        .show(ctx, |ui| {
            if history.len() < 2 {
                ui.label("Waiting for two finished generations...");
                return;
            }

            let size = egui::vec2(ui.available_width(), 120.0);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let rect = response.rect;

            painter.rect_filled(rect, 2.0, egui::Color32::from_gray(20));

            let top = history.max.iter().fold(1.0f32, f32::max);
            draw_line_in_rect(&painter, &history.max, rect, top, MAX_COLOR);
            draw_line_in_rect(&painter, &history.avg, rect, top, AVG_COLOR);
            draw_line_in_rect(&painter, &history.min, rect, top, MIN_COLOR);

            painter.text(
                egui::pos2(rect.right() - 4.0, rect.top() + 2.0),
                egui::Align2::RIGHT_TOP,
                format!("{top:.0}"),
                egui::FontId::proportional(10.0),
                egui::Color32::from_gray(200),
            );

            ui.horizontal(|ui| {
                ui.colored_label(MAX_COLOR, "Max");
                ui.colored_label(AVG_COLOR, "Avg");
                ui.colored_label(MIN_COLOR, "Min");
                ui.separator();
                ui.label(format!("Best ever: {:.0}", history.best_ever()));
                if let Some(avg) = history.avg.last() {
                    ui.label(format!("Last avg: {avg:.2}"));
                }
            });
        });
}

fn draw_line_in_rect(
    painter: &egui::Painter,
    buffer: &RingBuffer,
    rect: egui::Rect,
    top: f32,
    color: egui::Color32,
) {
    let len = buffer.len();
    if len < 2 {
        return;
    }

    let points: Vec<egui::Pos2> = buffer
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = rect.left() + (i as f32 / (len - 1) as f32) * rect.width();
            let y = rect.bottom() - (v / top) * rect.height();
            egui::pos2(x, y)
        })
        .collect();

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(1.5, color));
    }
}
