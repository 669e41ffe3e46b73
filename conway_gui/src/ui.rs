// ui.rs - egui front end: controls, keyboard shortcuts and the board painter

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};
use conway::patterns;
use crate::GameOfLife;

const MAX_BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

const RATE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=60.0;
const REDRAW: Duration = Duration::from_millis(17);

/// Generations per second for a step interval.
fn steps_per_second(interval: Duration) -> f32 {
    1.0 / interval.as_secs_f32().max(0.001)
}

fn interval_for(rate: f32) -> Duration {
    let rate = rate.clamp(*RATE_RANGE.start(), *RATE_RANGE.end());
    Duration::from_secs_f32(1.0 / rate)
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }
        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            ui.horizontal(|ui| self.simulation_controls(ui));
            ui.separator();
            ui.horizontal(|ui| self.display_settings(ui));
            ui.separator();
            ui.label("Click cells to toggle them. Space pauses, S saves and quits.");
            if let Some(status) = &self.status {
                ui.colored_label(Color32::YELLOW, status);
            }
            ui.separator();
            self.draw_board(ui);
            ui.separator();
            ui.horizontal(|ui| self.population_summary(ui));
        });

        if self.is_running {
            ctx.request_repaint_after(REDRAW);
        }
    }
}

impl GameOfLife {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pause, save) =
            ctx.input(|i| (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::S)));
        if pause {
            self.toggle_running();
        }
        // A failed save leaves the window open with the error in the status line.
        if save && self.save().is_ok() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn simulation_controls(&mut self, ui: &mut egui::Ui) {
        let run_label = if self.is_running { "⏸ Pause" } else { "▶ Run" };
        if ui.button(run_label).clicked() {
            self.toggle_running();
        }
        if ui.button("Step").clicked() && !self.is_running {
            self.update_generation();
        }
        if ui.button("Clear").clicked() {
            self.clear_grid();
        }
        if ui.button("Randomize").clicked() {
            self.apply_random_pattern();
        }

        ui.separator();
        let current = patterns::PATTERNS
            .get(self.selected_pattern)
            .map_or("-", |pattern| pattern.name);
        egui::ComboBox::from_id_source("pattern_picker")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (index, pattern) in patterns::PATTERNS.iter().enumerate() {
                    ui.selectable_value(&mut self.selected_pattern, index, pattern.name);
                }
            });
        if ui.button("Place").clicked() {
            self.apply_selected_pattern();
        }

        ui.separator();
        ui.label(format!("Generation {}", self.generation()));
    }

    fn display_settings(&mut self, ui: &mut egui::Ui) {
        let mut rate = steps_per_second(self.update_interval);
        let slider = egui::Slider::new(&mut rate, RATE_RANGE).text("gen/s").logarithmic(true);
        if ui.add(slider).changed() {
            self.update_interval = interval_for(rate);
        }
        ui.separator();
        ui.color_edit_button_srgba(&mut self.live_color).on_hover_text("Live cells");
        ui.color_edit_button_srgba(&mut self.dead_color).on_hover_text("Dead cells");
    }

    fn population_summary(&self, ui: &mut egui::Ui) {
        let live = self.live_cells();
        let total = live + self.dead_cells();
        let share = live as f32 / total.max(1) as f32 * 100.0;
        ui.label(format!("{live} alive / {} dead ({share:.1}%)", total - live));
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let rows = self.board().to_rows();
        let (width, height) = (self.board().width(), self.board().height());

        let box_size = (ui.available_width() / width as f32 - SPACING).clamp(1.0, MAX_BOX_SIZE);
        let pitch = box_size + SPACING;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(pitch * width as f32 - SPACING, pitch * height as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        // Row 0 is the top of the board
        for (display_row, row) in rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                let rect = Rect::from_min_size(
                    egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + display_row as f32 * pitch),
                    Vec2::splat(box_size),
                );
                let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                if box_size > 4.0 {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }
        }

        let clicked_at = response
            .interact_pointer_pos()
            .filter(|_| response.clicked())
            .map(|pos| pos - start_pos)
            .filter(|offset| offset.x >= 0.0 && offset.y >= 0.0);
        if let Some(offset) = clicked_at {
            self.toggle_cell((offset.y / pitch) as usize, (offset.x / pitch) as usize);
        }
    }
}
