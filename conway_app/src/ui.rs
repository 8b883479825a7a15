// ui.rs - Controls, playfield and status line

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use conway::driver;
use conway::{Mode, PATTERNS};

use crate::GameOfLife;

const BOX_SIZE: f32 = 8.0;
const SPACING: f32 = 1.0;

const ACTIVE_BUTTON: Color32 = Color32::from_rgb(40, 90, 200);
const IDLE_BUTTON: Color32 = Color32::from_gray(90);

/// Simulator state copied out under the lock, once per frame.
struct Snapshot {
    mode: Mode,
    rows: usize,
    cols: usize,
    generation: u64,
    live_cells: usize,
    cells: Vec<bool>,
}

impl GameOfLife {
    fn snapshot(&self) -> Snapshot {
        let sim = driver::lock(&self.simulator);
        let (rows, cols) = (sim.rows(), sim.cols());
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(sim.is_alive(row, col));
            }
        }
        Snapshot {
            mode: sim.mode(),
            rows,
            cols,
            generation: sim.generation(),
            live_cells: sim.live_cell_count(),
            cells,
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.reap_driver();
        let view = self.snapshot();
        let editing = view.mode == Mode::Edit;

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                let start = egui::Button::new("▶ Start")
                    .fill(if editing { ACTIVE_BUTTON } else { IDLE_BUTTON });
                if ui.add_enabled(editing, start).clicked() {
                    self.start(ctx);
                }

                let stop = egui::Button::new("⏹ Stop")
                    .fill(if editing { IDLE_BUTTON } else { ACTIVE_BUTTON });
                if ui.add_enabled(!editing, stop).clicked() {
                    self.stop();
                }

                ui.separator();

                ui.add_enabled_ui(editing, |ui| {
                    if ui.button("Clear").clicked() {
                        self.clear_grid();
                    }
                    if ui.button("Seed").clicked() {
                        self.reseed();
                    }
                    if ui.button("🎲 Random").clicked() {
                        self.apply_random_pattern();
                    }

                    ui.separator();

                    ui.label("Pattern:");
                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(PATTERNS[self.selected_pattern].name)
                        .show_ui(ui, |ui| {
                            for (i, pattern) in PATTERNS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                            }
                        });
                    if ui.button("Apply Pattern").clicked() {
                        self.apply_selected_pattern();
                    }
                });
            });

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.config.speed();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=100.0).suffix(" gen/sec")).changed() {
                    self.config.set_speed(speed);
                    self.restart_driver(ctx);
                }

                ui.separator();
                ui.checkbox(&mut self.config.stop_on_cycle, "Stop on cycle");

                ui.separator();
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Playfield
            let pitch = BOX_SIZE + SPACING;
            let total_size = Vec2::new(
                pitch * view.cols as f32 - SPACING,
                pitch * view.rows as f32 - SPACING,
            );
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            for row in 0..view.rows {
                for col in 0..view.cols {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                        Vec2::splat(BOX_SIZE),
                    );
                    let color = if view.cells[row * view.cols + col] {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 1.0, color);
                }
            }
            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(80)));

            if editing && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    let col = (offset.x / pitch) as usize;
                    let row = (offset.y / pitch) as usize;
                    if row < view.rows && col < view.cols {
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            // Status
            let total = (view.rows * view.cols) as f32;
            ui.horizontal(|ui| {
                ui.label(format!("Cell Count = {}", view.live_cells));
                ui.separator();
                ui.label(format!("Population: {:.1}%", view.live_cells as f32 / total * 100.0));
                ui.separator();
                ui.label(format!("Generation: {}", view.generation));
                if editing {
                    ui.separator();
                    ui.label("Click cells to toggle them.");
                }
            });
        });
    }
}
