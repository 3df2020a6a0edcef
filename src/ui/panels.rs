use std::path::PathBuf;

use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::data::stats::month_abbrev;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and stats
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.loading {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Loading crime data…");
        });
        return;
    }

    let (categories, years) = match &state.dataset {
        Some(ds) => (ds.categories.clone(), ds.years.clone()),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Crime type ----
            ui.strong("Crime type");
            let current = state.selected_category_name().to_owned();
            ComboBox::from_id_salt("crime_type")
                .selected_text(&current)
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(current == "All crimes", "All crimes").clicked() {
                        state.select_category(None);
                    }
                    for name in &categories {
                        if ui.selectable_label(current == *name, name).clicked() {
                            state.select_category(Some(name.as_str()));
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Date range ----
            ui.strong("From");
            ui.horizontal(|ui: &mut Ui| {
                month_combo(ui, "month_start", &mut state.selection.month_start);
                year_combo(ui, "year_start", &years, &mut state.selection.year_start);
            });
            ui.strong("To");
            ui.horizontal(|ui: &mut Ui| {
                month_combo(ui, "month_end", &mut state.selection.month_end);
                year_combo(ui, "year_end", &years, &mut state.selection.year_end);
            });
            ui.add_space(6.0);

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply filters").clicked() {
                    state.apply_filters();
                }
                if ui.button("Reset").clicked() {
                    state.reset_filters();
                }
            });
            ui.separator();

            // ---- Stats ----
            if let Some(stats) = &state.stats {
                ui.label("Total crimes");
                ui.label(RichText::new(stats.total_label()).size(22.0).strong());
                ui.label("Date range");
                ui.label(RichText::new(&stats.range_label).strong());
            }
            if let Some(overlay) = state.overlay.current() {
                ui.label(format!("{} locations", overlay.len()));
            }
            ui.separator();

            gradient_legend(ui, state);
        });
}

fn month_combo(ui: &mut Ui, id: &str, month: &mut u32) {
    ComboBox::from_id_salt(id)
        .selected_text(month_abbrev(*month))
        .width(60.0)
        .show_ui(ui, |ui: &mut Ui| {
            for m in 1..=12 {
                ui.selectable_value(month, m, month_abbrev(m));
            }
        });
}

fn year_combo(ui: &mut Ui, id: &str, years: &[i32], year: &mut i32) {
    ComboBox::from_id_salt(id)
        .selected_text(year.to_string())
        .width(70.0)
        .show_ui(ui, |ui: &mut Ui| {
            for &y in years {
                ui.selectable_value(year, y, y.to_string());
            }
        });
}

/// Horizontal strip of the heat gradient with low/high labels.
fn gradient_legend(ui: &mut Ui, state: &AppState) {
    ui.strong("Intensity");
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), egui::Sense::hover());
    let steps = 64;
    let step_w = rect.width() / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1) as f32;
        let x = rect.left() + i as f32 * step_w;
        let cell = egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(step_w + 0.5, rect.height()));
        ui.painter().rect_filled(cell, 0.0, state.style.gradient.sample(t));
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Low");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if let Some(overlay) = state.overlay.current() {
                ui.label(format!("High (≥ {})", overlay.full_intensity_label()));
            } else {
                ui.label("High");
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns a path when the user picked a file.
pub fn top_bar(ui: &mut Ui, state: &AppState) -> Option<PathBuf> {
    let mut picked = None;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                picked = open_file_dialog();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{source}: {} records, {} crime types",
                ds.len(),
                ds.categories.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    picked
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open crime data")
        .add_filter("Crime data (JSON)", &["json"])
        .pick_file()
}
