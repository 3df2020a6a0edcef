use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Heat map (central panel)
// ---------------------------------------------------------------------------

/// Longitude span visible at web-map zoom level 0.
const WORLD_SPAN_DEG: f64 = 360.0;

/// Render the heat overlay on lon/lat axes in the central panel.
pub fn heat_map(ui: &mut Ui, state: &AppState) {
    let Some(overlay) = state.overlay.current() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.heading("Loading crime data…");
            } else if let Some(msg) = &state.status_message {
                ui.heading(RichText::new(msg).color(Color32::RED));
            } else {
                ui.heading("Open a crime data file to view the heat map  (File → Open…)");
            }
        });
        return;
    };

    let style = &state.style;
    let [center_lat, center_lon] = style.center;

    let mut plot = Plot::new("heat_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if overlay.is_empty() {
        plot = plot.include_x(center_lon).include_y(center_lat);
    }

    plot.show(ui, |plot_ui| {
        let span = plot_ui.plot_bounds().width().max(f64::EPSILON);
        let zoom = (WORLD_SPAN_DEG / span).log2();
        let fade = style.zoom_factor(zoom);

        let halo_alpha = (48.0 * fade).round() as u8;
        let core_alpha = (55.0 + 200.0 * fade).round() as u8;
        let core_radius = style.radius * style.radius / (style.radius + style.blur);

        // Lowest band first so dense cells end up on top.
        for band in &overlay.bands {
            let [r, g, b, _] = band.color.to_array();
            plot_ui.points(
                Points::new(band.positions.clone())
                    .radius(style.radius)
                    .filled(true)
                    .color(Color32::from_rgba_unmultiplied(r, g, b, halo_alpha)),
            );
            plot_ui.points(
                Points::new(band.positions.clone())
                    .radius(core_radius)
                    .filled(true)
                    .color(Color32::from_rgba_unmultiplied(r, g, b, core_alpha)),
            );
        }
    });
}
