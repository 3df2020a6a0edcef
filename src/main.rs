mod app;
mod color;
mod data;
mod overlay;
mod state;
mod ui;

use std::path::PathBuf;

use app::CrimeHeatmapApp;
use clap::Parser;
use eframe::egui;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Crime dataset to open on startup
    #[arg(short, long, value_name = "FILE", default_value = "data/crime_data.json")]
    data: PathBuf,
}

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Crime Heatmap",
        options,
        Box::new(move |cc| Ok(Box::new(CrimeHeatmapApp::new(&cc.egui_ctx, cli.data)))),
    )
}
