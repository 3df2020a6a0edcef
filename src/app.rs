use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use anyhow::Context;
use eframe::egui;

use crate::data::loader;
use crate::data::model::CrimeDataset;
use crate::state::AppState;
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CrimeHeatmapApp {
    pub state: AppState,
    pending: Option<Receiver<anyhow::Result<CrimeDataset>>>,
}

impl CrimeHeatmapApp {
    pub fn new(ctx: &egui::Context, data_path: PathBuf) -> Self {
        let mut app = Self {
            state: AppState::default(),
            pending: None,
        };
        app.start_load(ctx, data_path);
        app
    }

    /// Read and decode `path` on a worker thread; the result is picked up by
    /// [`Self::poll_load`] on a later frame.
    pub fn start_load(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.state.begin_load(path.clone());

        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = loader::load_file(&path)
                .with_context(|| format!("loading {}", path.display()));
            // Receiver is gone if another load superseded this one.
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                self.pending = None;
                self.state.set_dataset(dataset);
            }
            Ok(Err(e)) => {
                self.pending = None;
                self.state.fail_load(&e);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.state.loading = false;
                self.state.status_message = Some("Loader stopped without a result".to_owned());
            }
        }
    }
}

impl eframe::App for CrimeHeatmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar ----
        let mut open_path = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            open_path = panels::top_bar(ui, &self.state);
        });
        if let Some(path) = open_path {
            self.start_load(ctx, path);
        }

        // ---- Left side panel: filters and stats ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: heat map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::heat_map(ui, &self.state);
        });
    }
}
