use std::path::PathBuf;

use crate::data::aggregate::aggregate;
use crate::data::filter::{FilterCriteria, filter_points};
use crate::data::intensity::scale_ceiling;
use crate::data::model::{CategoryFilter, CrimeDataset};
use crate::data::stats::{StatsSummary, summarize};
use crate::overlay::{HeatOverlay, HeatStyle, OverlaySlot};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<CrimeDataset>,

    /// Where the current dataset was read from.
    pub source: Option<PathBuf>,

    /// Selector values as currently shown; applied on demand.
    pub selection: FilterCriteria,

    /// The attached heat overlay.
    pub overlay: OverlaySlot,

    /// Heat layer configuration.
    pub style: HeatStyle,

    /// Stats readout for the last applied selection.
    pub stats: Option<StatsSummary>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            selection: FilterCriteria {
                category: CategoryFilter::All,
                year_start: 0,
                year_end: 0,
                month_start: 1,
                month_end: 12,
            },
            overlay: OverlaySlot::default(),
            style: HeatStyle::default(),
            stats: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Mark a load as started.
    pub fn begin_load(&mut self, path: PathBuf) {
        log::info!("Loading crime data from {}", path.display());
        self.source = Some(path);
        self.loading = true;
        self.status_message = None;
    }

    /// Ingest a newly loaded dataset, reset the selection and render once.
    pub fn set_dataset(&mut self, dataset: CrimeDataset) {
        log::info!(
            "Loaded {} records, {} categories, years {:?}",
            dataset.len(),
            dataset.categories.len(),
            dataset.years
        );
        if dataset.is_empty() {
            log::warn!("Dataset has no records; the map will stay empty");
        }
        self.selection = FilterCriteria::full_range(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.apply_filters();
    }

    /// Record a failed load. Nothing is rendered until a later load succeeds.
    pub fn fail_load(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load crime data: {err:#}");
        self.dataset = None;
        self.overlay.clear();
        self.stats = None;
        self.loading = false;
        self.status_message = Some(format!("Failed to load data: {err:#}"));
    }

    /// Run filter → aggregate → normalise → overlay, and refresh the stats.
    pub fn apply_filters(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let criteria = self.selection;

        if let Err(e) = criteria.validate(ds) {
            log::warn!("Applying degenerate selection: {e}");
            self.status_message = Some(format!("Check filters: {e}"));
        } else {
            self.status_message = None;
        }

        let filtered = filter_points(&ds.records, &criteria);
        let cells = aggregate(filtered.iter().copied());
        let ceiling = scale_ceiling(&cells);
        log::debug!(
            "Selection {criteria:?}: {} records → {} cells, ceiling {ceiling}",
            filtered.len(),
            cells.len()
        );
        if let Some(densest) = cells.iter().max_by_key(|c| c.total_count) {
            log::debug!("Densest cell {densest}");
        }

        let style = &self.style;
        if let Err(e) = self
            .overlay
            .replace(|| HeatOverlay::build(&cells, ceiling, style))
        {
            log::error!("Failed to build heat overlay: {e}");
            self.status_message = Some(format!("Render error: {e}"));
        }

        self.stats = Some(summarize(&filtered, &criteria));
    }

    /// Restore the full-range selection and re-apply.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection = FilterCriteria::full_range(ds);
            self.apply_filters();
        }
    }

    /// Select a category by name, or all when `None`.
    pub fn select_category(&mut self, name: Option<&str>) {
        self.selection.category = match (name, &self.dataset) {
            (Some(name), Some(ds)) => match ds.category_index(name) {
                Some(index) => CategoryFilter::Only(index),
                None => {
                    log::warn!("Unknown crime type {name:?}; showing all crime types");
                    CategoryFilter::All
                }
            },
            _ => CategoryFilter::All,
        };
    }

    /// Display name of the selected category.
    pub fn selected_category_name(&self) -> &str {
        match (self.selection.category, &self.dataset) {
            (CategoryFilter::Only(i), Some(ds)) => ds.categories.get(i).map(String::as_str).unwrap_or("?"),
            _ => "All crimes",
        }
    }
}
