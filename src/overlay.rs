use eframe::egui::Color32;
use thiserror::Error;

use crate::color::HeatGradient;
use crate::data::model::AggregatedCell;
use crate::data::stats::format_count;

// ---------------------------------------------------------------------------
// Render configuration (owned by the UI layer)
// ---------------------------------------------------------------------------

/// Visual parameters of the heat layer.
#[derive(Debug, Clone)]
pub struct HeatStyle {
    /// Core radius of each heat point, in screen points.
    pub radius: f32,
    /// Extra halo around each point, in screen points.
    pub blur: f32,
    /// Zoom level at which points reach full intensity.
    pub max_zoom: u8,
    /// Number of colour bands points are bucketed into.
    pub bands: usize,
    pub gradient: HeatGradient,
    /// Initial map centre, `[lat, lon]`.
    pub center: [f64; 2],
}

impl Default for HeatStyle {
    fn default() -> Self {
        Self {
            radius: 18.0,
            blur: 25.0,
            max_zoom: 15,
            bands: 32,
            gradient: HeatGradient::default(),
            center: [53.8, -1.55],
        }
    }
}

impl HeatStyle {
    /// Intensity multiplier at a web-map zoom level: halves per level below
    /// `max_zoom`, bottoming out twelve levels down.
    pub fn zoom_factor(&self, zoom: f64) -> f32 {
        let levels_below = (self.max_zoom as f64 - zoom).clamp(0.0, 12.0);
        0.5f64.powf(levels_below) as f32
    }
}

// ---------------------------------------------------------------------------
// HeatOverlay – weighted points ready to draw
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("scale ceiling must be positive and finite, got {0}")]
    BadCeiling(f64),
}

/// Points sharing one gradient colour.
#[derive(Debug, Clone)]
pub struct HeatBand {
    pub color: Color32,
    /// `[lon, lat]` pairs, i.e. plot x/y.
    pub positions: Vec<[f64; 2]>,
}

/// One fully built heat layer: `(lat, lon, weight)` triples plus the weight
/// that maps to full intensity.
#[derive(Debug, Clone)]
pub struct HeatOverlay {
    pub points: Vec<[f64; 3]>,
    pub ceiling: f64,
    /// Points grouped by colour, lowest intensity first.
    pub bands: Vec<HeatBand>,
}

impl HeatOverlay {
    pub fn build(cells: &[AggregatedCell], ceiling: f64, style: &HeatStyle) -> Result<Self, RenderError> {
        if !(ceiling.is_finite() && ceiling > 0.0) {
            return Err(RenderError::BadCeiling(ceiling));
        }

        let n_bands = style.bands.max(1);
        let mut bands: Vec<HeatBand> = (0..n_bands)
            .map(|i| {
                let t = if n_bands == 1 { 1.0 } else { i as f32 / (n_bands - 1) as f32 };
                HeatBand {
                    color: style.gradient.sample(t),
                    positions: Vec::new(),
                }
            })
            .collect();

        let mut points = Vec::with_capacity(cells.len());
        for cell in cells {
            let weight = cell.total_count as f64;
            points.push([cell.lat, cell.lon, weight]);

            let t = (weight / ceiling).clamp(0.0, 1.0);
            let band = ((t * (n_bands - 1) as f64).round() as usize).min(n_bands - 1);
            bands[band].positions.push([cell.lon, cell.lat]);
        }
        bands.retain(|b| !b.positions.is_empty());

        Ok(Self { points, ceiling, bands })
    }

    /// Smallest whole count drawn at full intensity, e.g. `"2"` for a
    /// ceiling of `1.25`.
    pub fn full_intensity_label(&self) -> String {
        format_count(self.ceiling.ceil() as u64)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// OverlaySlot – the single attached overlay
// ---------------------------------------------------------------------------

/// Holds at most one attached overlay.
///
/// Replacing detaches the previous overlay before the new one is built, so
/// two overlays are never attached together and a failed build leaves the
/// slot empty.
#[derive(Debug, Default)]
pub struct OverlaySlot {
    current: Option<HeatOverlay>,
}

impl OverlaySlot {
    pub fn current(&self) -> Option<&HeatOverlay> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn replace<F>(&mut self, build: F) -> Result<&HeatOverlay, RenderError>
    where
        F: FnOnce() -> Result<HeatOverlay, RenderError>,
    {
        if let Some(old) = self.current.take() {
            log::debug!("Removed overlay with {} points", old.len());
        }
        let overlay = build()?;
        Ok(self.current.insert(overlay))
    }
}
