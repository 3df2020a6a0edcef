use super::model::AggregatedCell;

/// Fraction of the densest cell mapped to full heat intensity.
///
/// Kept below 1 so a single hot spot does not flatten the rest of the map.
pub const CEILING_FRACTION: f64 = 0.25;

/// Lowest maximum count considered; keeps the ceiling positive.
const MIN_PEAK: u64 = 1;

/// Weight that maps to the top of the heat gradient.
pub fn scale_ceiling(cells: &[AggregatedCell]) -> f64 {
    let peak = cells
        .iter()
        .map(|c| c.total_count)
        .max()
        .unwrap_or(MIN_PEAK)
        .max(MIN_PEAK);
    peak as f64 * CEILING_FRACTION
}
