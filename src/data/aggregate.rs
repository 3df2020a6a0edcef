use std::collections::HashMap;

use super::model::{AggregatedCell, CrimePoint};

// ---------------------------------------------------------------------------
// Coordinate key – exact bitwise equality of both coordinates
// ---------------------------------------------------------------------------

/// Hashable grouping key for a `(lat, lon)` pair.
///
/// Two coordinates merge only when both `f64` values have identical bit
/// patterns, so `0.0` and `-0.0` stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl CoordKey {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat_bits: lat.to_bits(),
            lon_bits: lon.to_bits(),
        }
    }

    pub fn lat(&self) -> f64 {
        f64::from_bits(self.lat_bits)
    }

    pub fn lon(&self) -> f64 {
        f64::from_bits(self.lon_bits)
    }
}

/// Sum counts of records sharing an exact coordinate.
///
/// Cells come out in first-seen order of their coordinate.
pub fn aggregate<'a, I>(points: I) -> Vec<AggregatedCell>
where
    I: IntoIterator<Item = &'a CrimePoint>,
{
    let mut slots: HashMap<CoordKey, usize> = HashMap::new();
    let mut cells: Vec<AggregatedCell> = Vec::new();

    for p in points {
        let key = CoordKey::new(p.lat, p.lon);
        let idx = *slots.entry(key).or_insert_with(|| {
            cells.push(AggregatedCell {
                lat: key.lat(),
                lon: key.lon(),
                total_count: 0,
            });
            cells.len() - 1
        });
        cells[idx].total_count = cells[idx].total_count.saturating_add(p.count);
    }

    cells
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn at(lat: f64, lon: f64, count: u64) -> CrimePoint {
        CrimePoint {
            lat,
            lon,
            category: 0,
            year: 2020,
            month: 1,
            count,
        }
    }

    #[test]
    fn merges_coincident_coordinates() {
        let records = vec![at(53.8, -1.55, 3), at(53.8, -1.55, 2), at(53.9, -1.5, 5)];
        let cells = aggregate(&records);
        assert_eq!(
            cells,
            vec![
                AggregatedCell { lat: 53.8, lon: -1.55, total_count: 5 },
                AggregatedCell { lat: 53.9, lon: -1.5, total_count: 5 },
            ]
        );
    }

    #[test]
    fn conserves_total_count_without_duplicate_keys() {
        let records: Vec<_> = (0..200)
            .map(|i| at(53.0 + (i % 7) as f64 * 0.01, -1.0 - (i % 3) as f64 * 0.01, i as u64))
            .collect();
        let cells = aggregate(&records);

        let keys: HashSet<CoordKey> = cells.iter().map(|c| CoordKey::new(c.lat, c.lon)).collect();
        assert_eq!(keys.len(), cells.len());
        assert_eq!(cells.len(), 21);

        let input_total: u64 = records.iter().map(|p| p.count).sum();
        let output_total: u64 = cells.iter().map(|c| c.total_count).sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn nearby_but_unequal_coordinates_stay_apart() {
        let records = vec![at(53.8, -1.55, 1), at(53.800000000000004, -1.55, 1)];
        assert_eq!(aggregate(&records).len(), 2);
    }

    #[test]
    fn signed_zero_is_not_merged() {
        let records = vec![at(0.0, 0.0, 1), at(-0.0, 0.0, 1)];
        assert_eq!(aggregate(&records).len(), 2);
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let records = vec![at(1.0, 2.0, u64::MAX), at(1.0, 2.0, 1)];
        assert_eq!(
            aggregate(&records),
            vec![AggregatedCell { lat: 1.0, lon: 2.0, total_count: u64::MAX }]
        );
    }

    #[test]
    fn empty_input_gives_no_cells() {
        let records: Vec<CrimePoint> = Vec::new();
        assert!(aggregate(&records).is_empty());
    }

    #[test]
    fn zero_counts_still_produce_a_cell() {
        let records = vec![at(1.0, 2.0, 0)];
        assert_eq!(
            aggregate(&records),
            vec![AggregatedCell { lat: 1.0, lon: 2.0, total_count: 0 }]
        );
    }
}
