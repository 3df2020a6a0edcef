use super::error::InvalidCriteria;
use super::model::{CategoryFilter, CrimeDataset, CrimePoint};

// ---------------------------------------------------------------------------
// Filter predicate: category plus a month-granular date range
// ---------------------------------------------------------------------------

/// The user's current selection, rebuilt on every apply.
///
/// `month_start` only restricts records in `year_start` and `month_end` only
/// restricts records in `year_end`; interior years pass whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub year_start: i32,
    pub year_end: i32,
    pub month_start: u32,
    pub month_end: u32,
}

impl FilterCriteria {
    /// Everything in the dataset: all categories, first to last year,
    /// January to December.
    pub fn full_range(dataset: &CrimeDataset) -> Self {
        let year_start = dataset.first_year().unwrap_or_default();
        Self {
            category: CategoryFilter::All,
            year_start,
            year_end: dataset.last_year().unwrap_or(year_start),
            month_start: 1,
            month_end: 12,
        }
    }

    /// Check the fields against their domain without changing them.
    pub fn validate(&self, dataset: &CrimeDataset) -> Result<(), InvalidCriteria> {
        for (field, month) in [("start", self.month_start), ("end", self.month_end)] {
            if !(1..=12).contains(&month) {
                return Err(InvalidCriteria::MonthOutOfRange { field, month });
            }
        }
        if self.year_start > self.year_end {
            return Err(InvalidCriteria::YearsReversed {
                start: self.year_start,
                end: self.year_end,
            });
        }
        if let CategoryFilter::Only(index) = self.category {
            if index >= dataset.categories.len() {
                return Err(InvalidCriteria::UnknownCategory {
                    index,
                    len: dataset.categories.len(),
                });
            }
        }
        Ok(())
    }

    /// Whether a single record passes every rule.
    pub fn matches(&self, point: &CrimePoint) -> bool {
        if !self.category.matches(point.category) {
            return false;
        }
        if point.year < self.year_start || point.year > self.year_end {
            return false;
        }
        if point.year == self.year_start && point.month < self.month_start {
            return false;
        }
        if point.year == self.year_end && point.month > self.month_end {
            return false;
        }
        true
    }
}

/// Return the records passing `criteria`, in input order.
pub fn filter_points<'a>(records: &'a [CrimePoint], criteria: &FilterCriteria) -> Vec<&'a CrimePoint> {
    records.iter().filter(|p| criteria.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(category: usize, year: i32, month: u32, count: u64) -> CrimePoint {
        CrimePoint {
            lat: 53.8,
            lon: -1.55,
            category,
            year,
            month,
            count,
        }
    }

    fn scenario() -> CrimeDataset {
        CrimeDataset {
            categories: vec!["burglary".into(), "theft".into()],
            years: vec![2020, 2021],
            records: vec![
                point(0, 2020, 6, 3),
                point(0, 2021, 1, 2),
                CrimePoint {
                    lat: 53.9,
                    lon: -1.5,
                    ..point(1, 2020, 12, 5)
                },
            ],
        }
    }

    #[test]
    fn full_range_keeps_every_record() {
        let ds = scenario();
        let criteria = FilterCriteria::full_range(&ds);
        assert_eq!(criteria.year_start, 2020);
        assert_eq!(criteria.year_end, 2021);

        let out = filter_points(&ds.records, &criteria);
        assert_eq!(out.len(), 3);
        assert!(out.iter().zip(&ds.records).all(|(a, b)| *a == b));
    }

    #[test]
    fn single_category_single_year() {
        let ds = scenario();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(0),
            year_start: 2020,
            year_end: 2020,
            month_start: 1,
            month_end: 12,
        };
        let out = filter_points(&ds.records, &criteria);
        assert_eq!(out, vec![&ds.records[0]]);
    }

    #[test]
    fn same_year_bounds_intersect_months() {
        let records: Vec<_> = (1..=12).map(|m| point(0, 2020, m, 1)).collect();
        let criteria = FilterCriteria {
            category: CategoryFilter::All,
            year_start: 2020,
            year_end: 2020,
            month_start: 4,
            month_end: 7,
        };
        let months: Vec<u32> = filter_points(&records, &criteria)
            .iter()
            .map(|p| p.month)
            .collect();
        assert_eq!(months, vec![4, 5, 6, 7]);
    }

    #[test]
    fn boundary_months_only_apply_at_boundary_years() {
        let records = vec![
            point(0, 2019, 2, 1),  // start year, before month_start
            point(0, 2019, 3, 1),  // start year, at month_start
            point(0, 2020, 1, 1),  // interior year, any month passes
            point(0, 2020, 12, 1), // interior year
            point(0, 2021, 9, 1),  // end year, at month_end
            point(0, 2021, 10, 1), // end year, after month_end
            point(0, 2022, 1, 1),  // outside
        ];
        let criteria = FilterCriteria {
            category: CategoryFilter::All,
            year_start: 2019,
            year_end: 2021,
            month_start: 3,
            month_end: 9,
        };
        let kept: Vec<(i32, u32)> = filter_points(&records, &criteria)
            .iter()
            .map(|p| (p.year, p.month))
            .collect();
        assert_eq!(kept, vec![(2019, 3), (2020, 1), (2020, 12), (2021, 9)]);
    }

    #[test]
    fn reversed_years_yield_nothing_and_fail_validation() {
        let ds = scenario();
        let criteria = FilterCriteria {
            year_start: 2021,
            year_end: 2020,
            ..FilterCriteria::full_range(&ds)
        };
        assert!(filter_points(&ds.records, &criteria).is_empty());
        assert_eq!(
            criteria.validate(&ds),
            Err(InvalidCriteria::YearsReversed { start: 2021, end: 2020 })
        );
    }

    #[test]
    fn validate_flags_out_of_domain_fields() {
        let ds = scenario();
        let base = FilterCriteria::full_range(&ds);
        assert_eq!(base.validate(&ds), Ok(()));

        let bad_month = FilterCriteria { month_end: 13, ..base };
        assert_eq!(
            bad_month.validate(&ds),
            Err(InvalidCriteria::MonthOutOfRange { field: "end", month: 13 })
        );

        let bad_cat = FilterCriteria {
            category: CategoryFilter::Only(5),
            ..base
        };
        assert_eq!(
            bad_cat.validate(&ds),
            Err(InvalidCriteria::UnknownCategory { index: 5, len: 2 })
        );
    }

    #[test]
    fn empty_dataset_full_range_is_harmless() {
        let ds = CrimeDataset::default();
        let criteria = FilterCriteria::full_range(&ds);
        assert!(filter_points(&ds.records, &criteria).is_empty());
    }
}
