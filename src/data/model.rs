use std::fmt;

// ---------------------------------------------------------------------------
// CrimePoint – one observation in the dataset
// ---------------------------------------------------------------------------

/// One (location, category, month, count) observation.
///
/// Decoded once from the positional `[lat, lon, category, year, month, count]`
/// tuple of the on-disk format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrimePoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Index into [`CrimeDataset::categories`].
    pub category: usize,
    pub year: i32,
    /// 1–12 inclusive.
    pub month: u32,
    /// Number of incidents at this location/category/month.
    pub count: u64,
}

// ---------------------------------------------------------------------------
// CrimeDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable dataset, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct CrimeDataset {
    /// Category names; a record's `category` is an index into this list.
    pub categories: Vec<String>,
    /// Years present in the data, ascending.
    pub years: Vec<i32>,
    /// All records.
    pub records: Vec<CrimePoint>,
}

impl CrimeDataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Look up a category's index by name.
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == name)
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter – "all" or one category
// ---------------------------------------------------------------------------

/// Category restriction of a filter; replaces the `-1` "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(usize),
}

impl CategoryFilter {
    pub fn matches(&self, category: usize) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

// ---------------------------------------------------------------------------
// AggregatedCell – summed counts at one exact coordinate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedCell {
    pub lat: f64,
    pub lon: f64,
    pub total_count: u64,
}

impl fmt::Display for AggregatedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) ×{}", self.lat, self.lon, self.total_count)
    }
}
