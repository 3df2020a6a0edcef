use super::filter::FilterCriteria;
use super::model::CrimePoint;

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Values shown in the stats readout for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    /// Sum of counts over the filtered records (before coordinate merging).
    pub total_count: u64,
    /// e.g. `"Jan 2020 - Dec 2021"`.
    pub range_label: String,
}

impl StatsSummary {
    pub fn total_label(&self) -> String {
        format_count(self.total_count)
    }
}

pub fn summarize(filtered: &[&CrimePoint], criteria: &FilterCriteria) -> StatsSummary {
    let total_count = filtered
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(p.count));
    StatsSummary {
        total_count,
        range_label: range_label(criteria),
    }
}

pub fn range_label(criteria: &FilterCriteria) -> String {
    format!(
        "{} {} - {} {}",
        month_abbrev(criteria.month_start),
        criteria.year_start,
        month_abbrev(criteria.month_end),
        criteria.year_end
    )
}

/// Three-letter English month name, `"?"` outside 1–12.
pub fn month_abbrev(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBREVS.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Render a count with comma thousands separators: `1234567` → `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CategoryFilter;

    fn criteria(year_start: i32, month_start: u32, year_end: i32, month_end: u32) -> FilterCriteria {
        FilterCriteria {
            category: CategoryFilter::All,
            year_start,
            year_end,
            month_start,
            month_end,
        }
    }

    #[test]
    fn totals_raw_filtered_counts() {
        let a = CrimePoint { lat: 53.8, lon: -1.55, category: 0, year: 2020, month: 6, count: 3 };
        let b = CrimePoint { year: 2021, month: 1, count: 2, ..a };
        let c = CrimePoint { lat: 53.9, lon: -1.5, category: 1, year: 2020, month: 12, count: 5 };

        let summary = summarize(&[&a, &b, &c], &criteria(2020, 1, 2021, 12));
        assert_eq!(summary.total_count, 10);
        assert_eq!(summary.range_label, "Jan 2020 - Dec 2021");
    }

    #[test]
    fn empty_selection_totals_zero() {
        let summary = summarize(&[], &criteria(2022, 3, 2022, 8));
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.total_label(), "0");
        assert_eq!(summary.range_label, "Mar 2022 - Aug 2022");
    }

    #[test]
    fn huge_totals_saturate() {
        let a = CrimePoint { lat: 1.0, lon: 2.0, category: 0, year: 2020, month: 1, count: u64::MAX };
        let b = CrimePoint { count: 1, ..a };
        let summary = summarize(&[&a, &b], &criteria(2020, 1, 2020, 12));
        assert_eq!(summary.total_count, u64::MAX);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
        assert_eq!(month_abbrev(0), "?");
        assert_eq!(month_abbrev(13), "?");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
