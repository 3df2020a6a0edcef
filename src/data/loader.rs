use std::path::Path;

use serde::Deserialize;

use super::error::LoadError;
use super::model::{CrimeDataset, CrimePoint};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read and decode a dataset file.
pub fn load_file(path: &Path) -> Result<CrimeDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_str(&text)
}

// ---------------------------------------------------------------------------
// JSON decoder
// ---------------------------------------------------------------------------

/// On-disk layout:
///
/// ```json
/// {
///   "t": ["Burglary", "Vehicle crime", ...],
///   "y": [2020, 2021, ...],
///   "p": [[53.8, -1.55, 0, 2020, 6, 3], ...]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct RawDataset {
    t: Vec<String>,
    y: Vec<i32>,
    p: Vec<RawPoint>,
}

/// `[lat, lon, category, year, month, count]`
type RawPoint = (f64, f64, usize, i32, u32, u64);

/// Decode dataset JSON into typed records.
///
/// Records must reference a listed category and year and carry a month in
/// 1–12; anything else is reported as a [`LoadError`].
pub fn decode_str(text: &str) -> Result<CrimeDataset, LoadError> {
    let raw: RawDataset = serde_json::from_str(text)?;

    let records = raw
        .p
        .iter()
        .enumerate()
        .map(|(row, &(lat, lon, category, year, month, count))| {
            if category >= raw.t.len() {
                return Err(LoadError::UnknownCategory {
                    row,
                    index: category,
                    len: raw.t.len(),
                });
            }
            if !raw.y.contains(&year) {
                return Err(LoadError::UnknownYear { row, year });
            }
            if !(1..=12).contains(&month) {
                return Err(LoadError::MonthOutOfRange { row, month });
            }
            Ok(CrimePoint {
                lat,
                lon,
                category,
                year,
                month,
                count,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CrimeDataset {
        categories: raw.t,
        years: raw.y,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "t": ["burglary", "theft"],
        "y": [2020, 2021],
        "p": [
            [53.8, -1.55, 0, 2020, 6, 3],
            [53.8, -1.55, 0, 2021, 1, 2],
            [53.9, -1.5, 1, 2020, 12, 5]
        ]
    }"#;

    #[test]
    fn decodes_positional_records_into_named_fields() {
        let ds = decode_str(SAMPLE).unwrap();
        assert_eq!(ds.categories, vec!["burglary", "theft"]);
        assert_eq!(ds.years, vec![2020, 2021]);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.records[2],
            CrimePoint {
                lat: 53.9,
                lon: -1.5,
                category: 1,
                year: 2020,
                month: 12,
                count: 5,
            }
        );
    }

    #[test]
    fn missing_field_is_a_load_error() {
        let err = decode_str(r#"{"t": ["a"], "p": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn wrong_tuple_arity_is_a_load_error() {
        let err = decode_str(r#"{"t": ["a"], "y": [2020], "p": [[1.0, 2.0, 0, 2020, 1]]}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn negative_count_is_a_load_error() {
        let err = decode_str(r#"{"t": ["a"], "y": [2020], "p": [[1.0, 2.0, 0, 2020, 1, -4]]}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn rejects_unknown_category_year_and_month() {
        let cat = decode_str(r#"{"t": ["a"], "y": [2020], "p": [[1.0, 2.0, 1, 2020, 1, 1]]}"#);
        assert!(matches!(
            cat,
            Err(LoadError::UnknownCategory { row: 0, index: 1, len: 1 })
        ));

        let year = decode_str(r#"{"t": ["a"], "y": [2020], "p": [[1.0, 2.0, 0, 2019, 1, 1]]}"#);
        assert!(matches!(year, Err(LoadError::UnknownYear { row: 0, year: 2019 })));

        let month = decode_str(r#"{"t": ["a"], "y": [2020], "p": [[1.0, 2.0, 0, 2020, 13, 1]]}"#);
        assert!(matches!(
            month,
            Err(LoadError::MonthOutOfRange { row: 0, month: 13 })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_file(Path::new("/definitely/not/here/crime_data.json")).unwrap_err();
        assert!(err.to_string().contains("crime_data.json"));
    }
}
