//! Data layer: dataset decoding and the filter → aggregate → normalise pipeline.
//!
//! Architecture:
//! ```text
//!   crime_data.json  { t, y, p }
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode file → CrimeDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  category + date range → filtered records
//!   └──────────┘
//!        │                         │
//!        ▼                         ▼
//!   ┌───────────┐            ┌──────────┐
//!   │ aggregate │            │  stats    │  total count, range label
//!   └───────────┘            └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ intensity │  scale ceiling for the heat overlay
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod intensity;
pub mod loader;
pub mod model;
pub mod stats;
