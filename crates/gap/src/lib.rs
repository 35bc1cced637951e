//! `ongap-gap` — Service-gap analysis engine.
//!
//! Pure engine crate: receives pre-loaded records, returns a per-region
//! gap report. No file IO or CLI dependencies.

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod loader;
pub mod model;

pub use engine::run;
pub use error::GapError;
pub use loader::{load_region_rows, load_service_rows};
pub use model::{GapReport, GapRow, GapStatus, RegionRecord, ServiceRecord};
