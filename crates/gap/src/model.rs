use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One demographics row: a postal-code region and its population counts.
#[derive(Debug, Clone, Serialize)]
pub struct RegionRecord {
    pub postal_code: String,
    pub region: String,
    pub population: u32,
    pub seniors: u32,
    pub low_income: u32,
    pub newcomers: u32,
}

/// One community-service listing. `region` is a foreign key into the
/// demographics rows; many services may reference the same region.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    pub service_id: u32,
    pub service_name: String,
    pub service_type: String,
    pub postal_code: String,
    pub region: String,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapStatus {
    #[serde(rename = "HIGH GAP")]
    HighGap,
    #[serde(rename = "OK")]
    Ok,
}

impl std::fmt::Display for GapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighGap => write!(f, "HIGH GAP"),
            Self::Ok => write!(f, "OK"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One output row per input region, in input order. Field order here is the
/// column order of the written results table.
#[derive(Debug, Clone, Serialize)]
pub struct GapRow {
    pub postal_code: String,
    pub region: String,
    pub population: u32,
    pub seniors: u32,
    pub low_income: u32,
    pub newcomers: u32,
    pub service_count: u32,
    pub seniors_per_service: f64,
    pub gap_status: GapStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapSummary {
    pub total_regions: usize,
    pub high_gap: usize,
    pub ok: usize,
    pub services_counted: usize,
    pub services_dropped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub meta: GapMeta,
    pub summary: GapSummary,
    pub rows: Vec<GapRow>,
}
