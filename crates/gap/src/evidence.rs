use crate::model::{GapRow, GapStatus, GapSummary};

/// Compute summary statistics from the derived rows.
pub fn compute_summary(
    rows: &[GapRow],
    services_total: usize,
    services_dropped: usize,
) -> GapSummary {
    let high_gap = rows.iter().filter(|r| r.gap_status == GapStatus::HighGap).count();

    GapSummary {
        total_regions: rows.len(),
        high_gap,
        ok: rows.len() - high_gap,
        services_counted: services_total - services_dropped,
        services_dropped,
    }
}
