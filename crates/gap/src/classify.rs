use crate::model::GapStatus;

/// Regions with more seniors than this are flagged when services are scarce.
pub const SENIORS_THRESHOLD: u32 = 2000;

/// Fewer services than this counts as scarce.
pub const MIN_SERVICES: u32 = 2;

/// HIGH GAP iff seniors exceed the threshold and services are scarce.
/// Both thresholds are fixed, not configuration.
pub fn classify(seniors: u32, service_count: u32) -> GapStatus {
    if seniors > SENIORS_THRESHOLD && service_count < MIN_SERVICES {
        GapStatus::HighGap
    } else {
        GapStatus::Ok
    }
}

/// Seniors per service. A zero service count divides by 1 instead of 0,
/// which conflates "no services" with "one service" — a known approximation,
/// preserved as-is. The gap classification uses the raw count, not this ratio.
pub fn seniors_per_service(seniors: u32, service_count: u32) -> f64 {
    f64::from(seniors) / f64::from(service_count.max(1))
}
