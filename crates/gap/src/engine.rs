use std::collections::HashSet;

use crate::aggregate::count_services_by_region;
use crate::classify::{classify, seniors_per_service};
use crate::evidence::compute_summary;
use crate::model::{GapMeta, GapReport, GapRow, RegionRecord, ServiceRecord};

/// Run the gap computation: count services per region, left-join the counts
/// onto the demographics rows in input order, derive the ratio and status.
///
/// Every demographics row produces exactly one output row. Services naming a
/// region absent from the demographics are dropped from the aggregation and
/// never create rows of their own.
pub fn run(regions: &[RegionRecord], services: &[ServiceRecord]) -> GapReport {
    let counts = count_services_by_region(services);

    let rows: Vec<GapRow> = regions
        .iter()
        .map(|r| {
            let service_count = counts.get(&r.region).copied().unwrap_or(0);
            GapRow {
                postal_code: r.postal_code.clone(),
                region: r.region.clone(),
                population: r.population,
                seniors: r.seniors,
                low_income: r.low_income,
                newcomers: r.newcomers,
                service_count,
                seniors_per_service: seniors_per_service(r.seniors, service_count),
                gap_status: classify(r.seniors, service_count),
            }
        })
        .collect();

    let known: HashSet<&str> = regions.iter().map(|r| r.region.as_str()).collect();
    let services_dropped = services
        .iter()
        .filter(|s| !known.contains(s.region.as_str()))
        .count();

    let summary = compute_summary(&rows, services.len(), services_dropped);

    GapReport {
        meta: GapMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_region_rows, load_service_rows};
    use crate::model::GapStatus;

    fn region(name: &str, seniors: u32) -> RegionRecord {
        RegionRecord {
            postal_code: "M5V".into(),
            region: name.into(),
            population: seniors * 5,
            seniors,
            low_income: 0,
            newcomers: 0,
        }
    }

    fn service(id: u32, region: &str) -> ServiceRecord {
        ServiceRecord {
            service_id: id,
            service_name: format!("Service {id}"),
            service_type: "general".into(),
            postal_code: "M5V".into(),
            region: region.into(),
        }
    }

    #[test]
    fn one_output_row_per_region() {
        let regions = vec![region("a", 100), region("b", 200), region("c", 300)];
        let services = vec![service(1, "b")];
        let report = run(&regions, &services);
        assert_eq!(report.rows.len(), 3);
        // Input order preserved
        assert_eq!(report.rows[0].region, "a");
        assert_eq!(report.rows[1].region, "b");
        assert_eq!(report.rows[2].region, "c");
    }

    #[test]
    fn zero_service_region_defaults() {
        let regions = vec![region("quiet", 2500)];
        let report = run(&regions, &[]);
        let row = &report.rows[0];
        assert_eq!(row.service_count, 0);
        assert_eq!(row.seniors_per_service, 2500.0);
        assert_eq!(row.gap_status, GapStatus::HighGap);
    }

    #[test]
    fn unknown_region_services_dropped() {
        let regions = vec![region("known", 3000)];
        let services = vec![
            service(1, "known"),
            service(2, "nowhere"),
            service(3, "nowhere"),
        ];
        let report = run(&regions, &services);
        assert_eq!(report.rows.len(), 1, "unknown regions must not create rows");
        assert_eq!(report.rows[0].service_count, 1);
        assert_eq!(report.summary.services_counted, 1);
        assert_eq!(report.summary.services_dropped, 2);
    }

    #[test]
    fn worked_examples() {
        let regions = vec![
            region("Toronto-Downtown", 3000),
            region("Southwest-Rural", 900),
        ];
        let services = vec![
            service(1, "Toronto-Downtown"),
            service(4, "Toronto-Downtown"),
            service(5, "Southwest-Rural"),
        ];
        let report = run(&regions, &services);

        let toronto = &report.rows[0];
        assert_eq!(toronto.service_count, 2);
        assert_eq!(toronto.seniors_per_service, 1500.0);
        assert_eq!(toronto.gap_status, GapStatus::Ok);

        // Below the seniors threshold despite a single service
        let rural = &report.rows[1];
        assert_eq!(rural.service_count, 1);
        assert_eq!(rural.seniors_per_service, 900.0);
        assert_eq!(rural.gap_status, GapStatus::Ok);
    }

    #[test]
    fn integration_from_csv() {
        let demo_csv = "\
postal_code,region,population,seniors,low_income,newcomers
M5V,Toronto-Downtown,15000,3000,4500,2000
K1A,Ottawa-Central,12000,2400,3000,1500
L5B,Mississauga,18000,3600,5400,1800
P0L,Northern-Ontario,5000,1500,2000,200
N0L,Southwest-Rural,3000,900,1200,100
";
        let services_csv = "\
service_id,service_name,service_type,postal_code,region
1,Senior Center A,senior_services,M5V,Toronto-Downtown
2,Food Bank B,food_bank,K1A,Ottawa-Central
3,Health Clinic C,health,L5B,Mississauga
4,Newcomer Center D,newcomer_services,M5V,Toronto-Downtown
5,Community Hub E,general,N0L,Southwest-Rural
";
        let regions = load_region_rows(demo_csv).unwrap();
        let services = load_service_rows(services_csv).unwrap();
        let report = run(&regions, &services);

        assert_eq!(report.summary.total_regions, 5);
        assert_eq!(report.summary.services_counted, 5);
        assert_eq!(report.summary.services_dropped, 0);

        let by_region: Vec<(&str, u32, GapStatus)> = report
            .rows
            .iter()
            .map(|r| (r.region.as_str(), r.service_count, r.gap_status))
            .collect();

        assert_eq!(by_region[0], ("Toronto-Downtown", 2, GapStatus::Ok));
        assert_eq!(by_region[1], ("Ottawa-Central", 1, GapStatus::HighGap));
        assert_eq!(by_region[2], ("Mississauga", 1, GapStatus::HighGap));
        assert_eq!(by_region[3], ("Northern-Ontario", 0, GapStatus::Ok));
        assert_eq!(by_region[4], ("Southwest-Rural", 1, GapStatus::Ok));

        // Northern-Ontario: zero services, ratio falls back to seniors
        assert_eq!(report.rows[3].seniors_per_service, 1500.0);
        assert_eq!(report.summary.high_gap, 2);
    }
}
