use std::collections::HashMap;

use crate::model::ServiceRecord;

/// Count service listings per region name.
pub fn count_services_by_region(services: &[ServiceRecord]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();

    for service in services {
        *counts.entry(service.region.clone()).or_insert(0) += 1;
    }

    counts
}
