use crate::error::GapError;
use crate::model::{RegionRecord, ServiceRecord};

/// Table names used in error reporting.
pub const DEMOGRAPHICS_TABLE: &str = "demographics";
pub const SERVICES_TABLE: &str = "services";

fn header_index(headers: &[String], table: &str, name: &str) -> Result<usize, GapError> {
    headers.iter().position(|h| h == name).ok_or_else(|| GapError::SchemaMismatch {
        table: table.into(),
        column: name.into(),
    })
}

fn read_headers(
    reader: &mut csv::Reader<&[u8]>,
    table: &str,
) -> Result<Vec<String>, GapError> {
    Ok(reader
        .headers()
        .map_err(|e| GapError::DataUnavailable {
            table: table.into(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect())
}

fn parse_count(
    record: &csv::StringRecord,
    idx: usize,
    table: &str,
    row: usize,
    column: &str,
) -> Result<u32, GapError> {
    let value = record.get(idx).unwrap_or("");
    value.trim().parse().map_err(|_| GapError::CountParse {
        table: table.into(),
        row,
        column: column.into(),
        value: value.into(),
    })
}

/// Load demographics rows from CSV text. Columns are located by header name,
/// so column order does not matter.
pub fn load_region_rows(csv_data: &str) -> Result<Vec<RegionRecord>, GapError> {
    let table = DEMOGRAPHICS_TABLE;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers = read_headers(&mut reader, table)?;

    let postal_code_idx = header_index(&headers, table, "postal_code")?;
    let region_idx = header_index(&headers, table, "region")?;
    let population_idx = header_index(&headers, table, "population")?;
    let seniors_idx = header_index(&headers, table, "seniors")?;
    let low_income_idx = header_index(&headers, table, "low_income")?;
    let newcomers_idx = header_index(&headers, table, "newcomers")?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| GapError::DataUnavailable {
            table: table.into(),
            reason: e.to_string(),
        })?;
        let row = i + 1;

        rows.push(RegionRecord {
            postal_code: record.get(postal_code_idx).unwrap_or("").to_string(),
            region: record.get(region_idx).unwrap_or("").to_string(),
            population: parse_count(&record, population_idx, table, row, "population")?,
            seniors: parse_count(&record, seniors_idx, table, row, "seniors")?,
            low_income: parse_count(&record, low_income_idx, table, row, "low_income")?,
            newcomers: parse_count(&record, newcomers_idx, table, row, "newcomers")?,
        });
    }

    Ok(rows)
}

/// Load service listings from CSV text.
pub fn load_service_rows(csv_data: &str) -> Result<Vec<ServiceRecord>, GapError> {
    let table = SERVICES_TABLE;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers = read_headers(&mut reader, table)?;

    let service_id_idx = header_index(&headers, table, "service_id")?;
    let service_name_idx = header_index(&headers, table, "service_name")?;
    let service_type_idx = header_index(&headers, table, "service_type")?;
    let postal_code_idx = header_index(&headers, table, "postal_code")?;
    let region_idx = header_index(&headers, table, "region")?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| GapError::DataUnavailable {
            table: table.into(),
            reason: e.to_string(),
        })?;
        let row = i + 1;

        rows.push(ServiceRecord {
            service_id: parse_count(&record, service_id_idx, table, row, "service_id")?,
            service_name: record.get(service_name_idx).unwrap_or("").to_string(),
            service_type: record.get(service_type_idx).unwrap_or("").to_string(),
            postal_code: record.get(postal_code_idx).unwrap_or("").to_string(),
            region: record.get(region_idx).unwrap_or("").to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_regions_basic() {
        let csv = "\
postal_code,region,population,seniors,low_income,newcomers
M5V,Toronto-Downtown,15000,3000,4500,2000
P0L,Northern-Ontario,5000,1500,2000,200
";
        let rows = load_region_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].region, "Toronto-Downtown");
        assert_eq!(rows[0].seniors, 3000);
        assert_eq!(rows[1].postal_code, "P0L");
        assert_eq!(rows[1].newcomers, 200);
    }

    #[test]
    fn load_regions_column_order_insensitive() {
        let csv = "\
seniors,region,postal_code,newcomers,low_income,population
900,Southwest-Rural,N0L,100,1200,3000
";
        let rows = load_region_rows(csv).unwrap();
        assert_eq!(rows[0].region, "Southwest-Rural");
        assert_eq!(rows[0].seniors, 900);
        assert_eq!(rows[0].population, 3000);
    }

    #[test]
    fn load_regions_missing_column() {
        let csv = "\
postal_code,region,population,low_income,newcomers
M5V,Toronto-Downtown,15000,4500,2000
";
        let err = load_region_rows(csv).unwrap_err();
        match err {
            GapError::SchemaMismatch { table, column } => {
                assert_eq!(table, "demographics");
                assert_eq!(column, "seniors");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn load_regions_bad_count() {
        let csv = "\
postal_code,region,population,seniors,low_income,newcomers
M5V,Toronto-Downtown,15000,lots,4500,2000
";
        let err = load_region_rows(csv).unwrap_err();
        match err {
            GapError::CountParse { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "seniors");
                assert_eq!(value, "lots");
            }
            other => panic!("expected CountParse, got {other:?}"),
        }
    }

    #[test]
    fn load_services_basic() {
        let csv = "\
service_id,service_name,service_type,postal_code,region
1,Senior Center A,senior_services,M5V,Toronto-Downtown
4,Newcomer Center D,newcomer_services,M5V,Toronto-Downtown
";
        let rows = load_service_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service_id, 1);
        assert_eq!(rows[1].service_name, "Newcomer Center D");
        assert_eq!(rows[1].region, "Toronto-Downtown");
    }

    #[test]
    fn load_services_missing_column() {
        let csv = "\
service_id,service_name,service_type,postal_code
1,Senior Center A,senior_services,M5V
";
        let err = load_service_rows(csv).unwrap_err();
        match err {
            GapError::SchemaMismatch { table, column } => {
                assert_eq!(table, "services");
                assert_eq!(column, "region");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}
