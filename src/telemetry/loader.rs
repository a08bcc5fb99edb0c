use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::{RoadSageError, RsResult};
use crate::telemetry::{
    DriveRecord, TelemetryTable, COL_BRAKE, COL_ROAD, COL_SPEED, COL_TIME, COL_TRAFFIC,
    REQUIRED_COLUMNS,
};

/// Load a telemetry table, dispatching on the file extension.
/// `.xlsx`/`.xls`/`.ods` go through calamine; everything else is read as CSV.
pub fn load_table(path: &str) -> RsResult<TelemetryTable> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(RoadSageError::DataNotFound(path.to_string()));
    }

    let ext = p
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xlsx") | Some("xlsm") | Some("xls") | Some("ods") => read_spreadsheet(path),
        _ => read_csv(path),
    }
}

fn column_indices(headers: &[String]) -> RsResult<HashMap<&'static str, usize>> {
    let mut indices = HashMap::new();
    for col in REQUIRED_COLUMNS {
        let idx = headers
            .iter()
            .position(|h| h.trim() == col)
            .ok_or_else(|| RoadSageError::MissingColumn(col.to_string()))?;
        indices.insert(col, idx);
    }
    Ok(indices)
}

fn parse_speed(raw: &str, row: usize) -> RsResult<f64> {
    raw.trim().parse().map_err(|_| {
        RoadSageError::Validation(format!("Row {}: invalid '{}' value '{}'", row, COL_SPEED, raw))
    })
}

fn read_csv(path: &str) -> RsResult<TelemetryTable> {
    debug!(path, "reading telemetry as CSV");

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let idx = column_indices(&headers)?;

    let field = |rec: &csv::StringRecord, col: &str| -> String {
        rec.get(idx[col]).unwrap_or("").trim().to_string()
    };

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 1;
        records.push(DriveRecord {
            speed_kmh: parse_speed(&field(&rec, COL_SPEED), row)?,
            brake_pattern: field(&rec, COL_BRAKE),
            time_of_day: field(&rec, COL_TIME),
            road_type: field(&rec, COL_ROAD),
            traffic: field(&rec, COL_TRAFFIC),
        });
    }

    debug!(rows = records.len(), "telemetry loaded");
    Ok(TelemetryTable::new(records))
}

fn read_spreadsheet(path: &str) -> RsResult<TelemetryTable> {
    debug!(path, "reading telemetry as spreadsheet");

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RoadSageError::Validation("workbook has no sheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let idx = column_indices(&headers)?;

    let cell = |row: &[Data], col: &str| -> String {
        row.get(idx[col]).map(|c| c.to_string()).unwrap_or_default()
    };

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let row_no = i + 1;
        // Numeric cells come through typed; anything else falls back to
        // parsing the display text.
        let speed_kmh = match row.get(idx[COL_SPEED]) {
            Some(Data::Float(f)) => *f,
            Some(Data::Int(n)) => *n as f64,
            other => parse_speed(
                &other.map(|c| c.to_string()).unwrap_or_default(),
                row_no,
            )?,
        };

        records.push(DriveRecord {
            speed_kmh,
            brake_pattern: cell(row, COL_BRAKE).trim().to_string(),
            time_of_day: cell(row, COL_TIME).trim().to_string(),
            road_type: cell(row, COL_ROAD).trim().to_string(),
            traffic: cell(row, COL_TRAFFIC).trim().to_string(),
        });
    }

    debug!(rows = records.len(), "telemetry loaded");
    Ok(TelemetryTable::new(records))
}
