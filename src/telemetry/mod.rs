pub mod loader;

pub const COL_SPEED: &str = "Speed (km/h)";
pub const COL_BRAKE: &str = "Brake Pattern";
pub const COL_TIME: &str = "Time of Day";
pub const COL_ROAD: &str = "Road Type";
pub const COL_TRAFFIC: &str = "Traffic";

/// Header names the input table must carry, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_SPEED, COL_BRAKE, COL_TIME, COL_ROAD, COL_TRAFFIC];

/// One row of driving telemetry. The categorical fields are taken verbatim
/// from the source file; no vocabulary is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveRecord {
    pub speed_kmh: f64,
    pub brake_pattern: String,
    pub time_of_day: String,
    pub road_type: String,
    pub traffic: String,
}

/// An ordered, read-only batch of records. Loaded once per invocation and
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct TelemetryTable {
    records: Vec<DriveRecord>,
}

impl TelemetryTable {
    pub fn new(records: Vec<DriveRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DriveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
