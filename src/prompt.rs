use crate::telemetry::DriveRecord;

pub const DEFAULT_TEMPLATE: &str =
    "Given the driving context: {context}, recommend a safety warning or action for the driver.";

pub const CONTEXT_SLOT: &str = "{context}";

/// Speed prints without a trailing `.0` for whole numbers, so a 60 km/h row
/// reads `Speed = 60 km/h` rather than `Speed = 60.0 km/h`.
pub fn format_speed(kmh: f64) -> String {
    if kmh.is_finite() && kmh.fract() == 0.0 {
        format!("{}", kmh as i64)
    } else {
        format!("{}", kmh)
    }
}

/// The natural-language summary of one row. Pure interpolation of the five
/// telemetry fields, e.g.
/// `Speed = 60 km/h, Hard brake, Night time, Highway road with Heavy traffic.`
pub fn context_string(r: &DriveRecord) -> String {
    format!(
        "Speed = {} km/h, {}, {} time, {} road with {} traffic.",
        format_speed(r.speed_kmh),
        r.brake_pattern,
        r.time_of_day,
        r.road_type,
        r.traffic
    )
}

/// Instruction template wrapped around the context string.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Substitute the context into the `{context}` slot. A template without
    /// the slot gets the context appended so it is never dropped.
    pub fn render(&self, context: &str) -> String {
        if self.text.contains(CONTEXT_SLOT) {
            self.text.replace(CONTEXT_SLOT, context)
        } else {
            format!("{} {}", self.text.trim_end(), context)
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
