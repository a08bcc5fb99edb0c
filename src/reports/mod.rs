use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use roadsage::advisor::Advice;
use roadsage::error::RoadSageError;
use roadsage::prompt::format_speed;
use roadsage::telemetry::{TelemetryTable, REQUIRED_COLUMNS};

pub fn print_error_banner(err: &RoadSageError) {
    eprintln!("\n❌ {}", err);
}

pub fn print_preview_table(table: &TelemetryTable, limit: Option<usize>) {
    let mut t = Table::new();
    t.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("#").add_attribute(Attribute::Bold)];
    header.extend(
        REQUIRED_COLUMNS
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    t.add_row(header);

    // index and speed read better right-aligned
    for i in [0, 1] {
        if let Some(col) = t.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let shown = limit.unwrap_or(usize::MAX);
    for (i, r) in table.records().iter().take(shown).enumerate() {
        t.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format_speed(r.speed_kmh)).fg(Color::Cyan),
            Cell::new(&r.brake_pattern),
            Cell::new(&r.time_of_day),
            Cell::new(&r.road_type),
            Cell::new(&r.traffic),
        ]);
    }
    println!("{}", t);

    if table.len() > shown {
        println!("   ... {} more rows not shown", table.len() - shown);
    }
}

pub fn print_advice_section(advice: &Advice) {
    println!("\n▶ DATA {}", advice.index);
    println!("  Context: {}", advice.context);
    println!("  AI Recommendation:");
    for line in advice.recommendation.lines() {
        println!("    {}", line);
    }
}
