use crate::reports;
use clap::Args;
use roadsage::telemetry::TelemetryTable;

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Show at most this many rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: PreviewArgs, table: &TelemetryTable) {
    println!("\n📊 Preview of Input Data ({} rows)", table.len());
    reports::print_preview_table(table, args.limit);
}
