use crate::reports;
use clap::Args;
use roadsage::advisor;
use roadsage::config::GenerationConfig;
use roadsage::prompt::PromptTemplate;
use roadsage::recommend::OllamaClient;
use roadsage::telemetry::TelemetryTable;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: GenerationConfig,

    /// Skip the data preview table
    #[arg(long, default_value_t = false)]
    pub no_preview: bool,
}

pub fn run(args: RecommendArgs, table: &TelemetryTable) {
    if !args.no_preview {
        println!("\n📊 Preview of Input Data ({} rows)", table.len());
        reports::print_preview_table(table, None);
    }

    let client = match OllamaClient::from_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            reports::print_error_banner(&e);
            process::exit(1);
        }
    };
    let template = PromptTemplate::new(&args.config.template);

    println!("\n📌 AI Recommendations ({}):", client.model());
    println!("   Generating safety actions...");

    // Sections print as each row finishes; a slow endpoint still shows
    // progress instead of going quiet until the end.
    advisor::advise_with(table, &client, &template, reports::print_advice_section);
}
