use clap::{Parser, Subcommand};
use roadsage::telemetry::loader::load_table;
use roadsage::telemetry::TelemetryTable;
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/drive_data_example.csv")]
    data: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the input data preview table
    Preview(cmd::preview::PreviewArgs),
    /// Generate one AI safety recommendation per row
    Recommend(cmd::recommend::RecommendArgs),
    /// Check that the chat endpoint is reachable and has models installed
    Ping(cmd::ping::PingArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("\n🚗 AI V2V Safety Recommender");

    match cli.command {
        // ping talks only to the endpoint; no table needed
        Commands::Ping(args) => cmd::ping::run(args),
        Commands::Preview(args) => {
            let table = load_or_exit(&cli.data);
            cmd::preview::run(args, &table);
        }
        Commands::Recommend(args) => {
            let table = load_or_exit(&cli.data);
            cmd::recommend::run(args, &table);
        }
    }
}

fn load_or_exit(path: &str) -> TelemetryTable {
    println!("📂 Loading telemetry: {}", path);
    match load_table(path) {
        Ok(table) => table,
        Err(e) => {
            reports::print_error_banner(&e);
            process::exit(1);
        }
    }
}
