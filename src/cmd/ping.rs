use crate::reports;
use clap::Args;
use roadsage::config::GenerationConfig;
use roadsage::recommend::OllamaClient;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct PingArgs {
    #[command(flatten)]
    pub config: GenerationConfig,
}

pub fn run(args: PingArgs) {
    let client = match OllamaClient::from_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            reports::print_error_banner(&e);
            process::exit(1);
        }
    };

    println!("\n🔌 Checking endpoint: {}", args.config.endpoint);
    match client.health_check() {
        Ok(models) => {
            println!("✅ Endpoint is up. {} model(s) installed:", models.len());
            for m in models {
                println!("   - {}", m);
            }
        }
        Err(e) => {
            reports::print_error_banner(&e);
            process::exit(1);
        }
    }
}
