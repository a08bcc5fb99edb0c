use clap::Args;

use crate::prompt::DEFAULT_TEMPLATE;

/// Everything needed to reach the chat endpoint and shape the prompt.
/// Flattened into the subcommands that talk to the model.
#[derive(Args, Debug, Clone)]
pub struct GenerationConfig {
    #[arg(long, default_value = "gemma2:2b")]
    pub model: String,

    /// Base URL of an Ollama-compatible chat endpoint.
    #[arg(long, default_value = "http://localhost:11434")]
    pub endpoint: String,

    /// Bound on each model call. The loop is sequential, so an unbounded
    /// wait on one row would stall every row behind it.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Instruction template; `{context}` is replaced with the row summary.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemma2:2b".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            timeout_secs: 30,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
