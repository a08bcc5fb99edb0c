pub mod ollama;

pub use ollama::OllamaClient;

/// A text-generation backend: prompt in, recommendation out.
///
/// Implementations never surface an error to the caller; any failure is
/// folded into the returned string, prefixed with `⚠️`, so one bad call
/// degrades a single row instead of aborting the run.
pub trait TextGenerator {
    fn generate_text(&self, prompt: &str) -> String;
}
