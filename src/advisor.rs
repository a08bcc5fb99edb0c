use crate::prompt::{context_string, PromptTemplate};
use crate::recommend::TextGenerator;
use crate::telemetry::TelemetryTable;

/// Context plus recommendation for one row. `index` is 1-based, matching
/// the section titles shown to the user.
#[derive(Debug, Clone)]
pub struct Advice {
    pub index: usize,
    pub context: String,
    pub recommendation: String,
}

/// Walk the table in source order: build the context, render the prompt,
/// call the generator, hand each finished `Advice` to the observer.
///
/// Strictly sequential. A failed call shows up as degraded text for that
/// row (the generator contract) and never stops the loop, so the output
/// always carries exactly one section per record.
pub fn advise_with<G, F>(
    table: &TelemetryTable,
    generator: &G,
    template: &PromptTemplate,
    mut observer: F,
) -> Vec<Advice>
where
    G: TextGenerator,
    F: FnMut(&Advice),
{
    let mut advices = Vec::with_capacity(table.len());
    for (i, record) in table.records().iter().enumerate() {
        let context = context_string(record);
        let prompt = template.render(&context);
        let recommendation = generator.generate_text(&prompt);

        let advice = Advice {
            index: i + 1,
            context,
            recommendation,
        };
        observer(&advice);
        advices.push(advice);
    }
    advices
}

pub fn advise<G: TextGenerator>(
    table: &TelemetryTable,
    generator: &G,
    template: &PromptTemplate,
) -> Vec<Advice> {
    advise_with(table, generator, template, |_| {})
}
