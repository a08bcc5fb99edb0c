use roadsage::advisor::{advise, advise_with};
use roadsage::prompt::{context_string, PromptTemplate};
use roadsage::recommend::TextGenerator;
use roadsage::telemetry::{DriveRecord, TelemetryTable};
use std::cell::RefCell;

struct StubGenerator {
    reply: String,
    prompts: RefCell<Vec<String>>,
}

impl StubGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl TextGenerator for StubGenerator {
    fn generate_text(&self, prompt: &str) -> String {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.reply.clone()
    }
}

fn sample_table(rows: usize) -> TelemetryTable {
    let records = (0..rows)
        .map(|i| DriveRecord {
            speed_kmh: 40.0 + i as f64 * 10.0,
            brake_pattern: "Hard brake".to_string(),
            time_of_day: "Night".to_string(),
            road_type: "Highway".to_string(),
            traffic: "Heavy".to_string(),
        })
        .collect();
    TelemetryTable::new(records)
}

#[test]
fn test_one_advice_per_row() {
    let table = sample_table(4);
    let gen = StubGenerator::new("Slow down.");

    let advices = advise(&table, &gen, &PromptTemplate::default());

    assert_eq!(advices.len(), 4);
    let indices: Vec<usize> = advices.iter().map(|a| a.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
}

#[test]
fn test_contexts_match_the_records() {
    let table = sample_table(3);
    let gen = StubGenerator::new("ok");

    let advices = advise(&table, &gen, &PromptTemplate::default());

    for (advice, record) in advices.iter().zip(table.records()) {
        assert_eq!(advice.context, context_string(record));
        assert_eq!(advice.recommendation, "ok");
    }
}

#[test]
fn test_prompts_are_rendered_through_the_template() {
    let table = sample_table(2);
    let gen = StubGenerator::new("ok");
    let template = PromptTemplate::new("ADVISE: {context}");

    advise(&table, &gen, &template);

    let prompts = gen.prompts.borrow();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].starts_with("ADVISE: Speed = 40 km/h"));
    assert!(prompts[1].starts_with("ADVISE: Speed = 50 km/h"));
}

#[test]
fn test_degraded_rows_do_not_stop_the_loop() {
    // the generator contract folds failures into the returned text
    let table = sample_table(5);
    let gen = StubGenerator::new("⚠️ Error generating recommendation: connection refused");

    let advices = advise(&table, &gen, &PromptTemplate::default());

    assert_eq!(advices.len(), 5);
    assert!(advices.iter().all(|a| a.recommendation.contains("⚠️")));
}

#[test]
fn test_observer_sees_rows_in_source_order() {
    let table = sample_table(3);
    let gen = StubGenerator::new("ok");
    let mut seen = Vec::new();

    advise_with(&table, &gen, &PromptTemplate::default(), |a| {
        seen.push(a.index);
    });

    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_empty_table_yields_no_advice() {
    let table = TelemetryTable::new(Vec::new());
    let gen = StubGenerator::new("ok");

    let advices = advise(&table, &gen, &PromptTemplate::default());

    assert!(advices.is_empty());
    assert!(gen.prompts.borrow().is_empty());
}
