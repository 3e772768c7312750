//! Batch partition and reassembly contract tests.
//!
//! The backend sees each chunk as one `\n`-joined block, and the caller gets
//! the chunk translations back in order. With an echoing transport the
//! output must therefore equal the `\n`-joined input, whatever the budget.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use gtrans_cli::translation::{
    BatchOptions, BatchTranslator, Transport, TransportError, join_lines, plan_chunks,
};

#[derive(Default)]
struct EchoTransport {
    submitted: Mutex<Vec<String>>,
}

#[async_trait]
impl Transport for EchoTransport {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, TransportError> {
        self.submitted.lock().unwrap().push(text.to_string());
        Ok(text.to_string())
    }
}

fn sample_lines() -> Vec<String> {
    [
        "# Release notes",
        "",
        "The cache now survives restarts.",
        "Chunking counts characters, not bytes: こんにちは世界",
        "",
        "- fixed a crash on empty input",
        "- faster startup",
        "Long line: Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn no_delay(max_chunk_chars: usize) -> BatchOptions {
    BatchOptions {
        max_chunk_chars,
        chunk_delay: Duration::ZERO,
    }
}

#[test]
fn test_chunks_cover_every_line_once_in_order() {
    let lines = sample_lines();

    for budget in [1, 5, 20, 40, 80, 10_000] {
        let chunks = plan_chunks(&lines, budget);

        assert_eq!(chunks.first().unwrap().start, 0, "budget {budget}");
        assert_eq!(chunks.last().unwrap().end, lines.len(), "budget {budget}");
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "budget {budget}");
            assert!(!pair[0].is_empty(), "budget {budget}");
        }
    }
}

#[test]
fn test_counted_lines_stay_within_budget() {
    let lines = sample_lines();

    for budget in [5, 20, 40, 80] {
        for (n, chunk) in plan_chunks(&lines, budget).into_iter().enumerate() {
            if chunk.len() < 2 {
                continue;
            }
            // A chunk opened by a boundary, or by a first line that overflows
            // on its own, does not count its first line
            let first_overflows = lines[chunk.start].chars().count() > budget;
            let counted_from = if n == 0 && !first_overflows {
                chunk.start
            } else {
                chunk.start + 1
            };
            let counted: usize = lines[counted_from..chunk.end]
                .iter()
                .map(|line| line.chars().count())
                .sum();
            assert!(counted <= budget, "budget {budget}, chunk {chunk:?}");
        }
    }
}

#[test]
fn test_oversized_first_line_restarts_the_count() {
    let lines = vec!["x".repeat(10), "y".to_string(), "z".to_string()];
    assert_eq!(plan_chunks(&lines, 5), vec![0..3]);
}

#[test]
fn test_large_budget_yields_single_chunk() {
    let lines = sample_lines();
    assert_eq!(plan_chunks(&lines, 10_000), vec![0..lines.len()]);
}

#[test]
fn test_budget_of_one_isolates_non_empty_lines() {
    let lines = vec!["ab", "cd", "ef"];
    assert_eq!(plan_chunks(&lines, 1), vec![0..1, 1..2, 2..3]);
}

#[tokio::test]
async fn test_reassembly_matches_input_for_every_budget() {
    let lines = sample_lines();
    let expected = join_lines(&lines);

    for budget in [1, 5, 20, 40, 80, 10_000] {
        let translator = BatchTranslator::with_options(EchoTransport::default(), no_delay(budget));
        let output = translator.translate_batch(&lines, "en", "ja").await.unwrap();
        assert_eq!(output, expected, "budget {budget}");
    }
}

#[tokio::test]
async fn test_one_request_per_planned_chunk() {
    let lines = sample_lines();
    let transport = EchoTransport::default();
    let planned = plan_chunks(&lines, 40);

    let translator = BatchTranslator::with_options(&transport, no_delay(40));
    translator.translate_batch(&lines, "auto", "fr").await.unwrap();

    let submitted = transport.submitted.lock().unwrap().clone();
    let expected: Vec<String> = planned.iter().map(|r| join_lines(&lines[r.clone()])).collect();
    assert_eq!(submitted, expected);
}

#[tokio::test]
async fn test_empty_input_sends_one_empty_request() {
    let transport = EchoTransport::default();
    let translator = BatchTranslator::with_options(&transport, no_delay(10));

    let output = translator.translate_batch::<&str>(&[], "en", "ja").await.unwrap();

    assert_eq!(output, "");
    assert_eq!(*transport.submitted.lock().unwrap(), vec![String::new()]);
}
