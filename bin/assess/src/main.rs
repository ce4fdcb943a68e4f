//! Scores answer pairs read from stdin.
//!
//! Each input line is `reference<TAB>candidate`. Each output line is a JSON
//! object with the score, the optional feedback bucket and the per-word match
//! flags for both sentences.

mod tracing;

use std::io::{self, BufRead, Write};

use fanyi_assess::{AssessConfig, Assessor, Environment, Feedback, Strictness, WordMatch};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    score: f64,
    strictness: Strictness,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<Feedback>,
    reference: &'a [WordMatch],
    candidate: &'a [WordMatch],
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging first, so warnings raised while parsing the config are emitted
    tracing::init_tracing(&Environment::from_env()?);

    let config = AssessConfig::from_env()?;

    let strictness = std::env::args()
        .nth(1)
        .map_or(config.strictness, |arg| Strictness::parse_or_default(&arg));
    let thresholds = config.feedback_thresholds()?;

    ::tracing::info!(%strictness, feedback = thresholds.is_some(), "assessing answers from stdin");

    let assessor = Assessor::standard();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some((reference, candidate)) = line.split_once('\t') else {
            ::tracing::warn!(line = number + 1, "skipping line without a tab separator");
            continue;
        };

        let score = assessor.check_similarity(reference, candidate, strictness);
        let comparison = assessor.compare_word_by_word(reference, candidate);
        let report = Report {
            score,
            strictness,
            feedback: thresholds.map(|t| t.classify(score)),
            reference: &comparison.reference_word_elements,
            candidate: &comparison.candidate_word_elements,
        };

        serde_json::to_writer(&mut stdout, &report)?;
        writeln!(stdout)?;
    }

    Ok(())
}
