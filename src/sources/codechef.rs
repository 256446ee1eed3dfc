//! CodeChef: four category endpoints whose category *is* the difficulty.
//! When a record carries no statistics of its own, `acceptance_rate` and
//! `total_successful_submissions` are placeholders derived from the id.

use serde_json::Value;

use super::{fallback, SourceStrategy};
use crate::classify::{infer_tags, Difficulty};
use crate::error::{PipelineError, RecordError};
use crate::extract::{self, Locator, Record};
use crate::fetch::Endpoint;
use crate::model::{Candidate, Metrics, ProblemKey, Source};

/// Live records kept per category.
pub const CATEGORY_CAP: usize = 50;

const CATEGORIES: [(&str, Difficulty); 4] = [
    ("https://www.codechef.com/api/list/problems/school", Difficulty::Beginner),
    ("https://www.codechef.com/api/list/problems/easy", Difficulty::Easy),
    ("https://www.codechef.com/api/list/problems/medium", Difficulty::Medium),
    ("https://www.codechef.com/api/list/problems/hard", Difficulty::Hard),
];

/// Difficulty cycle applied to the fallback list by position.
const FALLBACK_CYCLE: [Difficulty; 4] = [
    Difficulty::Beginner,
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
];

const LOCATOR: Locator = Locator {
    containers: &["problems", "result", "data", "list"],
    descriptive_fields: &["name", "title", "problem_name"],
    key_field: "code",
};

const CODE_KEYS: &[&str] = &["code", "problem_code", "problemCode", "slug"];
const TITLE_KEYS: &[&str] = &["name", "title", "problem_name", "problemName"];
const ACCURACY_KEYS: &[&str] = &["accuracy", "acceptance_rate"];
const SUCCESSFUL_KEYS: &[&str] = &["successful_submissions", "total_successful_submissions"];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub fn problem_url(code: &str) -> String {
    format!("https://www.codechef.com/problems/{code}")
}

pub struct Codechef;

impl SourceStrategy for Codechef {
    fn source(&self) -> Source {
        Source::Codechef
    }

    fn endpoints(&self) -> Vec<Endpoint> {
        CATEGORIES
            .iter()
            .map(|(url, difficulty)| Endpoint::new(*url, difficulty.as_str()))
            .collect()
    }

    fn user_agent(&self) -> Option<&'static str> {
        Some(USER_AGENT)
    }

    fn cap(&self) -> Option<usize> {
        Some(CATEGORY_CAP)
    }

    fn records(&self, payload: &Value) -> Result<Vec<Record>, PipelineError> {
        Ok(extract::locate_records(payload, &LOCATOR))
    }

    fn candidate(&self, endpoint: &Endpoint, record: &Record) -> Result<Candidate, RecordError> {
        let difficulty = CATEGORIES
            .iter()
            .find(|(_, d)| d.as_str() == endpoint.label)
            .map(|(_, d)| *d)
            .ok_or(RecordError::Missing("category"))?;

        let code = extract::probe_str(record, CODE_KEYS)
            .ok_or(RecordError::Missing("code"))?
            .to_uppercase();
        let title = extract::probe_str(record, TITLE_KEYS).ok_or(RecordError::Missing("name"))?;
        extract::validate_title(&code, &title)?;

        let accuracy = extract::probe_f64(record, ACCURACY_KEYS);
        let successful = extract::probe_i64(record, SUCCESSFUL_KEYS).filter(|n| *n >= 0);
        let metrics = match (accuracy, successful) {
            (Some(acceptance_rate), Some(successful)) => Metrics::Submissions {
                acceptance_rate,
                successful: successful as u64,
            },
            _ => Metrics::Synthetic,
        };

        Ok(Candidate {
            remote_id: None,
            url: problem_url(&code),
            tags: infer_tags(&title),
            key: ProblemKey::Code(code),
            title,
            difficulty,
            metrics,
        })
    }

    fn fallback(&self) -> Vec<Candidate> {
        fallback::CODECHEF
            .iter()
            .zip(FALLBACK_CYCLE.iter().cycle())
            .map(|((code, title), difficulty)| Candidate {
                remote_id: None,
                key: ProblemKey::Code(code.to_string()),
                title: title.to_string(),
                difficulty: *difficulty,
                url: problem_url(code),
                tags: infer_tags(title),
                metrics: Metrics::Synthetic,
            })
            .collect()
    }
}
