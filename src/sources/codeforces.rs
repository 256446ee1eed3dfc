use std::collections::HashMap;

use serde_json::Value;

use super::SourceStrategy;
use crate::classify::Difficulty;
use crate::error::{PipelineError, RecordError};
use crate::extract::{self, Locator, Record};
use crate::fetch::Endpoint;
use crate::model::{Candidate, Metrics, ProblemKey, Source};

const API_URL: &str = "https://codeforces.com/api/problemset.problems";

const LOCATOR: Locator = Locator {
    containers: &["result.problems"],
    descriptive_fields: &[],
    key_field: "slug",
};

/// Injected into each problem record from `problemStatistics`.
const SOLVED_FIELD: &str = "solvedCount";

pub fn problem_url(contest_id: i64, index: &str) -> String {
    format!("https://codeforces.com/problemset/problem/{contest_id}/{index}")
}

pub struct Codeforces;

impl SourceStrategy for Codeforces {
    fn source(&self) -> Source {
        Source::Codeforces
    }

    fn endpoints(&self) -> Vec<Endpoint> {
        vec![Endpoint::new(API_URL, "problemset")]
    }

    fn records(&self, payload: &Value) -> Result<Vec<Record>, PipelineError> {
        let status = payload.get("status").and_then(Value::as_str);
        if status != Some("OK") {
            let comment = payload
                .get("comment")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(PipelineError::payload(
                Source::Codeforces,
                format!("status {:?}: {comment}", status.unwrap_or("missing")),
            ));
        }

        let result = payload
            .get("result")
            .filter(|r| r.get("problems").is_some_and(Value::is_array))
            .ok_or_else(|| PipelineError::payload(Source::Codeforces, "no result.problems list"))?;

        let solved = solved_counts(result);
        let mut records = extract::locate_records(payload, &LOCATOR);
        for record in &mut records {
            let count = problem_key(record).and_then(|k| solved.get(&k).copied());
            if let Some(count) = count {
                record.insert(SOLVED_FIELD.to_string(), Value::from(count));
            }
        }
        Ok(records)
    }

    fn candidate(&self, _endpoint: &Endpoint, record: &Record) -> Result<Candidate, RecordError> {
        let title = extract::probe_str(record, &["name"]).ok_or(RecordError::Missing("name"))?;
        let contest_id =
            extract::probe_i64(record, &["contestId"]).ok_or(RecordError::Missing("contestId"))?;
        let index = extract::probe_str(record, &["index"]).ok_or(RecordError::Missing("index"))?;
        let slug = format!("{contest_id}{index}");
        extract::validate_title(&slug, &title)?;

        let rating = extract::probe(record, &["rating"]);
        let solved_count = extract::probe_i64(record, &[SOLVED_FIELD]).unwrap_or(0).max(0) as u64;

        Ok(Candidate {
            remote_id: None,
            url: problem_url(contest_id, &index),
            key: ProblemKey::Slug(slug),
            title,
            difficulty: Difficulty::from_rating_value(rating),
            tags: extract::probe_str_list(record, &["tags"]),
            metrics: Metrics::Codeforces {
                solved_count,
                points: rating.and_then(extract::value_as_i64),
                contest_id,
                index,
            },
        })
    }
}

/// `(contestId, index)` of a problem or statistics entry.
fn problem_key(record: &Record) -> Option<(i64, String)> {
    Some((
        extract::probe_i64(record, &["contestId"])?,
        extract::probe_str(record, &["index"])?,
    ))
}

fn solved_counts(result: &Value) -> HashMap<(i64, String), i64> {
    result
        .get("problemStatistics")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .filter_map(|stat| {
            let count = extract::probe_i64(stat, &[SOLVED_FIELD])?;
            Some((problem_key(stat)?, count))
        })
        .collect()
}
