use serde_json::Value;

use super::{FailurePolicy, SourceStrategy};
use crate::aggregate::IdPolicy;
use crate::classify::Difficulty;
use crate::error::{PipelineError, RecordError};
use crate::extract::{self, Locator, Record};
use crate::fetch::Endpoint;
use crate::model::{round1, Candidate, Metrics, ProblemKey, Source};

const API_URL: &str = "https://leetcode.com/api/problems/all/";
const USER_AGENT: &str = "Mozilla/5.0";

const LOCATOR: Locator = Locator {
    containers: &["stat_status_pairs"],
    descriptive_fields: &[],
    key_field: "slug",
};

const ID_KEYS: &[&str] = &["stat.question_id"];
const TITLE_KEYS: &[&str] = &["stat.question__title"];
const SLUG_KEYS: &[&str] = &["stat.question__title_slug"];
const LEVEL_KEYS: &[&str] = &["difficulty.level"];
const SUBMITTED_KEYS: &[&str] = &["stat.total_submitted"];
const ACCEPTED_KEYS: &[&str] = &["stat.total_acs"];

pub fn problem_url(slug: &str) -> String {
    format!("https://leetcode.com/problems/{slug}/")
}

/// Percentage of accepted submissions, one decimal; 0 when nothing was submitted.
pub fn acceptance_rate(accepted: i64, submitted: i64) -> f64 {
    if submitted > 0 {
        round1(accepted as f64 / submitted as f64 * 100.0)
    } else {
        0.0
    }
}

pub struct Leetcode;

impl SourceStrategy for Leetcode {
    fn source(&self) -> Source {
        Source::Leetcode
    }

    fn endpoints(&self) -> Vec<Endpoint> {
        vec![Endpoint::new(API_URL, "all")]
    }

    fn user_agent(&self) -> Option<&'static str> {
        Some(USER_AGENT)
    }

    fn on_unreachable(&self) -> FailurePolicy {
        FailurePolicy::Abort
    }

    fn id_policy(&self) -> IdPolicy {
        IdPolicy::Remote
    }

    fn records(&self, payload: &Value) -> Result<Vec<Record>, PipelineError> {
        Ok(extract::locate_records(payload, &LOCATOR))
    }

    fn candidate(&self, _endpoint: &Endpoint, record: &Record) -> Result<Candidate, RecordError> {
        let question_id = extract::probe_i64(record, ID_KEYS)
            .filter(|id| *id > 0)
            .ok_or(RecordError::Missing("question_id"))?;
        let title =
            extract::probe_str(record, TITLE_KEYS).ok_or(RecordError::Missing("question__title"))?;
        let slug = extract::probe_str(record, SLUG_KEYS)
            .ok_or(RecordError::Missing("question__title_slug"))?;
        let level = extract::probe_i64(record, LEVEL_KEYS).ok_or(RecordError::Missing("level"))?;
        let submitted = extract::probe_i64(record, SUBMITTED_KEYS)
            .ok_or(RecordError::Missing("total_submitted"))?;
        let accepted =
            extract::probe_i64(record, ACCEPTED_KEYS).ok_or(RecordError::Missing("total_acs"))?;

        extract::validate_title(&slug, &title)?;
        let difficulty = Difficulty::from_level(level)?;

        Ok(Candidate {
            remote_id: Some(question_id as u64),
            url: problem_url(&slug),
            key: ProblemKey::Slug(slug),
            title,
            difficulty,
            tags: extract::probe_str_list(record, &["tags"]),
            metrics: Metrics::Acceptance(acceptance_rate(accepted, submitted)),
        })
    }
}
