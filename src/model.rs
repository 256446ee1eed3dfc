use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::classify::Difficulty;

/// Tag used when nothing better is known about a problem.
pub const SENTINEL_TAG: &str = "implementation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Codechef,
    Codeforces,
    Leetcode,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Codechef, Source::Codeforces, Source::Leetcode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Codechef => "codechef",
            Source::Codeforces => "codeforces",
            Source::Leetcode => "leetcode",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable per-source identifier. CodeChef calls it a code, the others a slug,
/// and the output keeps each source's own key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKey {
    Code(String),
    Slug(String),
}

impl ProblemKey {
    pub fn as_str(&self) -> &str {
        match self {
            ProblemKey::Code(s) | ProblemKey::Slug(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    #[serde(flatten)]
    pub key: ProblemKey,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_successful_submissions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_count: Option<u64>,
    /// Codeforces rating as-is. The inner `None` is written as `null` for unrated
    /// problems; other sources leave the key out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Option<i64>>,
    pub source: Source,
    #[serde(rename = "contestId", default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

/// Per-source statistics carried by a candidate until it gets an id.
#[derive(Debug, Clone, PartialEq)]
pub enum Metrics {
    /// Placeholder numbers derived from the assigned id. Not measured.
    Synthetic,
    Acceptance(f64),
    /// Statistics CodeChef reported itself.
    Submissions {
        acceptance_rate: f64,
        successful: u64,
    },
    Codeforces {
        solved_count: u64,
        points: Option<i64>,
        contest_id: i64,
        index: String,
    },
}

/// A validated record that has not been admitted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier supplied by the remote source, used under `IdPolicy::Remote`.
    pub remote_id: Option<u64>,
    pub key: ProblemKey,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: String,
    pub tags: Vec<String>,
    pub metrics: Metrics,
}

impl Candidate {
    pub fn into_problem(self, id: u64, source: Source) -> Problem {
        let mut tags = self.tags;
        if tags.is_empty() {
            tags.push(SENTINEL_TAG.to_string());
        }

        let mut problem = Problem {
            id,
            key: self.key,
            title: self.title,
            difficulty: self.difficulty,
            url: self.url,
            tags,
            acceptance_rate: None,
            total_successful_submissions: None,
            solved_count: None,
            points: None,
            source,
            contest_id: None,
            index: None,
        };

        match self.metrics {
            Metrics::Synthetic => {
                problem.acceptance_rate = Some(round1((60 + id % 40) as f64));
                problem.total_successful_submissions = Some(10_000 + id * 1_000);
            }
            Metrics::Acceptance(rate) => problem.acceptance_rate = Some(rate),
            Metrics::Submissions {
                acceptance_rate,
                successful,
            } => {
                problem.acceptance_rate = Some(round1(acceptance_rate));
                problem.total_successful_submissions = Some(successful);
            }
            Metrics::Codeforces {
                solved_count,
                points,
                contest_id,
                index,
            } => {
                problem.solved_count = Some(solved_count);
                problem.points = Some(points);
                problem.contest_id = Some(contest_id);
                problem.index = Some(index);
            }
        }
        problem
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_problems: usize,
    pub last_updated: DateTime<Local>,
    /// Set when `acceptance_rate` / `total_successful_submissions` are placeholders.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub synthetic_metrics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub metadata: Metadata,
    pub problems: Vec<Problem>,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(metrics: Metrics) -> Candidate {
        Candidate {
            remote_id: None,
            key: ProblemKey::Code("FCTRL".into()),
            title: "Factorial".into(),
            difficulty: Difficulty::Easy,
            url: "https://www.codechef.com/problems/FCTRL".into(),
            tags: Vec::new(),
            metrics,
        }
    }

    #[test]
    fn synthetic_metrics_follow_id() {
        let p = candidate(Metrics::Synthetic).into_problem(45, Source::Codechef);
        assert_eq!(p.acceptance_rate, Some(65.0));
        assert_eq!(p.total_successful_submissions, Some(55_000));
        assert_eq!(p.solved_count, None);
    }

    #[test]
    fn empty_tags_get_sentinel() {
        let p = candidate(Metrics::Acceptance(51.2)).into_problem(1, Source::Leetcode);
        assert_eq!(p.tags, vec![SENTINEL_TAG.to_string()]);
    }

    #[test]
    fn key_serializes_under_source_name() {
        let p = candidate(Metrics::Synthetic).into_problem(1, Source::Codechef);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["code"], "FCTRL");
        assert!(v.get("slug").is_none());
        assert_eq!(v["source"], "codechef");
        assert_eq!(v["difficulty"], "Easy");
        assert!(v.get("contestId").is_none());
    }

    #[test]
    fn codeforces_fields_are_camel_cased() {
        let mut c = candidate(Metrics::Codeforces {
            solved_count: 1234,
            points: Some(800),
            contest_id: 4,
            index: "A".into(),
        });
        c.key = ProblemKey::Slug("4A".into());
        let v = serde_json::to_value(c.into_problem(3, Source::Codeforces)).unwrap();
        assert_eq!(v["slug"], "4A");
        assert_eq!(v["contestId"], 4);
        assert_eq!(v["index"], "A");
        assert_eq!(v["solved_count"], 1234);
        assert_eq!(v["points"], 800);
    }

    #[test]
    fn unrated_codeforces_problem_writes_null_points() {
        let mut c = candidate(Metrics::Codeforces {
            solved_count: 0,
            points: None,
            contest_id: 2050,
            index: "F".into(),
        });
        c.key = ProblemKey::Slug("2050F".into());
        let v = serde_json::to_value(c.into_problem(1, Source::Codeforces)).unwrap();
        assert!(v.as_object().unwrap().contains_key("points"));
        assert!(v["points"].is_null());

        let other = serde_json::to_value(candidate(Metrics::Synthetic).into_problem(1, Source::Codechef)).unwrap();
        assert!(other.get("points").is_none());
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(50.0), 50.0);
    }
}
