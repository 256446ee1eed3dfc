use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::aggregate::{Admission, Aggregator, MIN_LIVE_PROBLEMS};
use crate::error::{PipelineError, RecordError};
use crate::fetch::{fetch_all, Fetch};
use crate::model::Source;
use crate::sources::{FailurePolicy, SourceStrategy};
use crate::writer;

/// What one source run did.
#[derive(Debug)]
pub struct RunReport {
    pub source: Source,
    pub endpoints_failed: usize,
    pub live: usize,
    pub fallback: usize,
    pub rejected: usize,
    pub total: usize,
    pub written: Option<PathBuf>,
}

impl RunReport {
    pub fn print(&self) {
        let name = self.source;
        if self.endpoints_failed > 0 {
            println!("{name}: {} endpoint(s) unreachable", self.endpoints_failed);
        }
        match self.written {
            Some(ref path) => println!(
                "{name}: saved {} problems ({} live, {} fallback, {} rejected) to {}",
                self.total,
                self.live,
                self.fallback,
                self.rejected,
                path.display()
            ),
            None => println!("{name}: no problems produced, nothing written"),
        }
    }
}

/// fetch → extract → classify → aggregate → write, for one source.
pub fn run(
    strategy: &dyn SourceStrategy,
    fetcher: &dyn Fetch,
    output_dir: &Path,
) -> Result<RunReport, PipelineError> {
    let source = strategy.source();
    let endpoints = strategy.endpoints();
    let outcome = fetch_all(fetcher, &endpoints);
    let mut report = RunReport {
        source,
        endpoints_failed: outcome.failures,
        live: 0,
        fallback: 0,
        rejected: 0,
        total: 0,
        written: None,
    };
    if outcome.payloads.is_empty() && !endpoints.is_empty() {
        match strategy.on_unreachable() {
            FailurePolicy::Abort => return Err(PipelineError::Unreachable { site: source }),
            FailurePolicy::Continue => {
                warn!(source = %source, "No endpoint reachable, continuing without live data")
            }
        }
    }

    let mut aggregator = Aggregator::new(source, strategy.id_policy(), strategy.cap());

    for (endpoint, payload) in &outcome.payloads {
        let records = strategy.records(payload)?;
        info!(source = %source, label = %endpoint.label, found = records.len(), "Located records");

        for record in &records {
            let candidate = match strategy.candidate(endpoint, record) {
                Ok(c) => c,
                Err(e) => {
                    log_rejection(source, &endpoint.url, &e);
                    report.rejected += 1;
                    continue;
                }
            };

            match aggregator.admit(candidate) {
                Admission::Accepted(_) => {}
                Admission::Duplicate => report.rejected += 1,
                Admission::MissingId => {
                    warn!(source = %source, url = %endpoint.url, "Skipping record without a source id");
                    report.rejected += 1;
                }
                Admission::CapReached => {
                    info!(source = %source, label = %endpoint.label, "Category cap reached");
                    break;
                }
            }
        }
    }

    report.live = aggregator.live_count();
    if report.live < MIN_LIVE_PROBLEMS {
        let fallback = strategy.fallback();
        if !fallback.is_empty() {
            info!(source = %source, live = report.live, "Too few live problems, adding fallback problems");
            report.fallback = aggregator.merge_fallback(fallback);
        }
    }

    let Some(envelope) = aggregator.finish(Local::now()) else {
        warn!(source = %source, "No problems were found, skipping write");
        return Ok(report);
    };

    let path = output_dir.join(strategy.file_name());
    writer::write_envelope(&path, &envelope)?;
    report.total = envelope.metadata.total_problems;
    report.written = Some(path);
    Ok(report)
}

fn log_rejection(source: Source, url: &str, error: &RecordError) {
    match error {
        RecordError::TitleTooShort(_) | RecordError::TitleIsCode(_) => {
            debug!(source = %source, url, error = %error, "Record rejected")
        }
        RecordError::Missing(_) | RecordError::UnknownLevel(_) => {
            warn!(source = %source, url, error = %error, "Skipping record")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::IdPolicy;
    use crate::fetch::testing::CannedFetcher;
    use crate::model::Envelope;
    use crate::sources::{codechef, codeforces, fallback, leetcode};
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use tempfile::TempDir;

    const CODECHEF_EASY: &str = "https://www.codechef.com/api/list/problems/easy";
    const CODECHEF_HARD: &str = "https://www.codechef.com/api/list/problems/hard";
    const CODEFORCES: &str = "https://codeforces.com/api/problemset.problems";
    const LEETCODE: &str = "https://leetcode.com/api/problems/all/";

    fn fixture(name: &str) -> Value {
        let text = std::fs::read_to_string(format!("tests/fixtures/{name}.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn read(path: &Path) -> Envelope {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn assert_well_formed(env: &Envelope) {
        assert_eq!(env.metadata.total_problems, env.problems.len());
        let ids: Vec<_> = env.problems.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted, "ids must be ascending without repeats");
        let keys: HashSet<_> = env.problems.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys.len(), env.problems.len(), "codes must be unique");
        assert!(env.problems.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn codechef_unreachable_writes_full_fallback() {
        let dir = TempDir::new().unwrap();
        let report = run(&codechef::Codechef, &CannedFetcher::default(), dir.path()).unwrap();
        assert_eq!(report.endpoints_failed, 4);
        assert_eq!(report.live, 0);
        assert_eq!(report.fallback, fallback::CODECHEF.len());

        let env = read(&dir.path().join("codechef_problems.json"));
        assert_well_formed(&env);
        assert!(env.metadata.synthetic_metrics);
        assert_eq!(env.problems.len(), fallback::CODECHEF.len());
        for (i, (problem, (code, title))) in env.problems.iter().zip(fallback::CODECHEF).enumerate() {
            assert_eq!(problem.id, i as u64 + 1);
            assert_eq!(problem.key.as_str(), *code);
            assert_eq!(problem.title, *title);
        }
        let labels: Vec<_> = env.problems.iter().take(4).map(|p| p.difficulty.as_str()).collect();
        assert_eq!(labels, vec!["Beginner", "Easy", "Medium", "Hard"]);
        assert_eq!(env.problems[0].acceptance_rate, Some(61.0));
    }

    #[test]
    fn codechef_single_live_record_plus_fallback() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(
            CODECHEF_EASY,
            json!({ "problems": [{ "code": "abc1", "name": "Array Sorting" }] }),
        );
        let report = run(&codechef::Codechef, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 1);

        let env = read(&dir.path().join("codechef_problems.json"));
        assert_well_formed(&env);
        let live: Vec<_> = env
            .problems
            .iter()
            .filter(|p| p.key.as_str() == "ABC1")
            .collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, 1);
        assert_eq!(live[0].difficulty.as_str(), "Easy");
        assert!(live[0].tags.contains(&"sorting".to_string()));
        assert!(live[0].tags.contains(&"arrays".to_string()));
        assert_eq!(env.problems[1].key.as_str(), "HELLO");
        assert_eq!(env.problems[1].id, 2);
    }

    #[test]
    fn codechef_fallback_does_not_duplicate_live_codes() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(
            CODECHEF_EASY,
            json!([
                { "code": "fctrl", "name": "Factorial Live" },
                { "code": "XY", "name": "AB" },
                { "code": "tsort", "name": "TSORT" }
            ]),
        );
        let report = run(&codechef::Codechef, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 1);
        assert_eq!(report.rejected, 2);

        let env = read(&dir.path().join("codechef_problems.json"));
        assert_well_formed(&env);
        let fctrl: Vec<_> = env.problems.iter().filter(|p| p.key.as_str() == "FCTRL").collect();
        assert_eq!(fctrl.len(), 1);
        assert_eq!(fctrl[0].title, "Factorial Live");
        assert!(env.problems.iter().all(|p| p.title != "AB" && p.key.as_str() != "XY"));
        assert_eq!(env.problems.len(), fallback::CODECHEF.len());
    }

    #[test]
    fn codechef_keyed_payload_ids_follow_payload_order() {
        let dir = TempDir::new().unwrap();
        let payload: Value = serde_json::from_str(
            r#"{"ZETA": {"name": "Zeta Walk"}, "ALPHA": {"name": "Alpha Walk"}}"#,
        )
        .unwrap();
        let fetcher = CannedFetcher::default().with(CODECHEF_EASY, payload);
        let report = run(&codechef::Codechef, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 2);

        let env = read(&dir.path().join("codechef_problems.json"));
        let first: Vec<_> = env
            .problems
            .iter()
            .take(2)
            .map(|p| (p.id, p.key.as_str()))
            .collect();
        assert_eq!(first, vec![(1, "ZETA"), (2, "ALPHA")]);
    }

    #[test]
    fn codechef_cap_limits_each_category() {
        let dir = TempDir::new().unwrap();
        let easy: Vec<_> = (0..70)
            .map(|i| json!({ "code": format!("E{i:03}"), "name": format!("Easy Problem {i}") }))
            .collect();
        let hard: Vec<_> = (0..10)
            .map(|i| json!({ "code": format!("H{i:03}"), "name": format!("Hard Problem {i}") }))
            .collect();
        let fetcher = CannedFetcher::default()
            .with(CODECHEF_EASY, Value::Array(easy))
            .with(CODECHEF_HARD, json!({ "list": hard }));

        let report = run(&codechef::Codechef, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, codechef::CATEGORY_CAP + 10);
        assert_eq!(report.fallback, 0);

        let env = read(&dir.path().join("codechef_problems.json"));
        assert_well_formed(&env);
        let easy_count = env.problems.iter().filter(|p| p.difficulty.as_str() == "Easy").count();
        assert_eq!(easy_count, codechef::CATEGORY_CAP);
        assert_eq!(env.problems.last().unwrap().id, 60);
    }

    #[test]
    fn codeforces_end_to_end() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(CODEFORCES, fixture("codeforces"));
        let report = run(&codeforces::Codeforces, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 4);
        assert_eq!(report.rejected, 2);

        let env = read(&dir.path().join("codeforces_problems.json"));
        assert_well_formed(&env);
        assert!(!env.metadata.synthetic_metrics);
        let ids: Vec<_> = env.problems.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(env.problems[1].key.as_str(), "1B");
        assert_eq!(env.problems[1].difficulty.as_str(), "Lower-Mid");
        assert_eq!(env.problems[1].solved_count, Some(30_000));
    }

    #[test]
    fn codeforces_bad_status_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default()
            .with(CODEFORCES, json!({ "status": "FAILED", "comment": "limit" }));
        let err = run(&codeforces::Codeforces, &fetcher, dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Payload { .. }));
        assert!(!dir.path().join("codeforces_problems.json").exists());
    }

    #[test]
    fn codeforces_unreachable_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = run(&codeforces::Codeforces, &CannedFetcher::default(), dir.path()).unwrap();
        assert!(report.written.is_none());
        assert!(!dir.path().join("codeforces_problems.json").exists());
    }

    #[test]
    fn leetcode_end_to_end() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(LEETCODE, fixture("leetcode"));
        let report = run(&leetcode::Leetcode, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 3);

        let env = read(&dir.path().join("leetcode_problems.json"));
        assert_well_formed(&env);
        let ids: Vec<_> = env.problems.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(env.problems.iter().all(|p| p.id != 9999));
        assert_eq!(env.problems[1].acceptance_rate, Some(0.0));
        assert_eq!(env.problems[2].acceptance_rate, Some(33.3));
        assert_eq!(env.problems[0].tags, vec!["implementation"]);
    }

    #[test]
    fn leetcode_unreachable_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run(&leetcode::Leetcode, &CannedFetcher::default(), dir.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Unreachable { site: Source::Leetcode }));
        assert!(!dir.path().join("leetcode_problems.json").exists());
    }

    #[test]
    fn leetcode_empty_payload_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(LEETCODE, json!({ "stat_status_pairs": [] }));
        let report = run(&leetcode::Leetcode, &fetcher, dir.path()).unwrap();
        assert_eq!(report.total, 0);
        assert!(!dir.path().join("leetcode_problems.json").exists());
    }

    /// LeetCode records with their ids stripped, to exercise the missing-id path.
    struct IdlessLeetcode;

    impl SourceStrategy for IdlessLeetcode {
        fn source(&self) -> Source {
            Source::Leetcode
        }

        fn endpoints(&self) -> Vec<crate::fetch::Endpoint> {
            leetcode::Leetcode.endpoints()
        }

        fn id_policy(&self) -> IdPolicy {
            IdPolicy::Remote
        }

        fn records(&self, payload: &Value) -> Result<Vec<crate::extract::Record>, PipelineError> {
            leetcode::Leetcode.records(payload)
        }

        fn candidate(
            &self,
            endpoint: &crate::fetch::Endpoint,
            record: &crate::extract::Record,
        ) -> Result<crate::model::Candidate, RecordError> {
            let mut candidate = leetcode::Leetcode.candidate(endpoint, record)?;
            candidate.remote_id = None;
            Ok(candidate)
        }
    }

    #[test]
    fn records_without_source_id_are_rejected() {
        let dir = TempDir::new().unwrap();
        let fetcher = CannedFetcher::default().with(LEETCODE, fixture("leetcode"));
        let report = run(&IdlessLeetcode, &fetcher, dir.path()).unwrap();
        assert_eq!(report.live, 0);
        assert_eq!(report.rejected, 5);
        assert!(report.written.is_none());
    }

    #[test]
    fn previous_output_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leetcode_problems.json");
        std::fs::write(&path, "{\"stale\": true}").unwrap();

        let fetcher = CannedFetcher::default().with(LEETCODE, fixture("leetcode"));
        run(&leetcode::Leetcode, &fetcher, dir.path()).unwrap();
        assert_eq!(read(&path).problems.len(), 3);
    }
}
