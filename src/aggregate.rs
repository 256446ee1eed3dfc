use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};
use itertools::Itertools;
use tracing::debug;

use crate::classify::Difficulty;
use crate::model::{Candidate, Envelope, Metadata, Metrics, Problem, Source};

/// Below this many live records the fallback dataset is merged in.
pub const MIN_LIVE_PROBLEMS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// 1, 2, 3, ... in admission order.
    Sequential,
    /// Reuse the identifier the remote source supplied.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted(u64),
    /// Code/slug or id already present.
    Duplicate,
    /// Difficulty already holds `cap` records.
    CapReached,
    /// `IdPolicy::Remote` but the candidate carried no id.
    MissingId,
}

/// Owns id assignment, dedup and the per-difficulty cap for one source run.
pub struct Aggregator {
    source: Source,
    id_policy: IdPolicy,
    cap: Option<usize>,
    next_id: u64,
    problems: Vec<Problem>,
    keys: HashSet<String>,
    ids: HashSet<u64>,
    per_difficulty: HashMap<Difficulty, usize>,
    live: usize,
    synthetic: bool,
}

impl Aggregator {
    pub fn new(source: Source, id_policy: IdPolicy, cap: Option<usize>) -> Self {
        Aggregator {
            source,
            id_policy,
            cap,
            next_id: 1,
            problems: Vec::new(),
            keys: HashSet::new(),
            ids: HashSet::new(),
            per_difficulty: HashMap::new(),
            live: 0,
            synthetic: false,
        }
    }

    /// Admit a live record.
    pub fn admit(&mut self, candidate: Candidate) -> Admission {
        if let Some(cap) = self.cap {
            if self.count_for(candidate.difficulty) >= cap {
                return Admission::CapReached;
            }
        }
        let admission = self.insert(candidate);
        if let Admission::Accepted(_) = admission {
            self.live += 1;
        }
        admission
    }

    /// Append fallback entries whose code is not taken yet, continuing the id sequence.
    /// The cap does not apply. Returns how many were added.
    pub fn merge_fallback(&mut self, entries: impl IntoIterator<Item = Candidate>) -> usize {
        let mut added = 0;
        for candidate in entries {
            if let Admission::Accepted(_) = self.insert(candidate) {
                added += 1;
            }
        }
        added
    }

    fn insert(&mut self, candidate: Candidate) -> Admission {
        let key = candidate.key.as_str().to_string();
        if self.keys.contains(&key) {
            debug!(source = %self.source, key = %key, "Duplicate code, dropped");
            return Admission::Duplicate;
        }

        let id = match self.id_policy {
            IdPolicy::Sequential => self.next_id,
            IdPolicy::Remote => match candidate.remote_id {
                Some(id) => id,
                None => return Admission::MissingId,
            },
        };
        if self.ids.contains(&id) {
            debug!(source = %self.source, id, "Duplicate id, dropped");
            return Admission::Duplicate;
        }

        *self.per_difficulty.entry(candidate.difficulty).or_default() += 1;
        self.keys.insert(key);
        self.ids.insert(id);
        self.next_id = self.next_id.max(id) + 1;
        self.synthetic |= matches!(candidate.metrics, Metrics::Synthetic);
        self.problems.push(candidate.into_problem(id, self.source));
        Admission::Accepted(id)
    }

    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.per_difficulty.get(&difficulty).copied().unwrap_or(0)
    }

    /// Records admitted through [`Aggregator::admit`].
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Sorted envelope stamped with `now`, or `None` when nothing was collected.
    pub fn finish(self, now: DateTime<Local>) -> Option<Envelope> {
        if self.problems.is_empty() {
            return None;
        }
        let problems: Vec<Problem> = self.problems.into_iter().sorted_by_key(|p| p.id).collect();
        Some(Envelope {
            metadata: Metadata {
                total_problems: problems.len(),
                last_updated: now,
                synthetic_metrics: self.synthetic,
            },
            problems,
        })
    }
}
