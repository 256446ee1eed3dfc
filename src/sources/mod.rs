pub mod codechef;
pub mod codeforces;
pub mod fallback;
pub mod leetcode;

use serde_json::Value;

use crate::aggregate::IdPolicy;
use crate::error::{PipelineError, RecordError};
use crate::extract::Record;
use crate::fetch::Endpoint;
use crate::model::{Candidate, Source};

/// What to do when none of a source's endpoints answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Carry on with zero live records.
    Continue,
    /// Fail the source run without writing anything.
    Abort,
}

/// Everything that differs between sources. The pipeline itself is shared.
pub trait SourceStrategy {
    fn source(&self) -> Source;

    fn endpoints(&self) -> Vec<Endpoint>;

    fn user_agent(&self) -> Option<&'static str> {
        None
    }

    fn on_unreachable(&self) -> FailurePolicy {
        FailurePolicy::Continue
    }

    fn id_policy(&self) -> IdPolicy {
        IdPolicy::Sequential
    }

    /// Most live records accepted per difficulty.
    fn cap(&self) -> Option<usize> {
        None
    }

    /// Raw records in one endpoint's payload. An error here is a top-level shape
    /// failure and aborts the whole source.
    fn records(&self, payload: &Value) -> Result<Vec<Record>, PipelineError>;

    /// Validate and classify one raw record.
    fn candidate(&self, endpoint: &Endpoint, record: &Record) -> Result<Candidate, RecordError>;

    /// Curated records merged in when live data comes up short.
    fn fallback(&self) -> Vec<Candidate> {
        Vec::new()
    }

    fn file_name(&self) -> String {
        format!("{}_problems.json", self.source())
    }
}

pub fn strategy_for(source: Source) -> Box<dyn SourceStrategy> {
    match source {
        Source::Codechef => Box::new(codechef::Codechef),
        Source::Codeforces => Box::new(codeforces::Codeforces),
        Source::Leetcode => Box::new(leetcode::Leetcode),
    }
}
