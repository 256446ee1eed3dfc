use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::extract::value_as_i64;
use crate::model::SENTINEL_TAG;

/// Every difficulty label any source can produce. Each source only uses its own subset:
/// CodeChef `Beginner..Hard` by category, Codeforces the seven rating bands,
/// LeetCode `Easy`/`Medium`/`Hard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    #[serde(rename = "Lower-Mid")]
    LowerMid,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    #[serde(rename = "Upper-Mid")]
    UpperMid,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::LowerMid => "Lower-Mid",
            Difficulty::MidLevel => "Mid-Level",
            Difficulty::UpperMid => "Upper-Mid",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }

    /// Codeforces rating band. Upper bounds are inclusive.
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            r if r <= 1000 => Difficulty::Beginner,
            r if r <= 1300 => Difficulty::Easy,
            r if r <= 1600 => Difficulty::LowerMid,
            r if r <= 1900 => Difficulty::MidLevel,
            r if r <= 2200 => Difficulty::UpperMid,
            r if r <= 2500 => Difficulty::Hard,
            _ => Difficulty::VeryHard,
        }
    }

    /// Like [`Difficulty::from_rating`] for a raw payload value; missing or
    /// non-integer ratings land in `Mid-Level`.
    pub fn from_rating_value(rating: Option<&Value>) -> Self {
        rating
            .and_then(value_as_i64)
            .map(Difficulty::from_rating)
            .unwrap_or(Difficulty::MidLevel)
    }

    /// LeetCode level: 1, 2, 3 map positionally to Easy, Medium, Hard.
    pub fn from_level(level: i64) -> Result<Self, RecordError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(RecordError::UnknownLevel(other)),
        }
    }
}

/// Keyword groups scanned by [`infer_tags`], in output order.
const TAG_RULES: &[(&[&str], &str)] = &[
    (&["sort", "order"], "sorting"),
    (&["array", "list"], "arrays"),
    (&["string", "text"], "strings"),
    (&["tree", "graph"], "graph theory"),
    (&["number", "digit", "math"], "mathematics"),
    (&["search", "find"], "searching"),
    (&["dynamic", "dp"], "dynamic programming"),
    (&["greedy"], "greedy"),
];

/// Guess topical tags from a problem title. Every matching group contributes its
/// tag; a title matching nothing gets the sentinel tag alone.
pub fn infer_tags(title: &str) -> Vec<String> {
    let lower = title.to_lowercase();
    let tags: Vec<String> = TAG_RULES
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, tag)| tag.to_string())
        .collect();

    if tags.is_empty() {
        vec![SENTINEL_TAG.to_string()]
    } else {
        tags
    }
}
