//! Meeting preparation brief.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// A meeting preparation brief. Every section is a list of short strings and
/// defaults to empty when the server omits it, so a sparse brief is still a
/// valid brief.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingPreparation {
    pub objectives: Vec<String>,
    pub talking_points: Vec<String>,
    pub questions: Vec<String>,
    pub risk_factors: Vec<String>,
    pub success_metrics: Vec<String>,
    pub next_steps: Vec<String>,
    pub follow_up_items: Vec<String>,
}

impl MeetingPreparation {
    /// Build a brief from a loosely-typed mapping. Total: missing sections
    /// resolve to empty lists.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        super::decode(value, "meeting preparation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_mapping_yields_empty_sections() {
        let prep = MeetingPreparation::from_value(json!({})).unwrap();
        assert!(prep.objectives.is_empty());
        assert!(prep.talking_points.is_empty());
        assert!(prep.follow_up_items.is_empty());
    }

    #[test]
    fn present_sections_are_ordered() {
        let prep = MeetingPreparation::from_value(json!({
            "objectives": ["build rapport", "scope a pilot"],
            "questions": ["what is your current tooling?"],
        }))
        .unwrap();
        assert_eq!(prep.objectives, vec!["build rapport", "scope a pilot"]);
        assert_eq!(prep.questions.len(), 1);
        assert!(prep.next_steps.is_empty());
    }

    #[test]
    fn factory_is_idempotent() {
        let input = json!({"objectives": ["a"], "next_steps": ["b"]});
        let a = MeetingPreparation::from_value(input.clone()).unwrap();
        let b = MeetingPreparation::from_value(input).unwrap();
        assert_eq!(a, b);
    }
}
