//! Fit evaluation and its nested analysis records.
//!
//! The evaluation payload is deep: a top-level score plus a dozen nested
//! analysis sections. Every nested record and list is container-defaulted so
//! a partial server response still constructs — only `fit_score` is required.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// How strongly a prospect's expertise area matches the offering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertiseMatch {
    pub area: String,
    /// 0-100, advisory.
    pub relevance_score: f64,
    pub description: String,
    pub evidence: Vec<String>,
    pub profile_alignment: String,
    pub company_alignment: String,
    pub score_rationale: String,
}

/// Whether the prospect can actually say yes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionMakerAnalysis {
    pub influence_level: String,
    pub influence_evidence: Vec<String>,
    pub budget_control: String,
    pub budget_evidence: Vec<String>,
    pub decision_areas: Vec<String>,
    pub stakeholder_relationships: Vec<String>,
    pub summary: String,
}

/// A scored alignment axis with its narrative.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentScore {
    /// 0-100, advisory.
    pub score: f64,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyAlignment {
    pub area: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementOpportunity {
    pub opportunity: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPotential {
    pub area: String,
    pub description: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalAlignment {
    pub aspect: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PotentialChallenge {
    pub challenge: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NextStep {
    pub step: String,
    pub rationale: String,
}

/// How to open the conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedApproach {
    pub approach: String,
    pub key_messages: Vec<String>,
    pub timing: String,
}

/// Priority level plus the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Priority {
    pub level: String,
    pub justification: String,
}

/// Full fit evaluation for a prospect against an offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitEvaluation {
    /// 0-100, advisory; the server is not held to the range.
    pub fit_score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub expertise_matches: Vec<ExpertiseMatch>,
    #[serde(default)]
    pub decision_maker_analysis: DecisionMakerAnalysis,
    #[serde(default)]
    pub business_model_fit: AlignmentScore,
    #[serde(default)]
    pub market_synergy: AlignmentScore,
    #[serde(default)]
    pub company_alignment: Vec<CompanyAlignment>,
    #[serde(default)]
    pub engagement_opportunities: Vec<EngagementOpportunity>,
    #[serde(default)]
    pub growth_potential: Vec<GrowthPotential>,
    #[serde(default)]
    pub cultural_alignment: Vec<CulturalAlignment>,
    #[serde(default)]
    pub potential_challenges: Vec<PotentialChallenge>,
    #[serde(default)]
    pub next_steps: Vec<NextStep>,
    #[serde(default)]
    pub recommended_approach: RecommendedApproach,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub competitive_analysis: String,
    #[serde(default)]
    pub long_term_potential: String,
    #[serde(default)]
    pub resource_implications: String,
}

impl FitEvaluation {
    /// Build an evaluation from a loosely-typed mapping. Fails only when
    /// `fit_score` is absent or non-numeric; every nested section defaults
    /// to empty-but-present.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        super::decode(value, "fit evaluation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_only_payload_yields_defaults_everywhere() {
        let eval = FitEvaluation::from_value(json!({"fit_score": 71})).unwrap();
        assert_eq!(eval.fit_score, 71.0);
        assert_eq!(eval.summary, "");
        assert!(eval.key_insights.is_empty());
        assert!(eval.expertise_matches.is_empty());
        assert_eq!(eval.decision_maker_analysis, DecisionMakerAnalysis::default());
        assert_eq!(eval.business_model_fit.score, 0.0);
        assert!(eval.next_steps.is_empty());
        assert_eq!(eval.priority.level, "");
    }

    #[test]
    fn missing_fit_score_is_a_validation_error() {
        let err = FitEvaluation::from_value(json!({"summary": "great fit"})).unwrap_err();
        assert!(matches!(err, ClientError::Validation { .. }));
    }

    #[test]
    fn nested_sections_deserialize_with_partial_fields() {
        let eval = FitEvaluation::from_value(json!({
            "fit_score": 88.5,
            "expertise_matches": [
                {"area": "Cloud migration", "relevance_score": 92, "evidence": ["led AWS move"]},
            ],
            "decision_maker_analysis": {"influence_level": "high"},
            "market_synergy": {"score": 64, "narrative": "adjacent markets"},
            "priority": {"level": "high", "justification": "active budget cycle"},
        }))
        .unwrap();
        assert_eq!(eval.expertise_matches.len(), 1);
        assert_eq!(eval.expertise_matches[0].relevance_score, 92.0);
        assert_eq!(eval.expertise_matches[0].profile_alignment, "");
        assert_eq!(eval.decision_maker_analysis.influence_level, "high");
        assert!(eval.decision_maker_analysis.budget_evidence.is_empty());
        assert_eq!(eval.market_synergy.narrative, "adjacent markets");
        assert_eq!(eval.priority.level, "high");
    }

    #[test]
    fn factory_is_idempotent() {
        let input = json!({"fit_score": 50, "key_insights": ["insight"]});
        let a = FitEvaluation::from_value(input.clone()).unwrap();
        let b = FitEvaluation::from_value(input).unwrap();
        assert_eq!(a, b);
    }
}
