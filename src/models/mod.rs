//! Domain model for insight API responses.
//!
//! Every record here is immutable once constructed and comes with a
//! `from_value` factory over loosely-typed JSON. The factories are total
//! over optional fields: a missing optional scalar resolves to `None`, a
//! missing list to an empty `Vec`, a missing nested record to its default.
//! Only missing required fields raise, as the validation error kind. This
//! pushes all "did the server actually return this" uncertainty into one
//! layer; the rest of the crate treats every field as always present.

mod company;
mod fit;
mod meeting;
mod outreach;
mod profile;

pub use company::Company;
pub use fit::{
    AlignmentScore, CompanyAlignment, CulturalAlignment, DecisionMakerAnalysis,
    EngagementOpportunity, ExpertiseMatch, FitEvaluation, GrowthPotential, NextStep,
    PotentialChallenge, Priority, RecommendedApproach,
};
pub use meeting::MeetingPreparation;
pub use outreach::{OutreachEmail, SenderInfo, DEFAULT_EMAIL_BODY};
pub use profile::Profile;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Deserialize a payload into a domain record, surfacing failures as the
/// validation error kind with the record name in the message.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, ClientError> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::validation(format!("invalid {what} payload: {e}"), None))
}
