//! Researched person profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// A researched professional profile. Only the full name is guaranteed;
/// everything else depends on what the research run could find.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub background: Option<String>,
    pub past_jobs: Option<String>,
    pub achievements: Option<String>,
    pub contact: Option<String>,
    pub social_profile_url: Option<String>,
}

impl Profile {
    /// Build a profile from a loosely-typed mapping. Fails only when
    /// `full_name` is absent or not a string.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        super::decode(value, "profile")
    }

    /// Minimal profile carrying just a name, for request construction.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            job_title: None,
            company_name: None,
            company_url: None,
            background: None,
            past_jobs: None,
            achievements: None,
            contact: None,
            social_profile_url: None,
        }
    }
}
