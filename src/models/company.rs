//! Researched company record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::extract;

/// A researched company. Scraped payloads are the least regular thing the
/// API returns, so this factory is built on the schema-tolerant extractor
/// instead of a plain derive: list fields accept several key spellings and
/// shapes, and the founded year tolerates numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub website: Option<String>,
    pub social_profile_url: Option<String>,
    pub summary: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub founded_year: Option<i64>,
    pub headquarters: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub clients_partners: Vec<String>,
    #[serde(default)]
    pub culture_notes: Vec<String>,
    #[serde(default)]
    pub recent_updates: Vec<String>,
}

impl Company {
    /// Build a company from a loosely-typed mapping. Fails only when no
    /// recognizable name is present.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        let name = extract::string_at(&value, &["name", "company_name"]).ok_or_else(|| {
            ClientError::validation("invalid company payload: missing required field `name`", None)
        })?;

        Ok(Self {
            name,
            website: extract::string_at(&value, &["website", "url", "company_url"]),
            social_profile_url: extract::string_at(&value, &["social_profile_url", "linkedin_url"]),
            summary: extract::string_at(&value, &["summary", "description", "about"]),
            industry: extract::string_at(&value, &["industry"]),
            size: extract::string_at(&value, &["size", "company_size", "employee_count"]),
            founded_year: extract::int_at(&value, &["founded_year", "founded", "details.founded"]),
            headquarters: extract::string_at(&value, &["headquarters", "location", "hq"]),
            services: extract::string_list_at(&value, &["services", "offerings"]),
            industries: extract::string_list_at(&value, &["industries", "sectors"]),
            awards: extract::string_list_at(&value, &["awards", "recognitions"]),
            clients_partners: extract::string_list_at(&value, &["clients_partners", "clients", "partners"]),
            culture_notes: extract::string_list_at(&value, &["culture_notes", "culture", "values"]),
            recent_updates: extract::string_list_at(&value, &["recent_updates", "news", "updates"]),
        })
    }

    /// Minimal company carrying just a name, for request construction.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: None,
            social_profile_url: None,
            summary: None,
            industry: None,
            size: None,
            founded_year: None,
            headquarters: None,
            services: Vec::new(),
            industries: Vec::new(),
            awards: Vec::new(),
            clients_partners: Vec::new(),
            culture_notes: Vec::new(),
            recent_updates: Vec::new(),
        }
    }
}
