//! Collaborator interfaces the surrounding application provides.
//!
//! The core stays stateless between calls: instead of holding global session
//! or persistence state, callers pass implementations of these traits into
//! the service where needed. Only the interfaces are specified here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// What a saved search was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Profile,
    Company,
}

/// One saved search, keyed by the user who ran it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub user_id: String,
    pub kind: SearchKind,
    pub query: String,
}

/// The currently authenticated user, as the session layer knows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub email: Option<String>,
}

/// Persistence collaborator for profile and company search history.
#[async_trait]
pub trait SearchHistory: Send + Sync {
    async fn save(&self, record: SearchRecord) -> Result<(), ClientError>;

    /// Most recent searches for a user, newest first.
    async fn get_recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, ClientError>;
}

/// Session collaborator exposing the current authenticated user, if any.
#[async_trait]
pub trait Session: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserRef>, ClientError>;
}
