//! Service adapter: one operation per server capability.
//!
//! Each operation builds a wire payload from typed arguments, calls the
//! transport, validates the response envelope, and constructs domain
//! objects. Envelope validation is fail-closed: a response whose `action`
//! tag or `*_data` key does not match expectations raises the generic error
//! kind with status 500 regardless of the transport status, so callers never
//! act on misrouted data.
//!
//! The outreach, evaluation, and meeting operations multiplex over a single
//! strategy endpoint, disambiguated server-side by the `action` field and
//! client-side by the envelope check.

use futures::Stream;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::context::{SearchHistory, SearchKind, SearchRecord, Session};
use crate::error::ClientError;
use crate::event::StreamEvent;
use crate::extract;
use crate::models::{
    Company, FitEvaluation, MeetingPreparation, OutreachEmail, Profile, SenderInfo,
};
use crate::stream::{EventStreamExt, Framing};
use crate::transport::Transport;

const COMPANY_RESEARCH_ENDPOINT: &str = "api/research-company";
const COMPANY_RESEARCH_URL_ENDPOINT: &str = "api/research-company-url";
const PROFILE_RESEARCH_ENDPOINT: &str = "api/research-profile";
const STRATEGY_ENDPOINT: &str = "api/strategy";
const PROFILE_STREAM_ENDPOINT: &str = "api/stream/profile-insights";
const COMPANY_STREAM_ENDPOINT: &str = "api/stream/company-insights";

/// A domain object plus the token accounting and status the server attached
/// to it.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightResponse<T> {
    pub data: T,
    pub total_tokens: u64,
    pub status_code: u16,
}

/// Company research result: the company record plus any employee profile
/// links the scrape collected.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyResearch {
    pub company: Company,
    pub employee_links: Vec<String>,
}

/// Validated envelope contents: the extracted `*_data` payload plus the
/// envelope-level accounting fields.
#[derive(Debug)]
struct Envelope {
    data: Value,
    total_tokens: u64,
    status_code: u16,
}

/// Check the `action` tag and extract the matching `{action}_data` payload.
fn unwrap_envelope(mut response: Value, action: &str) -> Result<Envelope, ClientError> {
    if response.get("action").and_then(Value::as_str) != Some(action) {
        return Err(ClientError::api(
            format!("invalid response envelope: expected action `{action}`"),
            Some(500),
        ));
    }

    let data_key = format!("{action}_data");
    let Some(data) = response.get_mut(&data_key).map(Value::take) else {
        return Err(ClientError::api(
            format!("invalid response envelope: missing `{data_key}`"),
            Some(500),
        ));
    };

    Ok(Envelope {
        data,
        total_tokens: response
            .get("total_tokens")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        status_code: response
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(200),
    })
}

/// Strategy endpoint request body. One endpoint, three logical operations.
#[derive(Debug, Serialize)]
struct StrategyRequest<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<&'a Profile>,
    #[serde(rename = "myCompany", skip_serializing_if = "Option::is_none")]
    my_company: Option<&'a Company>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_company: Option<&'a Company>,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_info: Option<&'a SenderInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proposal_url: Option<&'a str>,
}

impl<'a> StrategyRequest<'a> {
    fn new(action: &'static str, language: &'a str) -> Self {
        Self {
            action,
            profile: None,
            my_company: None,
            target_company: None,
            language,
            sender_info: None,
            proposal_url: None,
        }
    }
}

/// Typed adapter over the insight API. Stateless between calls; the only
/// held resource is the shared transport.
#[derive(Debug, Clone)]
pub struct InsightService {
    transport: Transport,
}

impl InsightService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Research a company by name and industry.
    pub async fn research_company_by_name(
        &self,
        name: &str,
        industry: &str,
        language: &str,
        scrape_employees: bool,
    ) -> Result<InsightResponse<CompanyResearch>, ClientError> {
        let query = [
            ("name", name.to_string()),
            ("industry", industry.to_string()),
            ("language", language.to_string()),
            ("scrape_employees", scrape_employees.to_string()),
        ];
        let response = self.transport.get(COMPANY_RESEARCH_ENDPOINT, &query).await?;
        Self::company_research_response(response)
    }

    /// Research a company from its website URL.
    pub async fn research_company_by_url(
        &self,
        url: &str,
        language: &str,
        scrape_employees: bool,
    ) -> Result<InsightResponse<CompanyResearch>, ClientError> {
        let query = [
            ("url", url.to_string()),
            ("language", language.to_string()),
            ("scrape_employees", scrape_employees.to_string()),
        ];
        let response = self
            .transport
            .get(COMPANY_RESEARCH_URL_ENDPOINT, &query)
            .await?;
        Self::company_research_response(response)
    }

    fn company_research_response(
        response: Value,
    ) -> Result<InsightResponse<CompanyResearch>, ClientError> {
        let envelope = unwrap_envelope(response, "company_research")?;
        let employee_links =
            extract::string_list_at(&envelope.data, &["employee_links", "employees"]);
        let company = Company::from_value(envelope.data)?;
        Ok(InsightResponse {
            data: CompanyResearch {
                company,
                employee_links,
            },
            total_tokens: envelope.total_tokens,
            status_code: envelope.status_code,
        })
    }

    /// Research a person by full name and company.
    pub async fn research_profile(
        &self,
        full_name: &str,
        company_name: &str,
        language: &str,
    ) -> Result<InsightResponse<Profile>, ClientError> {
        let query = [
            ("full_name", full_name.to_string()),
            ("company_name", company_name.to_string()),
            ("language", language.to_string()),
        ];
        let response = self.transport.get(PROFILE_RESEARCH_ENDPOINT, &query).await?;
        let envelope = unwrap_envelope(response, "profile_research")?;
        Ok(InsightResponse {
            data: Profile::from_value(envelope.data)?,
            total_tokens: envelope.total_tokens,
            status_code: envelope.status_code,
        })
    }

    /// Generate an outreach email for a researched profile. Envelope-level
    /// token accounting and status are attached to the returned email.
    pub async fn generate_outreach_email(
        &self,
        profile: &Profile,
        sender_info: Option<&SenderInfo>,
        language: &str,
        proposal_url: Option<&str>,
    ) -> Result<OutreachEmail, ClientError> {
        let request = StrategyRequest {
            profile: Some(profile),
            sender_info,
            proposal_url,
            ..StrategyRequest::new("outreach", language)
        };
        let envelope = self.strategy_call(&request).await?;
        let email = OutreachEmail::from_value(envelope.data)?;
        Ok(OutreachEmail {
            total_tokens: envelope.total_tokens,
            status_code: envelope.status_code,
            ..email
        })
    }

    /// Evaluate how well a prospect fits an offering. At least one of the
    /// context arguments should be supplied; eligibility is decided
    /// server-side and whatever is given is passed through.
    pub async fn evaluate_profile_fit(
        &self,
        profile: Option<&Profile>,
        company: Option<&Company>,
        target_company: Option<&Company>,
        language: &str,
    ) -> Result<InsightResponse<FitEvaluation>, ClientError> {
        let request = StrategyRequest {
            profile,
            my_company: company,
            target_company,
            ..StrategyRequest::new("evaluation", language)
        };
        let envelope = self.strategy_call(&request).await?;
        Ok(InsightResponse {
            data: FitEvaluation::from_value(envelope.data)?,
            total_tokens: envelope.total_tokens,
            status_code: envelope.status_code,
        })
    }

    /// Build a meeting preparation brief for a prospect at a company.
    pub async fn prepare_meeting(
        &self,
        profile: &Profile,
        company: &Company,
        language: &str,
    ) -> Result<InsightResponse<MeetingPreparation>, ClientError> {
        let request = StrategyRequest {
            profile: Some(profile),
            my_company: Some(company),
            ..StrategyRequest::new("meeting", language)
        };
        let envelope = self.strategy_call(&request).await?;
        Ok(InsightResponse {
            data: MeetingPreparation::from_value(envelope.data)?,
            total_tokens: envelope.total_tokens,
            status_code: envelope.status_code,
        })
    }

    async fn strategy_call(&self, request: &StrategyRequest<'_>) -> Result<Envelope, ClientError> {
        debug!(action = request.action, "strategy request");
        let body = serde_json::to_value(request)
            .map_err(|e| ClientError::validation(format!("unserializable request: {e}"), None))?;
        let response = self.transport.post(STRATEGY_ENDPOINT, &body).await?;
        unwrap_envelope(response, request.action)
    }

    /// Stream incremental insight events for a profile. This endpoint frames
    /// events as SSE-style `data:` lines.
    pub async fn stream_profile_insights(
        &self,
        profile: &Profile,
        company_name: &str,
        language: &str,
    ) -> Result<impl Stream<Item = Result<StreamEvent, ClientError>> + Send, ClientError> {
        let body = json!({
            "profile": profile,
            "company": company_name,
            "language": language,
        });
        let response = self.transport.stream(PROFILE_STREAM_ENDPOINT, &body).await?;
        Ok(response.events(Framing::Sse))
    }

    /// Stream incremental insight events for a company. This endpoint frames
    /// events as newline-delimited JSON.
    pub async fn stream_company_insights(
        &self,
        company_name: &str,
        industry: &str,
        language: &str,
    ) -> Result<impl Stream<Item = Result<StreamEvent, ClientError>> + Send, ClientError> {
        let body = json!({
            "company": company_name,
            "industry": industry,
            "language": language,
        });
        let response = self.transport.stream(COMPANY_STREAM_ENDPOINT, &body).await?;
        Ok(response.events(Framing::NdJson))
    }

    /// Record a search against the caller-supplied collaborators: look up
    /// the current user via the session and save a history record. The
    /// service itself holds no session state.
    pub async fn record_search(
        &self,
        session: &dyn Session,
        history: &dyn SearchHistory,
        kind: SearchKind,
        query: &str,
    ) -> Result<(), ClientError> {
        let user = session
            .current_user()
            .await?
            .ok_or_else(|| ClientError::authentication("no authenticated user", None))?;
        history
            .save(SearchRecord {
                user_id: user.id,
                kind,
                query: query.to_string(),
            })
            .await
    }
}
