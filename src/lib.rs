//! # leadsight - typed client for a remote insight-generation API
//!
//! A small, pragmatic client library that talks to an insight-generation API
//! (company/profile research, outreach-email generation, fit evaluation,
//! meeting preparation) and normalizes its heterogeneous JSON responses into
//! stable, strongly-typed domain objects.
//!
//! ## Features
//! - Async-first, tokio compatible
//! - Typed error taxonomy: generic API, authentication, rate-limit,
//!   validation, all carrying the original message and status code
//! - Total domain-model factories: optional fields default, nested lists are
//!   always present, only required fields fail construction
//! - Fail-closed envelope validation for the multiplexed strategy endpoint
//! - Two streaming framings (NDJSON and SSE-style `data:` lines) decoded
//!   lazily into one event type
//!
//! ## Example
//! ```no_run
//! use futures::StreamExt;
//! use leadsight::options::TransportConfig;
//! use leadsight::service::InsightService;
//! use leadsight::transport::Transport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TransportConfig::new(
//!         "https://insights.example.com".to_string(),
//!         "api-key",
//!         "provider-key",
//!     );
//!     let service = InsightService::new(Transport::new(config)?);
//!
//!     let research = service
//!         .research_company_by_name("Acme", "Manufacturing", "en", false)
//!         .await?;
//!     println!("{:?}", research.data.company);
//!
//!     let mut events = Box::pin(
//!         service
//!             .stream_company_insights("Acme", "Manufacturing", "en")
//!             .await?,
//!     );
//!     while let Some(event) = events.next().await {
//!         let event = event?;
//!         println!("{event:?}");
//!         if event.is_terminal() {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod error;
pub mod event;
pub mod extract;
pub mod models;
pub mod options;
pub mod service;
pub mod stream;
pub mod transport;

// Re-exports for convenience
pub use error::ClientError;
pub use event::StreamEvent;
pub use models::{
    Company, FitEvaluation, MeetingPreparation, OutreachEmail, Profile, SenderInfo,
};
pub use options::{SecretString, TransportConfig};
pub use service::{CompanyResearch, InsightResponse, InsightService};
pub use stream::Framing;
pub use transport::Transport;
