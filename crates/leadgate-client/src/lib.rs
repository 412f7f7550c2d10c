//! Leadgate Client - HTTP transports for the lead-capture flows
//!
//! One client per backend domain (contact, consultation, support), all built
//! on a shared reqwest wrapper that classifies every failure — network,
//! HTTP status, malformed body — into the closed [`leadgate_core::ErrorKind`]
//! taxonomy. Clients implement the submitter ports from `leadgate-forms`, so
//! controllers never see reqwest. A thin third-party news client rides along.
//!
//! The backend base URL comes from the `API_BASE` environment variable with
//! a localhost fallback; see [`ApiConfig`].

#![warn(missing_docs)]

mod api;
pub mod consultation;
pub mod contact;
pub mod news;
pub mod support;

pub use api::{ApiConfig, API_BASE_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use consultation::ConsultationClient;
pub use contact::ContactClient;
pub use news::{NewsArticle, NewsClient, NewsQuery, NewsSource};
pub use support::SupportClient;
