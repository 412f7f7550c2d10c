//! End-to-end lifecycle: real controllers driving real HTTP clients against
//! a mocked backend.

use std::sync::Arc;

use leadgate_client::{ApiConfig, ContactClient, SupportClient};
use leadgate_core::DiagnosticLog;
use leadgate_forms::{ContactForm, ContactRequest, SubmissionStatus, SupportForm};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    }
}

#[tokio::test]
async fn contact_form_full_success_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/submit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(ContactClient::new(&config_for(&server)));
    let mut form = ContactForm::new(client, DiagnosticLog::new());
    form.set_name("Ada Lovelace");
    form.set_email("ada@example.com");
    form.set_service("web-development");
    form.set_message("Hello there, we need a site.");

    form.submit().await;

    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.fields(), &ContactRequest::default());
}

#[tokio::test]
async fn contact_form_never_calls_backend_when_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/submit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let client = Arc::new(ContactClient::new(&config_for(&server)));
    let mut form = ContactForm::new(client, DiagnosticLog::new());
    form.set_email("a@b.com");
    form.set_service("web-development");
    form.set_message("Hello there");

    form.submit().await;

    assert_eq!(form.errors().get("name"), Some("This field is required"));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn support_form_surfaces_server_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/support/submit/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "errors": { "subject": ["This field may not be blank."] }
        })))
        .mount(&server)
        .await;

    let diagnostics = DiagnosticLog::new();
    let client = Arc::new(SupportClient::new(&config_for(&server), diagnostics.clone()));
    let mut form = SupportForm::new(client, diagnostics.clone());
    form.set_name("Alan");
    form.set_email("alan@example.com");
    form.set_subject("whitespace the server rejects");
    form.set_message("Builds hang at the test stage.");

    let before = form.fields().clone();
    form.submit().await;

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.fields(), &before);
    assert_eq!(
        form.errors().get("subject"),
        Some("This field may not be blank.")
    );
    assert_eq!(diagnostics.entries()[0].context, "support.submit");
}

#[tokio::test]
async fn contact_form_recovers_after_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/submit/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = Arc::new(ContactClient::new(&config_for(&server)));
    let mut form = ContactForm::new(client, DiagnosticLog::new());
    form.set_name("Ada Lovelace");
    form.set_email("ada@example.com");
    form.set_message("Hello there, we need a site.");

    form.submit().await;
    assert_eq!(form.status(), SubmissionStatus::Error);

    // retry is an explicit user action; the controller allows it
    form.submit().await;
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.message(), Some("Server error. Please try again later."));
}
