#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use leadsite::app::{config::Config, mail, store::LeadLog, AppState};
use leadsite::create_router;
use tower::ServiceExt;

/// Path of the lead log inside a test scratch directory.
pub fn csv_path(dir: &Path) -> PathBuf {
    dir.join("messages.csv")
}

/// State writing to a scratch directory, with the given mail adapter
/// (None models unconfigured SMTP).
pub fn test_state(dir: &Path, mailer: Option<Arc<dyn mail::EmailSender>>) -> AppState {
    let config = Config::for_tests();
    AppState {
        key: config.signing_key(),
        leads: Arc::new(LeadLog::new(csv_path(dir))),
        mail: mailer,
        config,
    }
}

pub fn test_router(dir: &Path, mailer: Option<Arc<dyn mail::EmailSender>>) -> axum::Router {
    create_router(test_state(dir, mailer))
}

/// Mail adapter that records every message instead of sending.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<mail::EmailMessage>>,
}

#[async_trait]
impl mail::EmailSender for RecordingMailer {
    async fn send(&self, message: &mail::EmailMessage) -> Result<(), mail::EmailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Mail adapter that fails every send, like an unreachable SMTP host.
pub struct FailingMailer;

#[async_trait]
impl mail::EmailSender for FailingMailer {
    async fn send(&self, _message: &mail::EmailMessage) -> Result<(), mail::EmailError> {
        Err(mail::EmailError::Smtp("connection refused".to_string()))
    }
}

pub fn contact_form_body(name: &str, business: &str, contact: &str, message: &str) -> String {
    format!(
        "name={}&business={}&contact={}&message={}",
        urlencoding::encode(name),
        urlencoding::encode(business),
        urlencoding::encode(contact),
        urlencoding::encode(message)
    )
}

/// POST the contact form and return the response.
pub async fn post_contact(app: &axum::Router, body: String) -> http::Response<axum::body::Body> {
    let request = http::Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Extract the flash cookie pair from a redirect's Set-Cookie header.
pub fn flash_cookie(response: &http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get("set-cookie")
        .expect("expected a Set-Cookie header carrying the flash")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// GET / with the given Cookie header, returning the rendered body.
pub async fn home_body_with_cookie(app: &axum::Router, cookie: &str) -> String {
    use http_body_util::BodyExt;

    let request = http::Request::builder()
        .method("GET")
        .uri("/")
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read all data rows back from the lead log.
pub fn read_leads(dir: &Path) -> Vec<leadsite::app::domain::Lead> {
    let mut reader = csv::Reader::from_path(csv_path(dir)).unwrap();
    reader.deserialize().collect::<Result<_, _>>().unwrap()
}
