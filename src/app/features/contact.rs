use axum::{
    extract::State,
    response::Redirect,
    routing::post,
    Form, Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;

use crate::app::{
    domain::Lead,
    flash::{self, FlashKind},
    mail::{self, Delivery, EmailMessage},
    AppState,
};

/// Contact form data from HTTP request. Every field is optional at the
/// transport level; presence rules are enforced by `Lead::new`.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub message: String,
}

/// Notification subject: lead's business name, falling back to their name.
fn subject_for(lead: &Lead) -> String {
    let who = if lead.business.is_empty() {
        &lead.name
    } else {
        &lead.business
    };
    format!("[Website Lead] {}", who)
}

fn body_for(lead: &Lead) -> String {
    let received = lead
        .timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| lead.timestamp.to_string());
    format!(
        "New lead received:\n\n\
         Name: {}\n\
         Business: {}\n\
         Contact: {}\n\n\
         Message:\n{}\n\n\
         Received: {}",
        lead.name, lead.business, lead.contact, lead.message, received
    )
}

/// POST /contact — Validate, persist, notify, redirect with a flash status.
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ContactForm>,
) -> (SignedCookieJar, Redirect) {
    let redirect = Redirect::to("/#contact");

    // Validate into the domain record
    let lead = match Lead::new(&form.name, &form.business, &form.contact, &form.message) {
        Ok(lead) => lead,
        Err(e) => {
            let message = e
                .message
                .unwrap_or_else(|| "Please check the form and try again.".into())
                .to_string();
            return (flash::set(jar, FlashKind::Error, message), redirect);
        }
    };

    // Persist before attempting any notification
    if let Err(e) = state.leads.append(&lead) {
        tracing::error!(%e, "failed to save lead");
        return (
            flash::set(
                jar,
                FlashKind::Error,
                "Sorry, we could not save your message. Please try again later.",
            ),
            redirect,
        );
    }

    // Best effort: a failed or skipped notification is still a success for
    // the visitor, the lead is already on disk.
    let notification = EmailMessage::new(
        state.config.notify_email.clone(),
        subject_for(&lead),
        body_for(&lead),
        state.config.from_email.clone(),
    );
    let jar = match mail::deliver(state.mail.as_ref(), &notification).await {
        Delivery::Sent => flash::set(
            jar,
            FlashKind::Success,
            "Thanks! Your message was sent. We'll be in touch.",
        ),
        Delivery::Skipped => flash::set(
            jar,
            FlashKind::Success,
            "Thanks! Your message was recorded. We'll be in touch.",
        ),
        Delivery::Failed(e) => {
            tracing::error!(%e, "lead notification failed");
            flash::set(
                jar,
                FlashKind::Success,
                "Thanks! Your message was recorded. We'll be in touch.",
            )
        }
    };

    (jar, redirect)
}

/// Contact routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit))
}
