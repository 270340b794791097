use std::sync::Arc;

use axum::extract::FromRef;
use axum::Router;
use axum_extra::extract::cookie::Key;

/// Human-readable application name, used in templates and UI.
/// Change this constant to rename the app across all pages.
pub const APP_NAME: &str = "Ortega Web Services";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<store::LeadLog>,
    /// None when SMTP is unconfigured; deliveries are then skipped.
    pub mail: Option<Arc<dyn mail::EmailSender>>,
    pub config: config::Config,
    /// Signing key for the flash cookie jar.
    pub key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// App routes (contact submission). Merged with site routes in lib.rs.
pub fn routes() -> Router<AppState> {
    Router::new().merge(features::contact::routes())
}

pub mod config;
pub mod domain;
pub mod features;
pub mod flash;
pub mod mail;
pub mod store;
