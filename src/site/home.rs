use askama::Template;
use axum::{response::IntoResponse, routing::get, Router};
use axum_extra::extract::SignedCookieJar;

use crate::app::{
    flash::{self, Flash},
    AppState, APP_NAME,
};

/// The landing page template, with the contact form and an optional
/// one-time status banner.
#[derive(Template)]
#[template(path = "site/home.html")]
pub struct HomeTemplate {
    pub app_name: &'static str,
    pub flash: Option<Flash>,
}

/// GET / — Render the landing page, consuming any pending flash message.
pub async fn index(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    (
        jar,
        HomeTemplate {
            app_name: APP_NAME,
            flash,
        },
    )
}

/// Routes for the home feature slice.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
