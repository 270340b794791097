//! One-time status messages carried across the post/redirect/get cycle in a
//! signed cookie. Set on redirect, read and cleared by the next page render.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS class used by the flash banner in templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

/// Add a flash message to the jar. Returned jar must be included in the
/// response for the cookie to be set.
pub fn set(jar: SignedCookieJar, kind: FlashKind, message: impl Into<String>) -> SignedCookieJar {
    let flash = Flash {
        kind,
        message: message.into(),
    };
    let Ok(value) = serde_json::to_string(&flash) else {
        return jar;
    };
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .build(),
    )
}

/// Read and remove the flash message, if any. The returned jar carries the
/// removal and must be included in the response.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, flash)
}
