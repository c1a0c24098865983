//! Host-keyed cookie jar shared by both portal clients.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use cookie::Cookie;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use url::Url;

/// A cookie jar that keeps exactly one cookie set per host.
///
/// The portal re-issues the full session cookie set on login, so every
/// `Set-Cookie` batch replaces whatever was stored for that host before.
/// Standard domain/path/expiry scoping is deliberately not applied: the only
/// key is the request URL's host (with port, when present).
#[derive(Debug, Default)]
pub struct HostJar {
    store: RwLock<HashMap<String, Vec<Cookie<'static>>>>,
}

impl HostJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored cookie set for `host`.
    pub fn insert(&self, host: impl Into<String>, cookies: Vec<Cookie<'static>>) {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(host.into(), cookies);
    }

    /// The cookie set currently stored for `host`, empty if none was ever set.
    pub fn cookies_for(&self, host: &str) -> Vec<Cookie<'static>> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(host)
            .cloned()
            .unwrap_or_default()
    }
}

/// Key a URL the same way on store and lookup: host, plus port when present.
fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

impl CookieStore for HostJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let Some(key) = host_key(url) else { return };
        let cookies: Vec<Cookie<'static>> = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| Cookie::parse(value.to_owned()).ok())
            .collect();
        self.insert(key, cookies);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let key = host_key(url)?;
        let header = self
            .cookies_for(&key)
            .iter()
            .map(|c| format!("{}={}", c.name(), c.value()))
            .collect::<Vec<_>>()
            .join("; ");
        if header.is_empty() {
            return None;
        }
        HeaderValue::from_str(&header).ok()
    }
}
