//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults); the portal
//! operations live in the `auth`, `session`, and `report` modules.

pub(crate) mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, redirect};
use url::Url;

use crate::core::cookies::HostJar;
use crate::core::error::P4pError;
use constants::{DEFAULT_BASE_AUTH, DEFAULT_BASE_PORTAL, DEFAULT_TIMEOUT, USER_AGENT};

/// Client for the Sogou P4P advertiser portal.
///
/// Holds two underlying HTTP clients sharing one [`HostJar`]: the main client
/// follows redirects (the CAS login flow depends on that), while the probe
/// client refuses them so [`check_logined`](P4pClient::check_logined) can
/// treat any redirect as a dead session.
#[derive(Debug, Clone)]
pub struct P4pClient {
    http: Client,
    probe: Client,
    jar: Arc<HostJar>,
    base_auth: Url,
    base_portal: Url,
}

impl Default for P4pClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl P4pClient {
    /// Create a new builder.
    pub fn builder() -> P4pClientBuilder {
        P4pClientBuilder::default()
    }

    /* -------- internal getters used by the operation modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn probe(&self) -> &Client {
        &self.probe
    }
    pub(crate) fn base_auth(&self) -> &Url {
        &self.base_auth
    }
    pub(crate) fn base_portal(&self) -> &Url {
        &self.base_portal
    }

    /// The cookie jar shared by both underlying clients.
    pub fn jar(&self) -> &HostJar {
        &self.jar
    }

    /// Portal landing page: the CAS `service` target, the login-check probe
    /// URL, and the `Referer` most portal endpoints expect.
    pub(crate) fn portal_index_url(&self) -> Result<Url, P4pError> {
        Ok(self.base_portal.join(constants::PORTAL_INDEX_PATH)?)
    }
}

/// Milliseconds since the epoch, used as a cache-busting nonce.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `scheme://host[:port]` of a URL, for `Origin` headers.
pub(crate) fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct P4pClientBuilder {
    user_agent: Option<String>,
    base_auth: Option<Url>,
    base_portal: Option<Url>,
    timeout: Option<Duration>,
    jar: Option<Arc<HostJar>>,
}

impl P4pClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the CAS identity base (e.g., `https://auth.p4p.sogou.com/`).
    pub fn base_auth(mut self, url: Url) -> Self {
        self.base_auth = Some(url);
        self
    }

    /// Override the portal base (e.g., `http://xuri.p4p.sogou.com/`).
    pub fn base_portal(mut self, url: Url) -> Self {
        self.base_portal = Some(url);
        self
    }

    /// Set the per-request timeout. Default: ten seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Provide a pre-populated cookie store instead of starting empty.
    pub fn cookie_jar(mut self, jar: Arc<HostJar>) -> Self {
        self.jar = Some(jar);
        self
    }

    pub fn build(self) -> Result<P4pClient, P4pError> {
        let base_auth = self.base_auth.unwrap_or(Url::parse(DEFAULT_BASE_AUTH)?);
        let base_portal = self.base_portal.unwrap_or(Url::parse(DEFAULT_BASE_PORTAL)?);

        let jar = self.jar.unwrap_or_else(|| Arc::new(HostJar::new()));
        let ua = self.user_agent.as_deref().unwrap_or(USER_AGENT);
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http = http_client(ua, timeout, jar.clone(), redirect::Policy::default())?;
        let probe = http_client(ua, timeout, jar.clone(), redirect::Policy::none())?;

        Ok(P4pClient {
            http,
            probe,
            jar,
            base_auth,
            base_portal,
        })
    }
}

/// Build one underlying client. The redirect policy is the only thing that
/// distinguishes the main client from the login-check probe.
fn http_client(
    user_agent: &str,
    timeout: Duration,
    jar: Arc<HostJar>,
    redirect: redirect::Policy,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .cookie_provider(jar)
        .timeout(timeout)
        .redirect(redirect)
        .build()
}
