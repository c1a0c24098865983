//! CAS login flow: scraped form tokens, captcha bytes, credential submission.

mod scrape;

use reqwest::header::{ORIGIN, REFERER};
use url::Url;

use crate::core::client::constants::{LOGIN_PATH, VALIDATE_CODE_PATH, WELCOME_SERVICE_PATH};
use crate::core::client::{now_millis, origin_of};
use crate::core::{P4pClient, P4pError};

/// Hidden anti-forgery tokens scraped from the CAS login form.
///
/// Single-use: fetch a fresh pair immediately before each login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginParams {
    pub lt: String,
    pub execution: String,
}

impl P4pClient {
    /// Fetch the CAS login page and scrape the hidden `lt` and `execution`
    /// tokens out of the form.
    ///
    /// # Errors
    ///
    /// [`P4pError::BodyNotMatched`] when either field is absent from the
    /// response, which usually means the provider changed its login markup or
    /// served an error page.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_login_params(&self) -> Result<LoginParams, P4pError> {
        let service = self.portal_index_url()?;
        let mut url = self.base_auth().join(LOGIN_PATH)?;
        url.query_pairs_mut()
            .append_pair("service", service.as_str())
            .append_pair("nonce", &now_millis().to_string());

        let resp = self
            .http()
            .get(url)
            .header("Upgrade-Insecure-Requests", "1")
            .header(REFERER, service.as_str())
            .send()
            .await?;
        let body = resp.text().await?;

        let lt = scrape::lt(&body).ok_or(P4pError::BodyNotMatched("lt"))?;
        let execution = scrape::execution(&body).ok_or(P4pError::BodyNotMatched("execution"))?;

        Ok(LoginParams {
            lt: lt.to_owned(),
            execution: execution.to_owned(),
        })
    }

    /// Submit credentials, the scraped tokens, and the captcha solution.
    ///
    /// The response's `Set-Cookie` headers populate the shared jar, for the
    /// identity host and, through the CAS redirect chain, the portal host.
    ///
    /// A rejected login is not detectable here: the provider answers a wrong
    /// password by re-rendering the login form with a 200, and this method
    /// does not inspect the body. Call
    /// [`check_logined`](P4pClient::check_logined) afterwards to find out
    /// whether a session was actually established.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, params, password, captcha), err)
    )]
    pub async fn login(
        &self,
        params: &LoginParams,
        username: &str,
        password: &str,
        captcha: &str,
    ) -> Result<(), P4pError> {
        let mut url = self.base_auth().join(LOGIN_PATH)?;
        url.query_pairs_mut()
            .append_pair("service", portal_root(self.base_portal()).as_str());

        let form = [
            ("lt", params.lt.as_str()),
            ("execution", params.execution.as_str()),
            ("_eventId", "submit"),
            ("username", username),
            ("password", password),
            ("validateCode", captcha),
        ];

        self.http()
            .post(url)
            .header("Upgrade-Insecure-Requests", "1")
            .header(ORIGIN, origin_of(self.base_auth()))
            .header(REFERER, self.login_referer()?.as_str())
            .form(&form)
            .send()
            .await?;

        Ok(())
    }

    /// Fetch the current captcha image as raw bytes.
    ///
    /// The caller renders it for the operator; solving it is out of scope.
    /// The body is returned untouched, without content-type validation.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_captcha(&self) -> Result<Vec<u8>, P4pError> {
        let ts = now_millis();
        let mut url = self.base_auth().join(&format!("{VALIDATE_CODE_PATH}/{ts}"))?;
        url.query_pairs_mut()
            .append_pair("code", "checkcode")
            .append_pair("nonce", &ts.to_string());

        let resp = self.http().get(url).send().await?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// The `Referer` the portal's own login form submits with: the login URL
    /// pointing at the welcome page, with a fresh nonce.
    fn login_referer(&self) -> Result<Url, P4pError> {
        let service = format!("{}{}", portal_root(self.base_portal()), WELCOME_SERVICE_PATH);
        let mut url = self.base_auth().join(LOGIN_PATH)?;
        url.query_pairs_mut()
            .append_pair("service", &service)
            .append_pair("nonce", &now_millis().to_string());
        Ok(url)
    }
}

/// Portal base without the trailing slash, the exact `service` string the
/// live login form carries.
fn portal_root(base: &Url) -> String {
    base.as_str().trim_end_matches('/').to_string()
}
