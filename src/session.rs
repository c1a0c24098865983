//! Session probes against the portal host.

use reqwest::header::{CONTENT_TYPE, ORIGIN, REFERER};

use crate::core::client::constants::ACCOUNT_OVERVIEW_PATH;
use crate::core::client::{now_millis, origin_of};
use crate::core::{P4pClient, P4pError};

impl P4pClient {
    /// Probe the portal landing page without following redirects.
    ///
    /// The portal bounces unauthenticated requests to the CAS login page, so
    /// any redirect here means the session is gone.
    ///
    /// # Errors
    ///
    /// [`P4pError::NotLoggedIn`] when the landing page answers with a
    /// redirect instead of being served directly.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn check_logined(&self) -> Result<(), P4pError> {
        let url = self.portal_index_url()?;
        let resp = self
            .probe()
            .get(url)
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await?;

        if resp.status().is_redirection() {
            return Err(P4pError::NotLoggedIn);
        }
        Ok(())
    }

    /// Touch the account overview endpoint to extend the session server-side.
    ///
    /// Mimics the portal's own XHR call. Only the transport outcome matters;
    /// the response body and status are not inspected.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn keep_logined(&self) -> Result<(), P4pError> {
        let mut url = self.base_portal().join(ACCOUNT_OVERVIEW_PATH)?;
        url.query_pairs_mut().append_pair("t", &now_millis().to_string());

        self.http()
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded;charset=UTF-8")
            .header(REFERER, self.portal_index_url()?.as_str())
            .header("Sogou-Hash", "#datareport/account/list")
            .header("Sogou-Request-Type", "XMLHTTPRequest")
            .header(ORIGIN, origin_of(self.base_portal()))
            .send()
            .await?;

        Ok(())
    }
}
