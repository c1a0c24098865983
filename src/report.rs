//! Report download: stable-order JSON filter, GBK response transcoding.

use reqwest::header::{CONTENT_TYPE, ORIGIN, REFERER};
use serde::Serialize;

use crate::core::client::constants::DOWNLOAD_REPORT_PATH;
use crate::core::client::origin_of;
use crate::core::{P4pClient, P4pError};

/// Filter for a report download, submitted as a single `jsonStr` form field.
///
/// Every field is a string because the portal form posts them verbatim. The
/// serialized field order matches what the portal's own frontend sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReportParam {
    /// Time-range selector, e.g. `"5"` for a custom range.
    pub time_select: String,
    /// Range start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Range end, `YYYY-MM-DD`.
    pub end_date: String,
    pub stat_type: String,
    pub report_type: String,
    pub device_type: String,
}

impl P4pClient {
    /// Download a report and transcode it from GBK to UTF-8.
    ///
    /// The decoded bytes are returned as-is; parsing the report content is up
    /// to the caller.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, param), err))]
    pub async fn download_report(&self, param: &QueryReportParam) -> Result<Vec<u8>, P4pError> {
        let url = self.base_portal().join(DOWNLOAD_REPORT_PATH)?;
        let json = serde_json::to_string(param)?;

        // The portal expects the JSON raw after `jsonStr=`, not
        // percent-encoded the way a regular form field would be.
        let body = format!("jsonStr={json}");

        let resp = self
            .http()
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(REFERER, self.portal_index_url()?.as_str())
            .header("Upgrade-Insecure-Requests", "1")
            .header(ORIGIN, origin_of(self.base_portal()))
            .body(body)
            .send()
            .await?;

        let raw = resp.bytes().await?;
        Ok(decode_gbk(&raw).into_bytes())
    }
}

/// Transcode a GBK payload to UTF-8, substituting unmappable sequences.
fn decode_gbk(raw: &[u8]) -> String {
    let (text, _, _) = encoding_rs::GBK.decode(raw);
    text.into_owned()
}
