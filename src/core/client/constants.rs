//! Centralized constants for default endpoints and UA.

use std::time::Duration;

/// Desktop UA the portal's login flow was recorded against.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_3) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/48.0.2564.116 Safari/537.36"
);

/// CAS identity host serving the login form and the captcha.
pub(crate) const DEFAULT_BASE_AUTH: &str = "https://auth.p4p.sogou.com/";

/// Advertiser portal host serving the authenticated application.
pub(crate) const DEFAULT_BASE_PORTAL: &str = "http://xuri.p4p.sogou.com/";

/// Login form, relative to the auth base (GET renders it, POST submits it).
pub(crate) const LOGIN_PATH: &str = "login";

/// Captcha image endpoint, relative to the auth base (timestamp appended).
pub(crate) const VALIDATE_CODE_PATH: &str = "validateCode";

/// Portal landing page; doubles as the CAS `service` target and `Referer`.
pub(crate) const PORTAL_INDEX_PATH: &str = "cpcadindex/init.action";

/// Session keep-alive endpoint, relative to the portal base.
pub(crate) const ACCOUNT_OVERVIEW_PATH: &str = "report/account/overview.action";

/// Report download endpoint, relative to the portal base.
pub(crate) const DOWNLOAD_REPORT_PATH: &str = "report/common/downloadReport.action";

/// Welcome-page service value the portal embeds in its own login `Referer`.
/// The doubled slash is what the live portal sends.
pub(crate) const WELCOME_SERVICE_PATH: &str = "//jsp/welcome.jsp";

/// Every call is bounded by this timeout unless overridden on the builder.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
