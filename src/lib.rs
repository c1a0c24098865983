//! sogou-p4p-rs: client for the Sogou P4P advertising portal.
//!
//! Authenticates through the portal's CAS-style identity host (hidden form
//! tokens scraped from the login page, credentials plus an operator-solved
//! captcha), keeps the session cookies in a host-keyed jar, and issues the
//! authenticated calls the portal offers: login check, keep-alive, and a
//! GBK-encoded report download transcoded to UTF-8.
//!
//! ## Example
//!
//! ```no_run
//! use sogou_p4p::{P4pClient, QueryReportParam};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = P4pClient::builder().build()?;
//!
//!     let params = client.fetch_login_params().await?;
//!     let captcha_png = client.fetch_captcha().await?;
//!     // ... show `captcha_png` to the operator, read the solution ...
//!     client.login(&params, "advertiser", "secret", "a1b2").await?;
//!     client.check_logined().await?;
//!
//!     let report = client
//!         .download_report(&QueryReportParam {
//!             time_select: "5".into(),
//!             start_date: "2016-02-15".into(),
//!             end_date: "2016-02-21".into(),
//!             stat_type: "0".into(),
//!             report_type: "3".into(),
//!             device_type: "0".into(),
//!         })
//!         .await?;
//!     println!("{} bytes", report.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod core;
pub mod report;
pub mod session;

pub use auth::LoginParams;
pub use crate::core::{HostJar, P4pClient, P4pClientBuilder, P4pError};
pub use report::QueryReportParam;
