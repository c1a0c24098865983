//! Regex extraction of the hidden CAS form tokens.
//!
//! Scraping rendered HTML is fragile, so it is kept behind these narrow
//! functions: HTTP plumbing never sees a pattern, and a markup change only
//! touches this file.

use once_cell::sync::Lazy;
use regex::Regex;

static LT_RE: Lazy<Regex> = Lazy::new(|| hidden_field_re("lt"));
static EXECUTION_RE: Lazy<Regex> = Lazy::new(|| hidden_field_re("execution"));

fn hidden_field_re(field: &str) -> Regex {
    Regex::new(&format!(r#"name="{field}" value="(.+?)""#)).expect("valid hidden-field pattern")
}

/// Value of the hidden `lt` token in the login page, if present.
pub(crate) fn lt(body: &str) -> Option<&str> {
    first_capture(&LT_RE, body)
}

/// Value of the hidden `execution` token in the login page, if present.
pub(crate) fn execution(body: &str) -> Option<&str> {
    first_capture(&EXECUTION_RE, body)
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body).and_then(|c| c.get(1)).map(|m| m.as_str())
}
