//! Session markers kept on the client.
//!
//! The bearer token and the session markers live in cookies. The token key
//! is the single canonical place a token is read from.

use serde::{Deserialize, Serialize};

/// Cookie names the site uses for its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKeys {
    /// Bearer token read by authenticated calls.
    pub token: &'static str,
    /// Markers cleared when the backend answers 401.
    pub markers: &'static [&'static str],
}

impl SessionKeys {
    /// The keys used by the site.
    pub const DEFAULT: Self = Self {
        token: "_token",
        markers: &["_dwork", "_role"],
    };
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single name/value cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
    /// Path the cookie applies to.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

impl SessionCookie {
    /// Create a new cookie scoped to `/`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: default_path(),
        }
    }

    /// Parse every pair of a `Cookie` request header.
    ///
    /// Malformed pairs are skipped.
    #[must_use]
    pub fn parse_header(header: &str) -> Vec<Self> {
        header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Self::new(name, value.trim().trim_matches('"')))
            })
            .collect()
    }

    /// Format for the `Cookie` request header.
    #[must_use]
    pub fn to_cookie_header(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// Format for a `Set-Cookie` response header.
    #[must_use]
    pub fn to_set_cookie(&self) -> String {
        format!("{}={}; Path={}; SameSite=Lax", self.name, self.value, self.path)
    }

    /// A `Set-Cookie` value that deletes the cookie named `name`.
    #[must_use]
    pub fn removal(name: &str) -> String {
        format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
    }
}
