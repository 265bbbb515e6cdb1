//! Credential and endpoint configuration
//!
//! Values are resolved once at startup and handed to the API client; nothing
//! here is global or mutated after construction.

use std::fmt;

/// NinjaRMM API host
pub const DEFAULT_API_HOST: &str = "https://api.ninjarmm.com";

/// Environment variable holding the API access key id
pub const ACCESS_KEY_ID_VAR: &str = "NINJA_ACCESS_KEY_ID";

/// Environment variable holding the API secret
pub const SECRET_ACCESS_KEY_VAR: &str = "NINJA_SECRET_ACCESS_KEY";

const ACCESS_KEY_ID_PLACEHOLDER: &str = "<YOUR_ACCESS_KEY_ID>";
const SECRET_ACCESS_KEY_PLACEHOLDER: &str = "<YOUR_SECRET_ACCESS_KEY>";

/// Application configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Key id sent in the `Authorization` header
    pub access_key_id: String,

    /// Shared secret used as the HMAC key
    pub secret_access_key: String,

    /// Scheme and host requests are sent to, without a trailing slash
    pub api_host: String,
}

impl Config {
    /// Load credentials from the process environment.
    ///
    /// Missing credentials are not an error: placeholders are substituted and
    /// the API will reject the requests later.
    pub fn from_env(api_host: Option<&str>) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), api_host)
    }

    /// Load credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, api_host: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key_id = non_empty(lookup(ACCESS_KEY_ID_VAR))
            .unwrap_or_else(|| {
                log::warn!("{} is not set, using a placeholder", ACCESS_KEY_ID_VAR);
                ACCESS_KEY_ID_PLACEHOLDER.to_string()
            });
        let secret_access_key = non_empty(lookup(SECRET_ACCESS_KEY_VAR))
            .unwrap_or_else(|| {
                log::warn!("{} is not set, using a placeholder", SECRET_ACCESS_KEY_VAR);
                SECRET_ACCESS_KEY_PLACEHOLDER.to_string()
            });

        let api_host = api_host
            .filter(|host| !host.is_empty())
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string();

        Self {
            access_key_id,
            secret_access_key,
            api_host,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}
