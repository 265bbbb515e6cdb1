//! NinjaRMM request signing
//!
//! The API authenticates each request with an HMAC-SHA1 over a base64 copy of
//! the string to sign:
//!
//! ```text
//! signature = base64(hmac_sha1(secret, base64(string_to_sign)))
//! ```
//!
//! The inner base64 step is part of the server's scheme; dropping it yields a
//! signature the API rejects.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// `Date` header format: RFC 1123 with a numeric zone offset.
const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Build the newline-joined string to sign.
///
/// GET requests pass empty strings for `content_md5` and `content_type`.
pub fn string_to_sign(
    method: &str,
    content_md5: &str,
    content_type: &str,
    date: &str,
    canonical_path: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        method, content_md5, content_type, date, canonical_path
    )
}

/// Compute the request signature for `string_to_sign` using `secret`.
pub fn sign(secret: &str, string_to_sign: &str) -> String {
    let data = general_purpose::STANDARD.encode(string_to_sign.as_bytes());

    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(data.as_bytes());

    general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Format a timestamp for the `Date` header, e.g. `Mon, 02 Jan 2006 15:04:05 +0000`.
pub fn request_date(now: DateTime<Utc>) -> String {
    now.format(RFC1123Z).to_string()
}

/// Strip any query string, leaving the path that takes part in the signature.
pub fn canonical_path(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}

/// Headers that authenticate a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value for the `Authorization` header (`NJ <key id>:<signature>`)
    pub authorization: String,
    /// Value for the `Date` header
    pub date: String,
}

/// Sign a GET request for `path` at time `now`.
pub fn sign_get(
    access_key_id: &str,
    secret_access_key: &str,
    path: &str,
    now: DateTime<Utc>,
) -> SignedHeaders {
    let date = request_date(now);
    let to_sign = string_to_sign("GET", "", "", &date, canonical_path(path));
    let signature = sign(secret_access_key, &to_sign);

    SignedHeaders {
        authorization: format!("NJ {}:{}", access_key_id, signature),
        date,
    }
}
