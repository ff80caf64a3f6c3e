//! Basic authentication utilities

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Encode `username:password` with the standard, padded base64 alphabet.
///
/// Neither part is escaped; a server splits the decoded pair on its first
/// colon.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{username}:{password}");
    BASE64_STANDARD.encode(credentials.as_bytes())
}
