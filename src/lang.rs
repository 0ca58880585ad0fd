//! Language Resolution
//!
//! Reads the user's language from the `TsIntuition_userlang` cookie.

use std::env;

/// Cookie holding the user's preferred language.
pub const COOKIE_USERLANG: &str = "TsIntuition_userlang";

/// Environment variable carrying the request cookies for CGI-style tools.
pub const COOKIE_ENV: &str = "HTTP_COOKIE";

/// Returns the language stored in a `;`-separated `key=value` cookie list.
///
/// Pairs are trimmed. Entries without `=` or with an empty value are skipped,
/// and the first well-formed `TsIntuition_userlang` entry wins.
pub fn language_from_cookies(cookies: &str) -> Option<&str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .find(|(key, value)| *key == COOKIE_USERLANG && !value.is_empty())
        .map(|(_, value)| value)
}

/// Resolves the language from an optional cookie list, falling back to `default`.
pub fn resolve_language(cookies: Option<&str>, default: &str) -> String {
    cookies
        .and_then(language_from_cookies)
        .unwrap_or(default)
        .to_string()
}

/// Resolves the language from the `HTTP_COOKIE` environment variable.
pub fn ambient_language(default: &str) -> String {
    resolve_language(env::var(COOKIE_ENV).ok().as_deref(), default)
}
