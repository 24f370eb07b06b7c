//! Request target construction.
//!
//! This module builds the fully-qualified request URL for a search submission.
//! It is a pure string transformation: the configured API base is concatenated
//! with the form-encoded query. Whether a request should actually be issued
//! (for example for an empty query) is policy that belongs one layer up, in the
//! session actor; the builder always produces a syntactically valid target.

use url::form_urlencoded;

/// Default search endpoint, terminated by the query parameter.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Builds the request target for a search query.
///
/// The query is percent-encoded as an `application/x-www-form-urlencoded`
/// value, so characters that are unsafe inside a query string (spaces,
/// ampersands, non-ASCII) cannot corrupt the URL. An empty query yields the
/// bare base, which is still a valid target.
///
/// # Examples
///
/// ```
/// use hnscout::fetch::request::{build_request, DEFAULT_API_BASE};
///
/// let target = build_request(DEFAULT_API_BASE, "react");
/// assert_eq!(target, "https://hn.algolia.com/api/v1/search?query=react");
/// ```
#[must_use]
pub fn build_request(api_base: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{api_base}{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query_is_appended_verbatim() {
        assert_eq!(
            build_request(DEFAULT_API_BASE, "react"),
            "https://hn.algolia.com/api/v1/search?query=react"
        );
    }

    #[test]
    fn empty_query_yields_the_bare_base() {
        assert_eq!(
            build_request(DEFAULT_API_BASE, ""),
            "https://hn.algolia.com/api/v1/search?query="
        );
    }

    #[test]
    fn unsafe_characters_are_encoded() {
        let target = build_request(DEFAULT_API_BASE, "rust lang");
        assert_eq!(target, "https://hn.algolia.com/api/v1/search?query=rust+lang");

        let target = build_request(DEFAULT_API_BASE, "a&b=c");
        assert_eq!(target, "https://hn.algolia.com/api/v1/search?query=a%26b%3Dc");
    }

    #[test]
    fn custom_base_is_respected() {
        let target = build_request("http://localhost:8080/search?q=", "redux");
        assert_eq!(target, "http://localhost:8080/search?q=redux");
    }
}
