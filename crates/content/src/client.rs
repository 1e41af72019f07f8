//! HTTP client for the studio's Prismic repository.
//!
//! [`CmsClient`] wraps a shared `reqwest::Client` pointed at one Prismic
//! API base URL. Only the single operation the site needs is exposed:
//! fetch the one published document of a given type, optionally in a
//! specific language. This is deliberately not a general CMS SDK.

use serde::Deserialize;

use crate::error::ContentError;

/// Client for the `documents/search` endpoint of a Prismic repository.
pub struct CmsClient {
    base_url: String,
    http: reqwest::Client,
}

/// Wire shape of a `documents/search` response: we only care about each
/// result's `data` payload.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchDocument>,
}

#[derive(Debug, Deserialize)]
struct SearchDocument {
    data: serde_json::Value,
}

impl CmsClient {
    /// Create a client for a repository API base URL
    /// (e.g. `https://estudio12.cdn.prismic.io/api/v2`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// The repository API base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the single published document of `doc_type`, optionally
    /// restricted to a CMS language code (`es-ar`, `en-us`).
    ///
    /// Returns the document's `data` payload. An empty result set maps to
    /// [`ContentError::NotFound`] so callers can continue their fallback
    /// chain.
    pub async fn get_single(
        &self,
        doc_type: &str,
        lang: Option<&str>,
    ) -> Result<serde_json::Value, ContentError> {
        let query = format!("[[at(document.type,\"{doc_type}\")]]");
        let mut request = self
            .http
            .get(format!("{}/documents/search", self.base_url))
            .query(&[("q", query.as_str()), ("pageSize", "1")]);

        if let Some(lang) = lang {
            request = request.query(&[("lang", lang)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Request(format!("GET {doc_type}: {e}")))?
            .error_for_status()
            .map_err(|e| ContentError::Request(format!("GET {doc_type}: {e}")))?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(format!("{doc_type}: {e}")))?;

        body.results
            .into_iter()
            .next()
            .map(|doc| doc.data)
            .ok_or_else(|| ContentError::NotFound(doc_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = CmsClient::new("https://estudio12.cdn.prismic.io/api/v2/");
        assert_eq!(client.base_url(), "https://estudio12.cdn.prismic.io/api/v2");
    }

    #[test]
    fn search_response_takes_first_result() {
        let raw = serde_json::json!({
            "results": [
                { "data": { "title": "first" } },
                { "data": { "title": "second" } }
            ]
        });
        let parsed: SearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].data["title"], "first");
    }

    #[test]
    fn empty_results_deserialize() {
        let parsed: SearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.results.is_empty());
    }
}
