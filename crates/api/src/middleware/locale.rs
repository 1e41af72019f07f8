//! Default-locale redirect middleware.
//!
//! The site's locale lives in the URL path. Requests to locale-scoped
//! routes that lack a supported locale segment are redirected to the
//! same path with the default locale (`es`) inserted, mirroring the
//! original routing middleware. Health and the booking/contact API pass
//! through untouched.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use estudio12_core::error::CoreError;
use estudio12_core::locale::Locale;

use crate::error::AppError;

const CONTENT_PREFIX: &str = "/api/v1/content/";

/// Catalog routes that take a leading locale segment.
const LOCALE_SCOPED: [&str; 2] = ["artists", "styles"];

/// Redirect locale-less content/catalog paths to the default locale.
pub async fn locale_redirect(request: Request, next: Next) -> Response {
    if let Some(target) = redirect_target(request.uri().path(), request.uri().query()) {
        tracing::debug!(from = %request.uri(), to = %target, "Redirecting to default locale");
        return Redirect::temporary(&target).into_response();
    }
    next.run(request).await
}

fn redirect_target(path: &str, query: Option<&str>) -> Option<String> {
    let rewritten = rewrite_path(path)?;
    Some(match query {
        Some(query) => format!("{rewritten}?{query}"),
        None => rewritten,
    })
}

/// Insert the default locale when a locale-scoped path lacks one.
fn rewrite_path(path: &str) -> Option<String> {
    if let Some(rest) = path.strip_prefix(CONTENT_PREFIX) {
        let first = rest.split('/').next().unwrap_or("");
        if Locale::parse(first).is_none() {
            return Some(format!("{CONTENT_PREFIX}{}/{rest}", Locale::DEFAULT));
        }
        return None;
    }

    if let Some(rest) = path.strip_prefix("/api/v1/") {
        let first = rest.split('/').next().unwrap_or("");
        if LOCALE_SCOPED.contains(&first) {
            return Some(format!("/api/v1/{}/{rest}", Locale::DEFAULT));
        }
    }

    None
}

/// Resolve a path locale tag for handlers. Unknown tags are rejected the
/// way the original pages fail on an invalid locale.
pub fn resolve_locale(tag: &str) -> Result<Locale, AppError> {
    Locale::parse(tag)
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Invalid locale: {tag}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_content_path_gets_default_locale() {
        assert_eq!(
            rewrite_path("/api/v1/content/home").as_deref(),
            Some("/api/v1/content/es/home")
        );
    }

    #[test]
    fn prefixed_content_path_passes_through() {
        assert_eq!(rewrite_path("/api/v1/content/es/home"), None);
        assert_eq!(rewrite_path("/api/v1/content/en-US/about"), None);
    }

    #[test]
    fn unknown_locale_segment_is_prefixed_like_the_original() {
        // `/fr/home` becomes `/es/fr/home`; the router then 404s it.
        assert_eq!(
            rewrite_path("/api/v1/content/fr/home").as_deref(),
            Some("/api/v1/content/es/fr/home")
        );
    }

    #[test]
    fn catalog_routes_get_default_locale() {
        assert_eq!(
            rewrite_path("/api/v1/artists").as_deref(),
            Some("/api/v1/es/artists")
        );
        assert_eq!(
            rewrite_path("/api/v1/styles").as_deref(),
            Some("/api/v1/es/styles")
        );
        assert_eq!(rewrite_path("/api/v1/en/artists"), None);
    }

    #[test]
    fn unrelated_routes_pass_through() {
        assert_eq!(rewrite_path("/health"), None);
        assert_eq!(rewrite_path("/api/v1/booking/sessions"), None);
        assert_eq!(rewrite_path("/api/v1/contact/messages"), None);
    }

    #[test]
    fn query_string_is_preserved() {
        assert_eq!(
            redirect_target("/api/v1/content/home", Some("preview=1")).as_deref(),
            Some("/api/v1/content/es/home?preview=1")
        );
    }

    #[test]
    fn resolve_rejects_unknown_tags() {
        assert!(resolve_locale("es").is_ok());
        assert!(resolve_locale("en-us").is_ok());
        assert!(resolve_locale("nl").is_err());
    }
}
