use axum::http::{header, HeaderValue, Method};
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tower_http::cors::{AllowOrigin, CorsLayer};

fn loopback_origin() -> &'static Regex {
    static LOOPBACK: OnceLock<Regex> = OnceLock::new();
    LOOPBACK.get_or_init(|| {
        Regex::new(r"(?i)^https?://(localhost|127\.0\.0\.1)(:\d+)?$")
            .expect("loopback origin pattern is valid")
    })
}

/// Whether a cross-origin caller may use the Engine
///
/// Requests without an origin (or with the opaque `null` origin) are always
/// allowed. With an explicit allow-list only exact matches pass; without one,
/// only localhost and 127.0.0.1 on any port.
pub fn allow_origin(origin: Option<&str>, allowed: Option<&[String]>) -> bool {
    let origin = match origin {
        None | Some("null") => return true,
        Some(origin) => origin,
    };

    match allowed {
        Some(allowed) => allowed.iter().any(|candidate| candidate == origin),
        None => loopback_origin().is_match(origin),
    }
}

/// CORS layer applying `allow_origin` once per request
pub fn cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let allowed_origins = Arc::new(allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &axum::http::request::Parts| {
                origin
                    .to_str()
                    .map(|origin| allow_origin(Some(origin), allowed_origins.as_deref()))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
