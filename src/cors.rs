use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Build a CORS layer for the REST API with the given allowed origins.
///
/// An origin is allowed when it starts with one of the configured origins, so
/// `http://localhost` also admits `http://localhost:8080`.
/// Pass "*" in the origins list to allow all origins (not recommended for production).
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }
            origin.to_str().is_ok_and(|origin_str| {
                cors_origins
                    .iter()
                    .any(|allowed| origin_str.starts_with(allowed.as_str()))
            })
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
}

/// Trim the configured origins and drop empty entries.
#[must_use]
pub fn normalize_origins(origins: &[String]) -> Vec<String> {
    origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
