use actix_cors::Cors;
use actix_web::http::header;

use crate::config::server::cors_allowed_origins;

/// CORS limited to configured origins and the methods the API serves.
/// Falls back to local dev origins when nothing valid is configured.
pub fn cors_middleware() -> Cors {
    let mut origins = cors_allowed_origins();
    if origins.is_empty() {
        origins = vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ];
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
