use actix_web::web;

pub mod admin;
pub mod auth;
pub mod health;
pub mod todos;
pub mod user;

/// Register every route. Shared by `main.rs` and the test app builder so
/// both serve the same surface; middleware is layered on by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root and health: /, /health
    health::configure_routes(cfg);

    // Registration and credential exchange: /auth, /auth/token
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // Caller's tasks: /todo/**
    cfg.service(web::scope("/todo").configure(todos::configure_routes));

    // Administrative override: /admin/**
    cfg.service(web::scope("/admin").configure(admin::configure_routes));

    // Self-service: /user/**
    cfg.service(web::scope("/user").configure(user::configure_routes));
}
