use actix_web::web;

pub mod health;
pub mod players;
pub mod rooms;
pub mod score;

/// Configure application routes.
///
/// `main.rs` wraps the app in the trace and CORS middleware; tests
/// register the same paths through this function.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Stateless scoring: /api/score
    cfg.service(web::scope("/api/score").configure(score::configure_routes));

    // Player routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Room routes: /api/rooms/**
    cfg.service(web::scope("/api/rooms").configure(rooms::configure_routes));
}
