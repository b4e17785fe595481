use actix_web::{web, App, HttpServer};
use guandan_backend::config::{rules_from_env, ServerConfig};
use guandan_backend::middleware::cors::cors_middleware;
use guandan_backend::middleware::request_trace::RequestTrace;
use guandan_backend::middleware::trace_span::TraceSpan;
use guandan_backend::routes;
use guandan_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // GUANDAN_RULES_FILE, when set, replaces the standard presets
    let rules = match rules_from_env() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("❌ Failed to load rules: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Guandan scorebook on http://{}:{}",
        server.host, server.port
    );

    let data = web::Data::new(AppState::in_memory(rules));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
