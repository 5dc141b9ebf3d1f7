use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use log::info;
use std::path::Path;

use repoguard::config::{DEFAULT_CONFIG_FILE, RuntimeConfig};
use repoguard::handlers::scan::{AppState, health_check, scan_code, scan_secrets};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = RuntimeConfig::load(Path::new(DEFAULT_CONFIG_FILE));
    info!("Loaded {} search patterns", config.search_patterns.len());

    let bind_addr = format!("0.0.0.0:{}", config.app_port);
    let app_state = web::Data::new(AppState { config });

    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .route("/health", web::get().to(health_check))
            .route("/scan/secrets", web::post().to(scan_secrets))
            .route("/scan/code", web::post().to(scan_code))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
