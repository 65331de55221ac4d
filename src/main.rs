// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and start the relay HTTP server

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use config::Config;
use services::{AdmissionControl, GooglePlacesClient};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration; the service cannot run without the API key
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting places-relay...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    log::info!("Frontend URL: {}", config.frontend_origin);
    log::info!(
        "Admission control: {} requests per {}s window per client",
        config.rate_limit_max_requests,
        config.rate_limit_window_secs
    );

    // 4. Shared state: upstream client and admission controller
    let places_client = web::Data::new(GooglePlacesClient::new(
        config.google_maps_api_key.clone(),
    ));
    let admission = Arc::new(AdmissionControl::new(
        config.rate_limit_max_requests,
        config.rate_limit_window(),
    ));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        // One allowed origin, credentials included
        let cors = Cors::default()
            .allowed_origin(&config_clone.frontend_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(places_client.clone())
            .app_data(handlers::json_config())
            // Middleware
            .wrap(Logger::default())
            .wrap(cors)
            // Routes; everything under /api sits behind admission control
            .configure(handlers::health_config)
            .service(
                web::scope("/api")
                    .wrap(middleware::RateLimit::new(admission.clone()))
                    .configure(handlers::places_config),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
