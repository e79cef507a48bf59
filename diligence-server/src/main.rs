#![deny(missing_docs)]
//! Diligence server executable.
//!
//! Serves the technical analysis payload and the dashboard bundle.

mod config;
mod openapi;
mod routes;
mod static_files;

#[cfg(not(test))]
use std::sync::Arc;

#[cfg(not(test))]
use actix_web::{App, HttpServer, middleware::Logger, web};
#[cfg(not(test))]
use dotenvy::dotenv;

#[cfg(not(test))]
use diligence_core::StaticFacts;

#[cfg(not(test))]
use crate::config::ServerConfig;
#[cfg(not(test))]
use crate::routes::{AppState, configure_api, cors};
#[cfg(not(test))]
use crate::static_files::{StaticAssets, serve_spa};

#[cfg(not(test))]
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let state = web::Data::new(AppState::new(
        Arc::new(StaticFacts::new()),
        config.expose_errors,
    ));
    let assets = config
        .static_dir
        .clone()
        .map(|root| web::Data::new(StaticAssets::new(root)));

    match &config.static_dir {
        Some(dir) => log::info!("serving client bundle from {}", dir.display()),
        None => log::info!("no client bundle configured; serving API only"),
    }
    log::info!("listening on {}:{}", config.host, config.port);

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let app = App::new()
                .wrap(Logger::default())
                .wrap(cors())
                .app_data(state.clone())
                .configure(configure_api);
            match &assets {
                Some(assets) => app
                    .app_data(assets.clone())
                    .default_service(web::to(serve_spa)),
                None => app,
            }
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    })
}

#[cfg(test)]
fn main() {}
