mod config;
mod dataset;
mod directory;
mod error;
mod seed;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::dataset::Datasets;
use crate::directory::DealershipDirectory;
use crate::state::AppState;
use crate::store::sqlite::SqliteReviewStore;
use crate::store::ReviewStore;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::sync::Arc;

/// Loads both datasets, resets the review store from them, and builds the state every
/// handler shares. Any failure here means the service cannot serve traffic.
fn bootstrap(config: &Config) -> io::Result<AppState> {
    let datasets = Datasets::load(&config.reviews_path, &config.dealerships_path)
        .inspect_err(|e| error!("Failed to load datasets: {}", e))
        .map_err(io::Error::other)?;

    let store = SqliteReviewStore::open(&config.database_path)
        .inspect_err(|e| error!("Failed to open review store: {}", e))
        .map_err(io::Error::other)?;

    seed::seed_reviews(&store, &datasets.reviews)
        .inspect_err(|e| error!("Error during database population: {}", e))
        .map_err(io::Error::other)?;

    let reviews: Arc<dyn ReviewStore> = Arc::new(store);
    Ok(AppState::new(
        reviews,
        DealershipDirectory::new(datasets.dealerships),
    ))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::parse();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Starting with {:?}", config);

    let state = web::Data::new(bootstrap(&config)?);

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(services::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
