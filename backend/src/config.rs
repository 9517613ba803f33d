//! Service configuration.
//!
//! Every setting can be given as a command-line flag or through the environment, which is
//! how the service is usually configured when it runs in a container next to its data files.

use clap::Parser;
use std::path::PathBuf;

/// Runtime settings for the dealership review service.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dealership-reviews",
    version,
    about = "Serves dealership and review records over HTTP"
)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 3030)]
    pub port: u16,

    /// JSON file holding `{ "reviews": [...] }`, seeded into the store at every boot.
    #[arg(
        long = "reviews",
        env = "REVIEWS_PATH",
        value_name = "PATH",
        default_value = "data/reviews.json"
    )]
    pub reviews_path: PathBuf,

    /// JSON file holding `{ "dealerships": [...] }`, served from memory.
    #[arg(
        long = "dealerships",
        env = "DEALERSHIPS_PATH",
        value_name = "PATH",
        default_value = "data/dealerships.json"
    )]
    pub dealerships_path: PathBuf,

    /// SQLite file backing the review store. Its review table is wiped on every boot.
    #[arg(
        long = "database",
        env = "DATABASE_PATH",
        value_name = "PATH",
        default_value = "dealerships.sqlite"
    )]
    pub database_path: PathBuf,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
