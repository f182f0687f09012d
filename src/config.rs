//! Environment-backed configuration.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "workforce.db";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub secret_key: String,
}

impl Config {
    /// Read configuration from the environment, falling back to the
    /// same defaults the original service shipped with.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| "secret_key".to_string());

        Self {
            port,
            database_path,
            secret_key,
        }
    }
}
