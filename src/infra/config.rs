use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Apply the embedded migrations on startup.
    pub run_migrations: bool,
    pub cors_origin: HeaderValue,
    /// JSON log file. `None` keeps logs on the console only.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let database_url: String = get_env("DATABASE_URL");
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| anyhow::anyhow!("CORS_ORIGIN must be a valid header value"))?;
        let log_file: String = get_env_default("LOG_FILE", String::from("app.log"));

        Ok(Self {
            bind_addr,
            database_url,
            db_max_connections,
            run_migrations,
            cors_origin,
            log_file: parse_log_file(&log_file),
        })
    }
}

fn parse_log_file(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}
