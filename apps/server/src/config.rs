use std::{net::SocketAddr, time::Duration};

use matchboard_core::constants::DEFAULT_POLL_INTERVAL_MS;
use matchboard_marketplace::DEFAULT_MARKETPLACE_API_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub marketplace_api_url: String,
    pub poll_interval: Duration,
    pub cors_allow: Vec<String>,
    pub static_dir: String,
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8480".to_string())
            .parse()
            .expect("Invalid MB_LISTEN_ADDR");
        let marketplace_api_url =
            std::env::var("MB_API_URL").unwrap_or_else(|_| DEFAULT_MARKETPLACE_API_URL.to_string());
        let poll_interval_ms: u64 = std::env::var("MB_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_MS.to_string())
            .parse()
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        let cors_allow = std::env::var("MB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let static_dir = std::env::var("MB_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let assets_dir = std::env::var("MB_ASSETS_DIR").unwrap_or_else(|_| "assets".into());
        Self {
            listen_addr,
            marketplace_api_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            cors_allow,
            static_dir,
            assets_dir,
        }
    }
}
