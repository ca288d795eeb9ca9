use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub const LISTEN_PORT: u16 = 3000;
pub const GOODREADS_SEARCH_ENDPOINT: &str = "https://www.goodreads.com/search/index.xml";
pub const PUBLIC_DIR: &str = "public";
pub const INDEX_FILE: &str = "index.html";

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub upstream_endpoint: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub index_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            // Not validated: a missing key only makes upstream requests fail.
            api_key: get_env_or_warn("API_KEY"),
            upstream_endpoint: GOODREADS_SEARCH_ENDPOINT.to_string(),
            port: LISTEN_PORT,
            public_dir: PathBuf::from(PUBLIC_DIR),
            index_file: PathBuf::from(INDEX_FILE),
        }
    }
}

fn get_env_or_warn(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::warn!("environment variable {key} not set, upstream requests will be rejected");
        String::new()
    })
}
