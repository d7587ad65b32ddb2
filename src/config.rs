use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_IMAGE: &str = "assets/default.svg";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Process-wide configuration. Only the binary reads this; library types
/// take a `&Config` in their constructors.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        api_base_url: get_env_or_default("TMDB_API_BASE_URL", DEFAULT_API_BASE_URL),
        // an empty key is sent as-is; upstream answers 401
        api_key: get_env_or_default("TMDB_API_KEY", ""),
        language: get_env_or_default("TMDB_LANGUAGE", DEFAULT_LANGUAGE),
        image_base_url: get_env_or_default("TMDB_IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL),
        default_image: get_env_or_default("CASTFINDER_DEFAULT_IMAGE", DEFAULT_IMAGE),
        request_timeout: get_env_secs("TMDB_REQUEST_TIMEOUT_SECS"),
        bind_addr: get_env_or_default("CASTFINDER_BIND_ADDR", "127.0.0.1:3000"),
        static_dir: get_env_or_default("CASTFINDER_STATIC_DIR", "static"),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub language: String,
    pub image_base_url: String,
    pub default_image: String,
    /// `None` means requests may wait on upstream forever.
    pub request_timeout: Option<Duration>,
    pub bind_addr: String,
    pub static_dir: String,
}

impl Config {
    /// Config pointing at a specific upstream, everything else defaulted.
    pub fn for_upstream(api_base_url: &str, api_key: &str) -> Config {
        Config {
            api_base_url: api_base_url.to_string(),
            api_key: api_key.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            request_timeout: None,
            bind_addr: "127.0.0.1:3000".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_secs(key: &str) -> Option<Duration> {
    let raw = env::var(key).ok()?;
    let secs = raw
        .trim()
        .parse::<u64>()
        .unwrap_or_else(|_| panic!("Invalid value for {key}: expected whole seconds, got {raw:?}"));
    Some(Duration::from_secs(secs))
}
