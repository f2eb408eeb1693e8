use log::LevelFilter;
use web_sys::window;

// Development backend, used when there is no window to read a host from
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    // A build-time override wins, e.g. API_BASE_URL=https://api.example.com trunk build
    if let Some(url) = option_env!("API_BASE_URL") {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            // Same-origin deployment: the backend sits behind the page's own host
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

pub fn log_level() -> log::Level {
    let filter = option_env!("LOG_LEVEL")
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    filter.to_level().unwrap_or(log::Level::Error)
}
