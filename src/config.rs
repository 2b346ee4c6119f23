use std::env;

pub const DEFAULT_ACTIVITY_API_URL: &str = "https://www.boredapi.com/api/activity";
pub const DEFAULT_JOKE_API_URL: &str = "https://api.chucknorris.io/jokes/random";

#[derive(Debug, Clone)]
pub struct Config {
    pub activity_api_url: String,
    pub joke_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            activity_api_url: env::var("ACTIVITY_API_URL")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_API_URL.to_string()),
            joke_api_url: env::var("JOKE_API_URL")
                .unwrap_or_else(|_| DEFAULT_JOKE_API_URL.to_string()),
        }
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080)
}
