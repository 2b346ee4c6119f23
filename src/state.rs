use crate::config::Config;
use crate::models::WidgetState;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub widget: Arc<Mutex<WidgetState>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
            widget: Arc::new(Mutex::new(WidgetState::default())),
        }
    }
}
