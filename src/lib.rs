pub mod app;
pub mod config;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod state;
pub mod tally;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
