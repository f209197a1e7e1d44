mod app;
mod config;
mod effects;
mod logging;
mod persistence;

pub use app::run_app;
pub use config::AppConfig;
pub use logging::{initialize as initialize_logging, LogDestination};
