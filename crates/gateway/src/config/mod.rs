//! Configuration loading for the Edge Admin Gateway.

mod app;

pub use app::AppConfig;
