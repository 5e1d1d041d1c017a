pub mod config;
pub mod logging;
pub mod roster;

pub use config::Config;
pub use logging::LogGuard;
