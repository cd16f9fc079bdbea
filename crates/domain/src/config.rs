mod errors;
mod export;
mod root;
mod tracker;

pub use errors::ConfigError;
pub use export::ExportConfig;
pub use root::Config;
pub use tracker::TrackerConfig;
