mod loader;

pub use loader::{Config, LoggingConfig};
