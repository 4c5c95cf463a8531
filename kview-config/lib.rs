pub use self::config::{APP_NAME, APP_VERSION, Config, DEFAULT_CONTENT_ROOT, DEFAULT_CONTEXT};
pub use self::errors::ConfigError;

mod config;
mod errors;
