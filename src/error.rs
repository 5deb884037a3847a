/// Configuration errors.
///
/// Defines the single error type raised while translating a configuration
/// document. Every variant carries the source line it was detected on.
pub mod config_error;

pub use config_error::{ConfigError, ConfigResult};
