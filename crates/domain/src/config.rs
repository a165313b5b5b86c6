pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
