pub mod errors;

pub use errors::{ConfigError, GemchatError};

pub type Result<T> = std::result::Result<T, GemchatError>;
