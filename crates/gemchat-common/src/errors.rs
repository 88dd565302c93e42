use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GemchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("generation.top_p = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: generation.top_p = 3 is out of range"
        );
    }

    #[test]
    fn gemchat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GemchatError = config_err.into();
        assert!(matches!(err, GemchatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn gemchat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GemchatError = io_err.into();
        assert!(matches!(err, GemchatError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn gemchat_error_other_variants() {
        let err = GemchatError::Terminal("raw mode unavailable".into());
        assert_eq!(err.to_string(), "terminal error: raw mode unavailable");

        let err = GemchatError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
