use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("hex color must have 3, 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),

    #[error(transparent)]
    Path(#[from] PlatformError),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("already installed: {0}")]
    AlreadyInstalled(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TinctError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidLength(5);
        assert_eq!(err.to_string(), "hex color must have 3, 6 or 8 digits, got 5");

        let err = ColorError::InvalidDigit('g');
        assert_eq!(err.to_string(), "invalid hex digit: 'g'");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("color.default_alpha = 2 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: color.default_alpha = 2 is out of range"
        );

        let err = ConfigError::WriteError("read-only file system".into());
        assert_eq!(err.to_string(), "config write error: read-only file system");
    }

    #[test]
    fn config_error_wraps_path_error() {
        let err: ConfigError = PlatformError::PathError("no home".into()).into();
        assert!(matches!(err, ConfigError::Path(_)));
        assert_eq!(err.to_string(), "path error: no home");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::PathError("no home".into());
        assert_eq!(err.to_string(), "path error: no home");

        let err = PlatformError::AlreadyInstalled("appearance source".into());
        assert_eq!(err.to_string(), "already installed: appearance source");
    }

    #[test]
    fn tinct_error_from_color() {
        let err: TinctError = ColorError::InvalidLength(4).into();
        assert!(matches!(err, TinctError::Color(_)));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn tinct_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TinctError = config_err.into();
        assert!(matches!(err, TinctError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tinct_error_from_platform() {
        let err: TinctError = PlatformError::PathError("denied".into()).into();
        assert!(matches!(err, TinctError::Platform(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn tinct_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TinctError = io_err.into();
        assert!(matches!(err, TinctError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn tinct_error_other() {
        let err = TinctError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
