use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the number of `-v` flags to a log threshold.
pub fn level_for_verbosity(count: u8) -> Level {
    match count {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Logging settings, fixed for the lifetime of the process once installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
}

impl LogConfig {
    pub fn from_verbosity(count: u8) -> Self {
        Self {
            level: level_for_verbosity(count),
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.level.as_str().to_ascii_lowercase())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_verbosity(0)
    }
}

pub fn init_cli_logger(config: LogConfig) {
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(3), Level::TRACE);
        assert_eq!(level_for_verbosity(u8::MAX), Level::TRACE);
    }

    #[test]
    fn test_verbosity_mapping_is_monotonic() {
        // tracing orders levels so that more verbose compares greater
        for count in 0..u8::MAX {
            assert!(level_for_verbosity(count) <= level_for_verbosity(count + 1));
        }
    }

    #[test]
    fn test_default_log_config_is_warn() {
        assert_eq!(LogConfig::default().level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
    }
}
