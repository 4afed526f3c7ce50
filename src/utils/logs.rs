use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

pub fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.as_str()).unwrap_or(Level::INFO)
}

// Installs the global subscriber; a second call leaves the first one in place.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time();
    let res = if config.json_logs {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = res {
        tracing::debug!("tracing already initialized {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logs::{log_level, setup_tracing};

    #[test]
    fn test_should_parse_log_level() {
        let mut config = Configuration::new("test");
        assert_eq!(Level::INFO, log_level(&config));
        config.log_level = "warn".to_string();
        assert_eq!(Level::WARN, log_level(&config));
        config.log_level = "chatty".to_string();
        assert_eq!(Level::INFO, log_level(&config));
    }

    #[test]
    fn test_should_setup_tracing_twice() {
        let mut config = Configuration::new("test");
        config.json_logs = true;
        setup_tracing(&config);
        setup_tracing(&config);
    }
}
