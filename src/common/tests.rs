#[cfg(test)]
mod common_tests {
    use crate::common::common::{parse_log_level, setup_logging};
    use crate::common::structs::custom_error::CustomError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_parse_log_level_known() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("warn").unwrap(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let error = parse_log_level("INFO").unwrap_err();
        assert_eq!(error.to_string(), "Unknown log level encountered: 'INFO'");
    }

    #[test]
    fn test_setup_logging_rejects_unknown_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("chatty");
        assert!(setup_logging(&config).is_err());
    }

    #[test]
    fn test_custom_error_message() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(error.message(), "could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }
}
