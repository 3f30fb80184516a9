//! Overrides read from the process environment. Kept in its own binary so
//! the variables do not leak into other tests.

use std::path::Path;

use observability_config::config::{load_config, ConfigError};

fn fixture() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/observability.toml")
}

#[test]
fn test_process_environment_overrides_file() {
    std::env::set_var("OBSERVABILITY_LOGGING_LEVEL", "error");
    std::env::set_var("OBSERVABILITY_HEALTH_CHECKS_CHECKS", "database");
    let result = load_config(&fixture());
    std::env::remove_var("OBSERVABILITY_LOGGING_LEVEL");
    std::env::remove_var("OBSERVABILITY_HEALTH_CHECKS_CHECKS");

    let config = result.unwrap();
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.health_checks.checks, vec!["database"]);
    assert_eq!(config.service_name, "orders-api");

    std::env::set_var("OBSERVABILITY_LOGGING_LEVEL", "verbose");
    let result = load_config(&fixture());
    std::env::remove_var("OBSERVABILITY_LOGGING_LEVEL");

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
