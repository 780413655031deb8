use stencil_logger::{LevelFilter, Logger, LoggerError};
use tracing::Level;

#[test]
fn level_can_be_changed_after_init() -> Result<(), LoggerError> {
    let mut logger = Logger::builder()
        .name("integration-set-level")
        .env_filter("")
        .level(LevelFilter::WARN)
        .init()?;

    if std::env::var(stencil_logger::LOG_LEVEL_ENV).is_err() {
        assert!(!tracing::enabled!(Level::INFO), "info should be filtered at WARN");
    }

    logger.set_level(LevelFilter::DEBUG)?;
    assert_eq!(logger.level(), LevelFilter::DEBUG);
    assert!(tracing::enabled!(Level::DEBUG), "debug should pass after set_level");

    logger.set_directives("integration_target=trace")?;
    assert!(tracing::enabled!(target: "integration_target", Level::TRACE));

    let err = logger.set_directives("integration_target=loud").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    logger.set_level(LevelFilter::INFO)?;
    assert!(tracing::enabled!(Level::INFO));
    assert!(!tracing::enabled!(target: "hyper", Level::INFO), "hyper stays capped at WARN");
    assert!(tracing::enabled!(target: "hyper", Level::WARN));

    Ok(())
}
