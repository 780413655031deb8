use stencil_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_only_logger_has_no_guard() -> Result<(), LoggerError> {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()?;

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
    Ok(())
}

#[test]
fn logger_without_outputs_is_rejected() {
    let err = Logger::builder()
        .name("integration-no-output")
        .console(false)
        .init()
        .expect_err("no layers should be rejected");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
