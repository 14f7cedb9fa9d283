use flexi_logger::{Logger, LoggerHandle};

pub fn init_logging(level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
