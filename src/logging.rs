//! Logger setup for the binary; library code only uses the `log` macros.
use crate::settings::ServerSettings;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// terminal logger at the configured level, plus a file logger if `log_file` is set
pub fn init_logger(settings: &ServerSettings) -> Result<(), Box<dyn std::error::Error>> {
    let level = settings.level_filter()?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &settings.log_file {
        loggers.push(WriteLogger::new(
            level,
            Config::default(),
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
