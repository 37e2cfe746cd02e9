use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Installs the terminal logger, plus a full trace log in `log_file` if given
///
/// Terminal output is at Debug level in debug builds and Info in release.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    let log_level = LevelFilter::Debug;

    #[cfg(not(debug_assertions))]
    let log_level = LevelFilter::Info;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Trace,
            Config::default(),
            File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
