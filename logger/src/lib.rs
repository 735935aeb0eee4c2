use colored::Colorize;
use common::env_config::Config;

/// Maps a level name from the configuration to a filter, defaulting to debug.
pub fn parse_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Debug,
    }
}

fn dispatch(config: &Config) -> Result<fern::Dispatch, fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let color = match record.level() {
                log::Level::Info => "green",
                log::Level::Warn => "yellow",
                log::Level::Error => "red",
                log::Level::Debug => "magenta",
                log::Level::Trace => "bright black",
            };
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                record.target(),
                record.level().to_string().color(color),
                message
            ))
        })
        .level(parse_level(&config.log_level))
        .chain(std::io::stdout());

    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    Ok(dispatch)
}

/// Installs the global logger. Does nothing when console logging is disabled.
pub fn setup(config: &Config) -> Result<(), fern::InitError> {
    if !config.console_logging_enabled {
        return Ok(());
    }

    dispatch(config)?.apply()?;
    log::debug!("Logger initialised at {} level", config.log_level);
    Ok(())
}
