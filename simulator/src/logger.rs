use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};

use crate::config::LogConfig;

/// Install the global logger: stderr, plus an optional log file without colors
pub fn init(config: &LogConfig) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    let datetime_format = config.datetime_format.clone();
    let use_colors = !config.disable_log_color;
    let stderr = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if use_colors {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format(&datetime_format),
                level,
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(config.log_level.into())
        .chain(stderr);

    if let Some(path) = config.log_file.as_ref() {
        let datetime_format = config.datetime_format.clone();
        let file = fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{}] [{}] [{}] {}",
                    chrono::Local::now().format(&datetime_format),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(fern::log_file(path).with_context(|| format!("Error while opening log file {}", path))?);
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Error while installing logger")?;
    Ok(())
}
