//! Module provides initialization of global application logger

use std::error::Error;

use chrono::{Local, SecondsFormat};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LoggerConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

use actor_bag::config::Config;

/// Initializes the global logger for an application.
///
/// Messages are written both to stdout and to the new file
/// inside of log directory of the configuration.
///
/// # Errors
/// An error is returned if log file cannot be created,
/// if log4rs rejects the appender configuration
/// or if global logger has already been set.
///
pub fn init(config: &Config) -> Result<Handle, Box<dyn Error>> {
    let pattern = "{d:<35} [thread \"{T}\" id {({I}]):<6} {l:<5} {t} >> {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stdout = ConsoleAppender::builder().encoder(encoder.clone()).build();
    let file_name = format!(
        "{}_{}.log",
        config.name(),
        Local::now()
            .to_rfc3339_opts(SecondsFormat::Nanos, true)
            .replace(':', "-"),
    );
    let file = FileAppender::builder()
        .encoder(encoder)
        .build(config.log_dir().join(file_name))?;

    let logger_config = LoggerConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appenders(["stdout", "file"])
                .build(config.log_level()),
        )?;
    Ok(log4rs::init_config(logger_config)?)
}
