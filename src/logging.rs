use anyhow::{bail, Result};
use crossterm::style::Stylize;
use env_logger::fmt::Formatter;
use env_logger::Builder;
use log::{LevelFilter, Record};
use std::io::Write;

/// Initialize logging.
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    Builder::new().filter_level(level).format(format).init();
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    let level = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        s => bail!("invalid log level: {}", s),
    };
    Ok(level)
}

fn format(f: &mut Formatter, r: &Record) -> std::io::Result<()> {
    let level = format!("{:^5}", r.level());
    let level = match r.level() {
        log::Level::Error => level.red(),
        log::Level::Warn => level.yellow(),
        log::Level::Info => level.green(),
        log::Level::Debug => level.blue(),
        log::Level::Trace => level.cyan(),
    };
    writeln!(f, "{} - {}", level, r.args())
}
