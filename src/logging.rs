//! File-backed logging. The terminal is owned by the UI, so log lines go to
//! the file named in the configuration instead of stderr.

use chrono::Local;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

/// Installs the global logger writing to `path`.
///
/// Unknown level names fall back to `info`.
pub fn init(path: &Path, level: &str) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::from_str(level).unwrap_or(LevelFilter::Info))
        .format(|buf, record| {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(buf, "[{timestamp}] {:<5} {}", record.level(), record.args())
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}
