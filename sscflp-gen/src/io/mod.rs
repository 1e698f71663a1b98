use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use sscflp::entities::Instance;

use crate::EPOCH;
use crate::config::GenConfig;

pub mod cli;

pub fn read_config(path: &Path) -> Result<GenConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn read_instance(path: &Path) -> Result<Instance> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read instance file: {}", path.display()))?;
    sscflp::io::parse_instance(&text)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Writes `instance` in the flat text format to a (new or truncated) file at `path`.
pub fn write_instance(instance: &Instance, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    sscflp::io::write_instance(instance, writer)
        .with_context(|| format!("could not write instance file: {}", path.display()))?;

    info!("[IO] instance written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "time: {}", jiff::Timestamp::now());
    Ok(())
}
