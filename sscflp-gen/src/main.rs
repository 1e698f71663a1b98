use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use sscflp_gen::config::GenConfig;
use sscflp_gen::io::cli::Cli;
use sscflp_gen::{driver, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GenConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed GenConfig: {config:?}");

    driver::run(&config, &args.output_folder)?;

    Ok(())
}
