use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use sscflp::generators::InstanceGenerator;
use thousands::Separable;

use crate::config::{GenConfig, GenJob};
use crate::{EPOCH, io};

/// Generates every job of `config` and writes the instances to `output_folder`.
/// The generator is reset between jobs.
///
/// Returns the paths of the written instance files.
pub fn run(config: &GenConfig, output_folder: &Path) -> Result<Vec<PathBuf>> {
    if !output_folder.exists() {
        fs::create_dir_all(output_folder).with_context(|| {
            format!("could not create output folder: {}", output_folder.display())
        })?;
    }

    let mut generator = InstanceGenerator::new();
    let mut paths = Vec::with_capacity(config.jobs.len());
    for job in &config.jobs {
        let path = output_folder.join(format!("{}.txt", job.name));
        run_job(&mut generator, job, &path).with_context(|| format!("job {:?} failed", job.name))?;
        generator.reset();
        paths.push(path);
    }

    info!(
        "[MAIN] generated {} instance(s) in {:.3}ms",
        paths.len(),
        EPOCH.elapsed().as_secs_f64() * 1000.0
    );
    Ok(paths)
}

/// Generates a single job with `generator`, optionally converts it and writes it to `path`.
pub fn run_job(generator: &mut InstanceGenerator, job: &GenJob, path: &Path) -> Result<()> {
    job.method.validate()?;
    job.method.generate(generator)?;
    if job.uflp {
        generator.convert_to_uncapacitated()?;
    }

    let instance = generator.instance();
    info!(
        "[MAIN] {}: {} facilities, {} customers, total demand {}, total capacity {}",
        job.name,
        instance.n_facilities,
        instance.n_customers,
        instance.total_demand.separate_with_commas(),
        instance.total_capacity().separate_with_commas()
    );

    io::write_instance(instance, path)
}
