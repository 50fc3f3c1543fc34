//! The `generate` subcommand: write a synthetic two-class dataset.
//!
//! Informative features place the two classes in separated value bands;
//! the remaining features are uniform noise. Output uses the same
//! whitespace-delimited layout the loader reads, with scientific-notation
//! columns like the datasets this tool is usually pointed at.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub instances: usize,
    pub features: usize,
    pub informative: usize,
    pub seed: u64,
}

pub fn run_generate(output: &Path, config: &GenerateConfig) -> Result<()> {
    if config.informative > config.features {
        bail!(
            "--informative ({}) cannot exceed --features ({})",
            config.informative,
            config.features
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    for row in 0..config.instances {
        let class = if row % 2 == 0 { 1.0 } else { 2.0 };
        write!(writer, "{:.7e}", class)?;
        for feature in 0..config.features {
            let value = if feature < config.informative {
                // Class bands around 0.25 and 0.75, wide enough to overlap
                // occasionally so searches have something to do.
                let center = if class == 1.0 { 0.25 } else { 0.75 };
                center + rng.gen_range(-0.2..0.2)
            } else {
                rng.gen_range(0.0..1.0)
            };
            write!(writer, "  {:.7e}", value)?;
        }
        writeln!(writer)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    log::info!(
        "Wrote {} instances with {} features ({} informative) to {}",
        config.instances,
        config.features,
        config.informative,
        output.display()
    );
    println!(
        "Wrote {} instances with {} features to {}",
        config.instances,
        config.features,
        output.display()
    );
    Ok(())
}
