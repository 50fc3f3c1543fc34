//! The `select` subcommand: load, normalize, search, report.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nnfs_selection::config::SearchStrategy;
use nnfs_selection::feature_selection::{format_feature_set, TraceEvent, TraceSink};
use nnfs_selection::io::dataset::read_dataset;
use nnfs_selection::preprocessing::normalize;
use nnfs_selection::validation::accuracy;

/// Settings for one `select` run, loadable from a JSON file and
/// overridable by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub strategy: SearchStrategy,
    /// Print one line per candidate evaluation.
    pub show_trace: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        SelectConfig {
            strategy: SearchStrategy::Forward,
            show_trace: true,
        }
    }
}

/// Load a `SelectConfig` from a JSON file.
pub fn load_select_config(path: &Path) -> Result<SelectConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Sink that renders search progress as console lines.
struct ConsoleTrace {
    show_evaluations: bool,
}

impl TraceSink for ConsoleTrace {
    fn record(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Evaluated { features, accuracy } => {
                if self.show_evaluations {
                    println!(
                        "Accuracy with features {} is {:.3}",
                        format_feature_set(&features),
                        accuracy
                    );
                }
            }
            TraceEvent::Committed {
                feature,
                added: true,
                accuracy,
            } => println!("Selected feature {}, accuracy {:.3}", feature, accuracy),
            TraceEvent::Committed {
                feature,
                added: false,
                accuracy,
            } => println!("Removed feature {}, accuracy {:.3}", feature, accuracy),
            TraceEvent::OrderingStarted { ordering } => {
                println!("Ranking features by {}", ordering)
            }
        }
    }
}

/// Run one feature-subset search over the dataset at `data`.
pub fn run_select(data: &Path, config: &SelectConfig) -> Result<()> {
    println!("Reading data from {}", data.display());
    let mut dataset = read_dataset(data)?;
    println!(
        "Read {} instances with {} features.",
        dataset.len(),
        dataset.feature_count()
    );

    normalize(&mut dataset);
    log::info!("Normalized {} feature columns", dataset.feature_count());

    let mut sink = ConsoleTrace {
        show_evaluations: config.show_trace,
    };
    let start = Instant::now();
    let result = config.strategy.run(&dataset, &mut sink)?;
    log::info!("{} search completed in {:?}", config.strategy, start.elapsed());
    println!("The search took {} milliseconds.", start.elapsed().as_millis());

    let final_accuracy = accuracy(&result.features, &dataset)?;
    println!(
        "Feature set {} is the best subset, with an accuracy of {:.3}",
        format_feature_set(&result.features),
        final_accuracy
    );
    Ok(())
}
