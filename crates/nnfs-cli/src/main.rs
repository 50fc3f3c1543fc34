use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use nnfs_cli::generate::{run_generate, GenerateConfig};
use nnfs_cli::select::{load_select_config, run_select, SelectConfig};
use nnfs_selection::config::SearchStrategy;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NNFS_LOG", "error,nnfs=info"))
        .init();

    let matches = Command::new("nnfs")
        .version(clap::crate_version!())
        .about("Greedy feature selection for a 1-NN classifier under leave-one-out cross-validation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("select")
                .about("Search for the feature subset that maximizes LOOCV accuracy")
                .arg(
                    Arg::new("data")
                        .help("Path to the whitespace-delimited dataset file (first column is the class label)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("strategy")
                        .short('s')
                        .long("strategy")
                        .help("Search strategy to run. Overrides the strategy in the configuration file.")
                        .value_parser(["forward", "backward", "variance-ranked"]),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Suppress the per-evaluation progress lines")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Write a synthetic two-class dataset in the loader's format")
                .arg(
                    Arg::new("output")
                        .help("Path of the dataset file to write")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("instances")
                        .short('n')
                        .long("instances")
                        .help("Number of instances to generate")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("100"),
                )
                .arg(
                    Arg::new("features")
                        .short('f')
                        .long("features")
                        .help("Number of feature columns to generate")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("informative")
                        .long("informative")
                        .help("How many leading features carry class signal; the rest are noise")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("RNG seed, for reproducible datasets")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("42"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("select", sub_m)) => handle_select(sub_m),
        Some(("generate", sub_m)) => handle_generate(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_select(matches: &ArgMatches) -> Result<()> {
    let data: &PathBuf = matches.get_one("data").unwrap();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("Using config: {}", config_path.display());
        load_select_config(config_path)?
    } else {
        SelectConfig::default()
    };

    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config.strategy = SearchStrategy::from_str(strategy).map_err(anyhow::Error::msg)?;
    }
    if matches.get_flag("quiet") {
        config.show_trace = false;
    }

    if matches.get_one::<PathBuf>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        log::debug!("No config provided; effective config:\n{}", default_json);
    }

    run_select(data, &config)
}

fn handle_generate(matches: &ArgMatches) -> Result<()> {
    let output: &PathBuf = matches.get_one("output").unwrap();
    let config = GenerateConfig {
        instances: *matches.get_one::<usize>("instances").unwrap(),
        features: *matches.get_one::<usize>("features").unwrap(),
        informative: *matches.get_one::<usize>("informative").unwrap(),
        seed: *matches.get_one::<u64>("seed").unwrap(),
    };
    run_generate(output, &config)
}
