//! recintos CLI
//!
//! Evaluates one placement request against the standard zoo or a JSON
//! inventory and prints the viable enclosures.

use std::path::PathBuf;
use std::process::ExitCode;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use recintos::{QuantityInput, Query, ViableEnclosure, ZooCatalog, ZooResult};

/// CLI configuration
struct Config {
    /// Requested species
    species: String,
    /// Requested quantity, unvalidated
    quantity: QuantityInput,
    /// Optional inventory file
    config_path: Option<PathBuf>,
    /// Emit JSON instead of text
    json: bool,
}

fn print_help() {
    println!("recintos - zoo enclosure eligibility");
    println!();
    println!("USAGE:");
    println!("    recintos [OPTIONS] <ESPECIE> <QUANTIDADE>");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>       JSON inventory [default: built-in zoo]");
    println!("    -j, --json                Print JSON output");
    println!("    -h, --help                Print help information");
}

fn parse_quantity(raw: &str) -> QuantityInput {
    serde_json::from_str::<serde_json::Value>(raw)
        .map_or_else(|_| QuantityInput::from(raw), QuantityInput::from)
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    return Err("--config requires a value".to_string());
                };
                config_path = Some(PathBuf::from(path));
                i += 2;
            }
            "--json" | "-j" => {
                json = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if arg.starts_with("--") => {
                return Err(format!("unknown argument: {arg}"));
            }
            arg => {
                positional.push(arg.to_string());
                i += 1;
            }
        }
    }

    let [species, quantity] = <[String; 2]>::try_from(positional)
        .map_err(|_| "expected <ESPECIE> <QUANTIDADE>".to_string())?;

    Ok(Config {
        species,
        quantity: parse_quantity(&quantity),
        config_path,
        json,
    })
}

fn run(config: &Config) -> ZooResult<Vec<ViableEnclosure>> {
    let query = Query {
        species: config.species.clone(),
        quantity: config.quantity.clone(),
    };
    ZooCatalog::evaluate_inventory(config.config_path.as_deref(), &query)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(1);
        }
    };

    match run(&config) {
        Ok(viable) => {
            let lines: Vec<String> = viable.iter().map(ToString::to_string).collect();
            if config.json {
                println!("{}", json!({ "recintosViaveis": lines }));
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => match e.legacy_message() {
            Some(message) => {
                tracing::debug!(error = %e, "query failed");
                if config.json {
                    println!("{}", json!({ "erro": message }));
                } else {
                    eprintln!("{message}");
                }
                ExitCode::from(2)
            }
            None => {
                eprintln!("error: {e}");
                ExitCode::from(1)
            }
        },
    }
}
