use clap::{Parser, Subcommand};
use hslex::{
    harness::{Scenario, ScenarioRegistry},
    Error, Tokenizer, TokenizerConfig,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokenize {
        file: PathBuf,

        /// Path to a tokenizer config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the scenarios of a JSON fixture file
    Check { fixtures: PathBuf },
}

/// Returns whether everything succeeded.
fn run(cli: &Cli) -> Result<bool, Error> {
    match &cli.command {
        Command::Tokenize { file, config, json } => {
            let config = match config {
                Some(path) => TokenizerConfig::from_file(path)?,
                None => TokenizerConfig::default(),
            };
            debug!("config: {:?}", config);

            let source = std::fs::read(file)?;
            let tokens = Tokenizer::new(config).tokenize_bytes(&source)?;
            info!(count = tokens.len(), "tokenized {}", file.display());

            if *json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{}:{}\t{}", token.span.line, token.span.column, token);
                }
            }
            Ok(true)
        }
        Command::Check { fixtures } => {
            let mut registry = ScenarioRegistry::new();
            for scenario in Scenario::load_all(fixtures)? {
                registry.register_scenario(scenario);
            }

            let report = registry.run_all();
            println!("{report}");
            Ok(report.all_passed())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
