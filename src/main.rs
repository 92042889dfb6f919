use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arith_quiz::console::run_practice;
use arith_quiz::protocol::Record;
use arith_quiz::stats::measure_fairness;
use arith_quiz::{
    Generator, GeneratorConfig, OperationKind, PracticeSession, RngSource, load_config_from_json,
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with operand ranges and decoy spreads
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible questions
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print freshly generated questions
    Generate {
        #[arg(short, long, default_value = "multiplication")]
        operation: OperationKind,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Answer questions interactively on stdin
    Practice {
        #[arg(short, long, default_value = "multiplication")]
        operation: OperationKind,
    },

    /// Measure where the correct answer lands after shuffling
    Fairness {
        /// Operation to measure; all four when omitted
        #[arg(short, long)]
        operation: Option<OperationKind>,

        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the active configuration as JSON
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => load_config_from_json(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let generator = Generator::new(config)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "Using seeded random source");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate {
            operation,
            count,
            format,
        } => {
            for _ in 0..count {
                let question = generator.generate(operation, &mut rng)?;
                match format {
                    Format::Text => writeln!(
                        out,
                        "{}  {:?}  answer {}",
                        question.prompt(),
                        question.options(),
                        question.correct_answer()
                    )?,
                    Format::Json => writeln!(out, "{}", Record::from(&question).to_json_line()?)?,
                }
            }
        }
        Command::Practice { operation } => {
            let mut session = PracticeSession::start(generator, operation, &mut rng)?;
            writeln!(
                out,
                "{} practice: pick A-D (or 1-4), j/k to move, enter to submit, q to quit",
                operation
            )?;
            run_practice(&mut session, io::stdin().lock(), &mut out, &mut rng)?;
        }
        Command::Fairness {
            operation,
            samples,
            format,
        } => {
            let operations = match operation {
                Some(operation) => vec![operation],
                None => OperationKind::ALL.to_vec(),
            };
            for operation in operations {
                report_fairness(&generator, operation, samples, format, &mut rng, &mut out)?;
            }
        }
        Command::Config => {
            writeln!(out, "{}", serde_json::to_string_pretty(generator.config())?)?;
        }
    }

    info!("Done");
    Ok(())
}

fn report_fairness<W: Write>(
    generator: &Generator,
    operation: OperationKind,
    samples: usize,
    format: Format,
    rng: &mut RngSource<StdRng>,
    out: &mut W,
) -> Result<()> {
    let counts = measure_fairness(generator, operation, samples, rng)?;

    match format {
        Format::Text => {
            let shares: Vec<String> = counts
                .shares()
                .iter()
                .map(|share| format!("{:5.1}%", share * 100.0))
                .collect();
            writeln!(
                out,
                "{:<15} {:>7} samples  {}  max deviation {:.2}%",
                operation.name(),
                counts.samples(),
                shares.join(" "),
                counts.max_deviation() * 100.0
            )?;
        }
        Format::Json => {
            writeln!(out, "{}", Record::fairness(operation, &counts).to_json_line()?)?;
        }
    }

    Ok(())
}
