mod replay;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linkage_canvas::config::EditorConfig;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("script line {line}: {source}")]
    Script { line: usize, source: serde_json::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Config { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "linkage", about = "Replay pointer scripts through the linkage editor engine")]
struct Cli {
    /// JSON file with editor tunables; flags below override it.
    #[arg(long, env = "LINKAGE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "LINKAGE_WHEEL_RADIUS")]
    wheel_radius: Option<f64>,

    #[arg(long, env = "LINKAGE_HIT_SLOP")]
    hit_slop: Option<f64>,

    /// Log gesture transitions to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script and print the emitted events, history, and final scene.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    input: String,

    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Print only the history log, one entry per line.
    #[arg(long, default_value_t = false)]
    history_only: bool,

    /// Keep repaint requests in the reported event stream.
    #[arg(long, default_value_t = false)]
    include_render: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    match cli.command {
        Command::Replay(args) => run_replay(config, &args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

fn load_config(cli: &Cli) -> Result<EditorConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            EditorConfig::from_json(&raw).map_err(|source| CliError::Config { path: path.clone(), source })?
        }
        None => EditorConfig::default(),
    };
    if let Some(radius) = cli.wheel_radius {
        config.default_wheel_radius = radius;
    }
    if let Some(slop) = cli.hit_slop {
        config.hit_slop = slop;
    }
    tracing::debug!(?config, "editor config loaded");
    Ok(config)
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>, CliError> {
    if input == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(input)?)))
    }
}

fn run_replay(config: EditorConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let events = script::parse_script(open_input(&args.input)?)?;
    let report = replay::replay(&events, config, args.include_render);

    let mut out = io::stdout().lock();
    if args.history_only {
        for entry in &report.history {
            writeln!(out, "{:>4}  {}", entry.seq, entry.message)?;
        }
        return Ok(());
    }

    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}
