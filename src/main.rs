use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use treediff::commands::compare::{Compare, CompareOptions, exit_code_for};

#[derive(Parser)]
#[command(
    name = "treediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two directory trees",
    long_about = "Recursively compares a source directory against a target directory and \
    reports every entry that is missing from the target, differs in size, or is a file on \
    one side and a directory on the other. File contents are never compared.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The source directory, every entry under it is checked")]
    source: PathBuf,
    #[arg(index = 2, help = "The target directory the source is compared against")]
    target: PathBuf,
    #[arg(
        short,
        long,
        help = "Configuration file (JSON, or TOML with a .toml extension) listing blacklistPatterns"
    )]
    config: Option<PathBuf>,
    #[arg(
        short,
        long = "exclude",
        value_name = "REGEX",
        help = "Additional blacklist pattern matched against relative paths (repeatable)"
    )]
    excludes: Vec<String>,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let options = CompareOptions::new(cli.source, cli.target)
        .with_config(cli.config)
        .with_excludes(cli.excludes);

    let mut compare = Compare::new(Box::new(std::io::stdout()), color);
    match compare.run(&options) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
