use anyhow::Context;
use clap::{Parser, Subcommand};
use folio::config::{ConfigError, Portfolio};
use folio::page::{html, Page};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Personal portfolio page with reveal-on-scroll")]
struct Cli {
    /// Path to portfolio.toml (defaults to the user config directory)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the built-in sample portfolio as a starting config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Render the page as a static HTML document
    Render {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Browse the page in the terminal
    View,
}

fn main() {
    folio::logging::init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::View) {
        Command::Init { force } => {
            let path = cli.config.unwrap_or_else(Portfolio::config_path);
            init(&path, force)?;
            println!("Wrote {}", path.display());
        }
        Command::Render { out } => {
            let portfolio = Portfolio::resolve(cli.config.as_deref())?;
            let document = html::render(&Page::build(&portfolio), &portfolio.reveal);
            match out {
                Some(path) => std::fs::write(&path, document)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?,
                None => std::io::stdout()
                    .lock()
                    .write_all(document.as_bytes())
                    .context("Failed to write to stdout")?,
            }
        }
        Command::View => {
            let portfolio = Portfolio::resolve(cli.config.as_deref())?;
            folio::ui::run(&portfolio).context("Terminal viewer failed")?;
        }
    }
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<(), ConfigError> {
    Portfolio::default().save_to(path, force)
}
