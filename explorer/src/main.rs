//! Interactive command-line file explorer.
//!
//! Presents a numbered menu on stdout, reads choices from stdin, and runs one
//! filesystem operation per choice against a session-owned working directory.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use explorer::exit_codes;
use explorer::io::config::{ExplorerConfig, load_config};
use explorer::io::console::{Console, ConsoleOptions};
use explorer::io::op_log::OpLog;
use explorer::io::ops::open_working_dir;
use explorer::logging;
use explorer::session::{Session, SessionOptions};

#[derive(Parser)]
#[command(
    name = "explorer",
    version,
    about = "Interactive command-line file explorer"
)]
struct Cli {
    /// Starting directory (defaults to the current directory).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Config file; a missing file means defaults.
    #[arg(long, default_value = "explorer.toml")]
    config: PathBuf,

    /// Operation log file (overrides `log_file`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Skip the "Please wait" delay before delete, rename and copy.
    #[arg(long)]
    no_pacing: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Skip the welcome banner.
    #[arg(long)]
    no_banner: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, cfg: &mut ExplorerConfig) {
        if let Some(log_file) = &self.log_file {
            cfg.log_file = log_file.clone();
        }
        if self.no_pacing {
            cfg.pacing_ms = 0;
        }
        if self.no_color {
            cfg.color = false;
        }
        if self.no_banner {
            cfg.show_banner = false;
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let mut cfg = load_config(&cli.config)?;
    cli.apply(&mut cfg);
    cfg.validate()?;

    let start = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("read current directory")?,
    };
    let cwd = open_working_dir(&start, cfg.max_path_bytes)
        .with_context(|| format!("open start directory {}", start.display()))?;
    let log = OpLog::new(cfg.log_path(cwd.as_path()));
    debug!(cwd = %cwd, log = %log.path().display(), "starting session");

    let stdin = io::stdin();
    let console = Console::new(
        stdin.lock(),
        io::stdout(),
        ConsoleOptions {
            color: cfg.color,
            pacing: Duration::from_millis(cfg.pacing_ms),
        },
    );
    let mut session = Session::new(
        console,
        cwd,
        log,
        SessionOptions {
            delete_recursive: cfg.delete_recursive,
        },
    );
    if cfg.show_banner {
        session.welcome()?;
    }
    session.run()
}
