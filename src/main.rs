use status_line::{status, StatusLine};

use clap::Parser;
use std::error::Error;
use std::io::{self, Stderr, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
/// Count through a few steps on a single status line
struct Config {
    /// Number of steps to run
    #[arg(long, default_value_t = 15)]
    total: u32,
    /// Pause between steps in milliseconds
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,
    /// Draw the status line on stderr instead of stdout
    #[arg(long)]
    stderr: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    // diagnostics stay on stderr, away from the status line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("start"); // printed whether or not stdout is a terminal

    if config.stderr {
        let line: StatusLine<Stderr> = StatusLine::with_default(io::stderr);
        run(&line, &config).await?;
    } else {
        let line: StatusLine<Stdout> = StatusLine::new();
        run(&line, &config).await?;
    }

    println!("finish");
    Ok(())
}

/// Step through `config.total` updates, then move past the status line
async fn run<W>(line: &StatusLine<W>, config: &Config) -> io::Result<()>
where
    W: status_line::Terminal,
{
    let interactive = line.is_interactive();
    tracing::debug!(interactive, total = config.total, "starting");
    for i in 0..config.total {
        let word = if i % 2 == 0 { "even" } else { "odd" };
        // only shows up when the output is a terminal, try redirecting it to a file
        status!(line, "step {} ({}), {} left to do", i, word, config.total - i)?;
        tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
    }
    line.done()
}
