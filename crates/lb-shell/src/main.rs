//! `lb-shell` binary: reads simulator commands from stdin.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lb_shell::{Command, Shell, logging};

#[derive(Parser)]
#[command(name = "lb-shell", version, about = "Ladybug behavior-tree simulator shell")]
struct Args {
    /// Board file to load before reading commands.
    #[arg(long, value_name = "PATH")]
    board: Option<PathBuf>,

    /// Tree files to load after the board, assigned to ladybugs in order.
    #[arg(long, value_name = "PATH", num_args = 1.., requires = "board")]
    trees: Vec<PathBuf>,

    /// Tracing filter, e.g. `debug` or `lb_behavior=debug`.  Overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level.as_deref())?;

    let mut shell = Shell::new(io::stdout().lock(), io::stderr());
    if let Some(board) = args.board {
        shell
            .execute(Command::LoadBoard(board))
            .context("preload board")?;
    }
    if !args.trees.is_empty() {
        shell
            .execute(Command::LoadTrees(args.trees))
            .context("preload trees")?;
    }

    shell.run(io::stdin().lock()).context("read commands")?;
    Ok(())
}
