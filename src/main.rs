//! The Monkey programming language interpreter CLI.
//!
//! This binary provides `monkey repl` and `monkey run` commands. The
//! interpreter itself lives in the library crate; this is just the
//! argument parsing and process-exit-code plumbing around it.

use clap::{Parser, Subcommand};
use monkey::repl;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "The Monkey programming language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt.
    Repl,
    /// Run a Monkey source file.
    Run {
        /// The source file to run (e.g., `hello.monkey`).
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(err) = repl::start(stdin.lock(), stdout.lock()) {
                eprintln!("repl error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Run { file } => {
            if let Err(error) = monkey::driver::run_file(&file) {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        }
    }
}
