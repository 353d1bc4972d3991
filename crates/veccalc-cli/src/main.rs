//! veccalc CLI
//!
//! Line-reading front end for the vector interpreter: prompt loop,
//! whitespace tokenizing, and the load-at-start / store-at-exit session
//! wrapper. All interpreter logic lives in `veccalc-core`.

use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use veccalc_core::logging::{self, Profile};
use veccalc_core::{apply, Command, VarStore};

#[derive(Debug, Parser)]
#[command(name = "veccalc")]
#[command(about = "Calculator shell for named 3D vectors", long_about = None)]
struct Cli {
    /// Path of the persisted variables file
    #[arg(long, default_value = "variables.txt")]
    file: PathBuf,

    /// Emit JSON logs instead of human-readable ones
    #[arg(long)]
    json_logs: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Run one session: load, read-eval-print until EOF, store
///
/// Load failures are fatal and happen before any command is read. The
/// final `store` runs regardless of how many commands failed in between.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut vars = VarStore::new();
    vars.load(&cli.file)?;

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                editor.add_history_entry(line)?;
                run_line(&mut vars, line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    vars.store(&cli.file)?;
    Ok(())
}

/// Dispatch boundary: every command-level failure becomes a printed line
/// and the session continues
fn run_line(vars: &mut VarStore, line: &str) {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return;
    };
    let args: Vec<&str> = words.collect();

    match Command::parse(keyword, &args).and_then(|command| apply(vars, command)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            debug!(code = e.code(), "command failed");
            println!("{}", e);
        }
    }
}
