use std::{fs, process::ExitCode};

use clap::Parser;
use reckon::{evaluate, interpreter::evaluator::Evaluator};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates arithmetic expressions with variables.
///
/// Without arguments it starts an interactive session in which variables
/// persist from one line to the next.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// The program to evaluate, or the path to it with `--file`.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RECKON_LOG controls the log level, defaulting to warnings only.
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    match args.contents {
        Some(contents) if args.file => run_file(&contents),
        Some(source) => run_source(&source),
        None => run_repl(),
    }
}

fn run_file(path: &str) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };
    debug!(path, bytes = source.len(), "loaded file");

    // An empty file is not a program, but there is nothing to report either.
    if source.trim().is_empty() {
        return ExitCode::SUCCESS;
    }

    run_source(&source)
}

fn run_source(source: &str) -> ExitCode {
    match evaluate(source, &mut Evaluator::new()) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_repl() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut session = Evaluator::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!("could not record history: {e}");
                }

                match evaluate(&line, &mut session) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    debug!(variables = session.memory().len(), "session ended");
    ExitCode::SUCCESS
}
