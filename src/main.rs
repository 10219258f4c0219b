use std::{fs, path::PathBuf, process::ExitCode};

use caesium::{LineResult, error::ErrorKind, interpreter::environment::Environment, run_line};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "Cs> ";

/// caesium evaluates boolean algebra, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the result of the provided expression and exit.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Evaluate every line of a file, printing each result.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut env = Environment::new();

    if let Some(expr) = args.expr {
        report(&run_line(&expr, &mut env));
        return ExitCode::SUCCESS;
    }

    if let Some(path) = args.file {
        let Ok(script) = fs::read_to_string(&path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        for line in script.lines() {
            let result = run_line(line, &mut env);
            if result == LineResult::Exit {
                break;
            }
            report(&result);
        }
        return ExitCode::SUCCESS;
    }

    match repl(&mut env) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Prints the outcome of one line. Blank lines and `exit` print nothing.
fn report(result: &LineResult) {
    match result {
        LineResult::Exit | LineResult::Error(ErrorKind::EmptyExpression, _) => {},
        other => println!("{other}"),
    }
}

fn repl(env: &mut Environment) -> rustyline::Result<()> {
    println!("{} v{} running on {}.\nPress Ctrl+C to exit.",
             env!("CARGO_PKG_NAME"),
             env!("CARGO_PKG_VERSION"),
             std::env::consts::OS);

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                let result = run_line(&line, env);
                if result == LineResult::Exit {
                    return Ok(());
                }
                report(&result);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
