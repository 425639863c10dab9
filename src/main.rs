use std::{error::Error, fs, path::Path, process::ExitCode};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use gleam::{evaluate, evaluate_script, help, interpreter::environment::Environment};
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "gleam> ";

/// gleam is an interactive evaluator for a tiny s-expression language.
///
/// Without arguments it starts a read-eval-print loop. All expressions of one
/// invocation share a single environment, so names bound with `define` stay
/// visible to later lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates an expression, prints the result and exits. May be repeated.
    #[arg(short, long, value_name = "EXPR", conflicts_with = "file")]
    eval: Vec<String>,

    /// Evaluates a script file line by line instead of starting the REPL.
    #[arg(short, long, value_name = "PATH")]
    file: Option<std::path::PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(args.verbose.log_level_filter())
                              .parse_default_env()
                              .init();

    let mut env = Environment::new();

    let outcome = if let Some(path) = &args.file {
        run_file(path, &mut env)
    } else if args.eval.is_empty() {
        repl(&mut env)
    } else {
        for expr in &args.eval {
            println!("{}", evaluate(expr, &mut env));
        }
        Ok(())
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates every non-blank line of a script file in order.
fn run_file(path: &Path, env: &mut Environment) -> Result<(), Box<dyn Error>> {
    let script = fs::read_to_string(path).map_err(|e| {
                                             format!("failed to read the input file '{}': {e}",
                                                     path.display())
                                         })?;

    for output in evaluate_script(&script, env) {
        println!("{output}");
    }

    Ok(())
}

/// Reads lines until end of input, printing the result of each one.
///
/// Blank lines are skipped. `Ctrl-C` drops the current line, `Ctrl-D` or
/// `:quit` ends the session.
fn repl(env: &mut Environment) -> Result<(), Box<dyn Error>> {
    let mut editor = DefaultEditor::new()?;
    log::info!("starting session");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        editor.add_history_entry(trimmed)?;

        match trimmed {
            ":quit" => break,
            ":env" if !env.is_empty() => println!("{env}"),
            ":env" => {},
            ":help" => println!("{}", help()),
            _ => println!("{}", evaluate(&line, env)),
        }
    }

    log::info!("session ended with {} binding(s)", env.len());
    Ok(())
}
