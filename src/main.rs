use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use arith::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

const BANNER: &str = r#"Simple REPL shell. Type "help" for help, or "exit" to exit the shell."#;

const HELP: &str = "\
A simple interpreter that can calculate arbitrarily nested mathematical expressions.
It supports:
- operators +, -, *, /, %.
- variable assignments, e.g. x = 1 or x = 1 + 1
- variable value retrieval
- operation nesting";

fn main() -> Result<(), String> {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        run_repl().map_err(|err| err.to_string())?;
    } else {
        run_script(&args[1])?
    }
    Ok(())
}

/// Logging goes to stderr and is only set up when `RUST_LOG` is present.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_result(interpreter: &mut Interpreter, line: &str) {
    match interpreter.interpret(line) {
        Ok(Some(value)) => println!("{value:?}"),
        Ok(None) => {}
        Err(err) => println!("{err}"),
    }
}

fn run_script(filename: &str) -> Result<(), String> {
    let lines = read_lines(filename)
        .map_err(|err| format!("{filename} could not be opened: {err}"))?;
    let mut interpreter = Interpreter::new();
    for line in lines {
        let line = line.map_err(|err| format!("{filename} could not be read: {err}"))?;
        print_result(&mut interpreter, &line);
    }
    Ok(())
}

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut interpreter = Interpreter::new();
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    println!("{BANNER}");
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                if line.contains("exit") {
                    break;
                }
                if line.contains("help") {
                    println!("{HELP}");
                    continue;
                }
                print_result(&mut interpreter, &line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}
