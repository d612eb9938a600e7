use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use chainscript::{
    display_error,
    interpreter::value::{Scope, Value},
    run,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map_or("chainscript", String::as_str));
        return ExitCode::from(2);
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if let Err(error) = run(&source, Some(String::from(file_name)), &demo_scope()) {
        display_error(&error, &source, file_name);
        return ExitCode::FAILURE;
    }

    tracing::info!(elapsed = ?start.elapsed(), "finished");
    ExitCode::SUCCESS
}

fn print_args(args: &[Option<Value>]) {
    let line = args
        .iter()
        .map(|arg| match arg {
            Some(value) => value.to_string(),
            None => String::from("undefined"),
        })
        .collect::<Vec<String>>()
        .join(" ");

    println!("{}", line);
}

/// Scope exposed to scripts run from the command line.
///
/// `myConsole.log` returns a function, which returns another function, so
/// `myConsole.log("x")()()` prints three times.
fn demo_scope() -> Scope {
    let log = Value::function("log", |args| {
        print_args(args);
        println!("done printing");

        Some(Value::function("logContinuation", |_| {
            println!("chained call on the returned function");

            Some(Value::function("logFinal", |_| {
                println!("third call in the chain");
                None
            }))
        }))
    });

    Scope::new()
        .with("myConsole", Scope::new().with("log", log))
        .with(
            "testLog",
            Value::function("testLog", |args| {
                print_args(args);
                None
            }),
        )
        .with("globalValue", "hello world")
}
