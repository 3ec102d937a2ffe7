//! Interactive columnar transposition demo.
//!
//! Usage:
//!   columnar             start the interactive session
//!   columnar --help      print usage
//!   columnar --version   print version
//!
//! Set RUST_LOG=debug to watch the validation flow on stderr.

use std::io;
use std::process::ExitCode;

use columnar_cipher::Session;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {}
        Some("--help" | "-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some("--version" | "-V") => {
            println!("columnar {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(arg) => {
            eprintln!("error: unknown argument '{}'", arg);
            print_usage();
            return ExitCode::from(1);
        }
    }

    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        r#"columnar — classical columnar transposition cipher

USAGE:
    columnar

Runs an interactive session: enter a plaintext (letters only) and a numeric
permutation key such as 31425, watch the encryption table and ciphertext,
optionally decrypt, repeat.

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version
"#
    );
}
