//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = mutirao_cli::run() {
        eprintln!("mutirao: {err}");
        std::process::exit(1);
    }
}
