//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = foodpermit_cli::run() {
        eprintln!("foodpermit: {err}");
        std::process::exit(1);
    }
}
