use std::io::{self, Write};

fn main() {
    fairdeal_cli::logging::init_logging();

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = fairdeal_cli::run(std::env::args(), &mut out, &mut err);
    let _ = out.flush();
    std::process::exit(code);
}
