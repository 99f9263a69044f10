use std::env;

use meetpass::{cli, exits};

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    let code = cli::run(args);

    // process::exit still runs atexit cleanup
    std::process::exit(code);
}
