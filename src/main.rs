use std::env;

use jytter::{cli, exits};

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}
