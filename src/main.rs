mod cli;

use std::io;

use clap::Parser;
use logpuzzle::logging;

use crate::cli::Cli;

fn main() {
    if std::env::args_os().len() < 2 {
        eprint!("{}", cli::usage());
        std::process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(err) = logging::init_logging() {
        eprintln!("logpuzzle: {:#}", err);
    }

    let stdout = io::stdout();

    if let Err(err) = cli.run(&mut stdout.lock()) {
        eprintln!("logpuzzle error: {:#}", err);
        std::process::exit(1);
    }
}
