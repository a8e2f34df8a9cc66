use clap::Parser;
use paperdex::cli::commands::Cli;
use paperdex::cli::handlers;

fn main() {
    paperdex::logging::init();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
