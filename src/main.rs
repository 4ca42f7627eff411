use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::handlers;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = handlers::launch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
