//! Automatikz CLI - Convert JFLAP automaton files to TikZ/LaTeX diagrams

mod cli;

use clap::error::ErrorKind;
use clap::Parser;

fn main() {
    let cli_args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(_) => {
            // Bad or missing arguments: usage goes to stdout, exit code 1
            println!("Usage: automatikz <input.jff>");
            std::process::exit(1);
        }
    };

    let app = cli::AutomatikzApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
