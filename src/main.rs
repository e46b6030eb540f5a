use clap::{Arg, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quiztab::{output, parsing};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("quiztab")
        .version(VERSION)
        .about("Converts a text file of questions into tab separated format for uploading to an LMS.")
        .arg(
            Arg::new("filename")
                .value_name("input_file")
                .required(true)
                .help("Path to the input text file containing the questions."),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let filename = match matches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("usage: quiztab <input_file>");
            std::process::exit(1);
        }
    };

    debug!(?filename);

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let blocks = parsing::prepare(&content);
    let results = parsing::parse(&blocks);

    for result in &results {
        if let Err(error) = result {
            match blocks.get(error.index()) {
                Some(block) => {
                    eprintln!("{}\n", problem::full_parsing_error(error, filename, block))
                }
                None => eprintln!("{}\n", error),
            }
        }
    }

    let target = output::target(filename);
    let rows = output::render(&results);

    if let Err(error) = output::write(&target, &rows) {
        eprintln!("{}", problem::concise_writing_error(&error));
        std::process::exit(1);
    }

    println!("Wrote formatted questions to {}.", target.display());
}
