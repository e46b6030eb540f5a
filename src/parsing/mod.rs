//! reading quiz files and parsing the questions within them

use std::path::Path;
use tracing::{debug, info};

use crate::language::{LoadingError, Question};
use crate::parsing::parser::ParsingError;

pub mod parser;

/// Separates one question from the next.
pub const BLOCK_DELIMITER: &str = "%%";

/// One question's worth of text, with comments already removed, along with
/// its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub line: usize, // zero-origin line the block starts on
    pub text: String,
}

/// Read a file and return an owned String. Ownership goes back to the caller
/// so that the blocks and questions derived from it can borrow from it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => {
            info!("Loaded {}", filename.display());
            Ok(content)
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: "file is not valid UTF-8".to_string(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Replace curly double and single quotes with their straight equivalents.
pub fn normalize_quotes(content: &str) -> String {
    content
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace('\u{2019}', "'")
}

/// Remove every ##...## comment span. Comments may run across lines; an
/// unpaired ## is left alone.
pub fn strip_comments(text: &str) -> String {
    let re = regex!(r"(?s)##.*?##");

    re.replace_all(text, "")
        .into_owned()
}

/// Split the file content into question blocks, ready for parsing.
pub fn prepare(content: &str) -> Vec<Block> {
    let content = normalize_quotes(content);

    let mut blocks = Vec::new();
    let mut line = 0;

    for (index, text) in content
        .split(BLOCK_DELIMITER)
        .enumerate()
    {
        blocks.push(Block {
            index,
            line,
            text: strip_comments(text),
        });
        line += calculate_line_count(text);
    }

    debug!(
        "Found {} block{}",
        blocks.len(),
        if blocks.len() == 1 { "" } else { "s" }
    );

    blocks
}

fn calculate_line_count(content: &str) -> usize {
    content
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

/// Parse every block in order. Blocks without a recognizable tag are dropped;
/// failures are kept in place so the caller can report them and preserve row
/// positions.
pub fn parse(blocks: &[Block]) -> Vec<Result<Question<'_>, ParsingError>> {
    let results: Vec<_> = blocks
        .iter()
        .filter_map(|block| parser::parse_question(block.index, &block.text).transpose())
        .collect();

    let errors = results
        .iter()
        .filter(|result| result.is_err())
        .count();

    debug!(
        "Parsed {} question{}, {} with errors",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        errors
    );

    results
}
