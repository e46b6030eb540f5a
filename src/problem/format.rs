use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;
use quiztab::{
    language::{LoadingError, WritingError},
    parsing::{parser::ParsingError, Block},
};

/// How much of a question to show when reporting a problem with it.
const EXCERPT_LENGTH: usize = 100;

/// Format a parsing error with full details, including the start of the
/// question it came from.
pub fn full_parsing_error(error: &ParsingError, filename: &Path, block: &Block) -> String {
    let (problem, details) = generate_error_message(error);
    let line = block.line + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{} question {}: {}

{:width$} {}
{:width$} {} {}
{:width$} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        block.index + 1,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        excerpt(&block.text),
        ' ',
        '|'.bright_blue(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut message = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        message.push_str(&format!(" ({})", error.details));
    }
    message
}

/// Format a WritingError with concise single-line output
pub fn concise_writing_error<'i>(error: &WritingError<'i>) -> String {
    let mut message = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        message.push_str(&format!(" ({})", error.details));
    }
    message
}

// The leading part of a question on a single line, cut at a character
// boundary.
fn excerpt(text: &str) -> String {
    let flat = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    match flat.char_indices().nth(EXCERPT_LENGTH) {
        Some((i, _)) => format!("{}...", &flat[..i]),
        None => flat,
    }
}
