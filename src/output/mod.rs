//! Output generation: rows of tab separated fields, one per question

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::language::{Question, WritingError};
use crate::parsing::parser::ParsingError;

/// Appended to the input file's stem to name the output file.
pub const OUTPUT_SUFFIX: &str = "_tab_format.txt";

/// Derive the output filename: the input path with its extension replaced by
/// the suffix, so `quiz/week1.txt` becomes `quiz/week1_tab_format.txt`.
pub fn target(filename: &Path) -> PathBuf {
    let stem = filename
        .file_stem()
        .map(|stem| {
            stem.to_string_lossy()
                .into_owned()
        })
        .unwrap_or_default();

    filename.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Quote a field if it contains a tab, a double quote, or a line break, with
/// any embedded double quotes doubled. Everything else passes through as is.
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if field.contains(['\t', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render one question as a line of tab separated fields.
pub fn render_row(question: &Question) -> String {
    question
        .fields()
        .into_iter()
        .map(encode_field)
        .collect::<Vec<_>>()
        .join("\t")
}

/// Render every result as one line. A question that failed to parse becomes
/// an empty line so that rows still line up with the questions in the file.
pub fn render(results: &[Result<Question, ParsingError>]) -> String {
    let mut buffer = String::new();

    for result in results {
        match result {
            Ok(question) => buffer.push_str(&render_row(question)),
            Err(error) => debug!(index = error.index(), "Writing blank row"),
        }
        buffer.push('\n');
    }

    buffer
}

pub fn write<'i>(filename: &'i Path, content: &str) -> Result<(), WritingError<'i>> {
    match std::fs::write(filename, content) {
        Ok(()) => {
            info!("Wrote {}", filename.display());
            Ok(())
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::PermissionDenied => Err(WritingError {
                    problem: "Permission denied".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::NotFound => Err(WritingError {
                    problem: "Directory not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(WritingError {
                    problem: "Failed writing".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
