//! Convert plain text quiz questions into the tab separated format used for
//! bulk uploading questions to an LMS.

#[macro_use]
mod regex;

pub mod language;
pub mod output;
pub mod parsing;
