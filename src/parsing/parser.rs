use std::fmt;

use tracing::debug;

use crate::language::*;

/// Lines starting with this introduce an option.
pub const OPTION_MARKER: &str = "@@";

/// Lines starting with this introduce an answer.
pub const ANSWER_MARKER: &str = ">>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Option,
    Answer,
}

impl Marker {
    pub fn symbol(&self) -> &'static str {
        match self {
            Marker::Option => OPTION_MARKER,
            Marker::Answer => ANSWER_MARKER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    MissingMarker(usize, QuestionKind, Marker),
    InvalidAnswerLiteral(usize, String),
    MismatchedCount(usize, usize, usize), // options, answers
}

impl ParsingError {
    /// Position of the offending block within the file.
    pub fn index(&self) -> usize {
        match self {
            ParsingError::MissingMarker(index, _, _) => *index,
            ParsingError::InvalidAnswerLiteral(index, _) => *index,
            ParsingError::MismatchedCount(index, _, _) => *index,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::MissingMarker(_, _, Marker::Option) => {
                format!("No options starting with {} found.", OPTION_MARKER)
            }
            ParsingError::MissingMarker(_, QuestionKind::TrueFalse, Marker::Answer) => {
                format!(
                    "No true/false answer starting with {} found.",
                    ANSWER_MARKER
                )
            }
            ParsingError::MissingMarker(_, _, Marker::Answer) => {
                format!("No answers starting with {} found.", ANSWER_MARKER)
            }
            ParsingError::InvalidAnswerLiteral(_, _) => {
                "The answer needs to be 'true' or 'false'.".to_string()
            }
            ParsingError::MismatchedCount(_, _, _) => format!(
                "Number of choices with {} does not equal number of answers with {}.",
                OPTION_MARKER, ANSWER_MARKER
            ),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ParsingError {}

/// Parse one question block. Blocks that don't start with a known tag are
/// not an error; they yield no question at all.
pub fn parse_question(index: usize, block: &str) -> Result<Option<Question<'_>>, ParsingError> {
    let kind = match QuestionKind::detect(block) {
        Some(kind) => kind,
        None => {
            debug!(index, "No recognizable tag, skipping block");
            return Ok(None);
        }
    };

    let mut input = Parser::new();
    input.initialize(index, block);

    let question = match kind {
        QuestionKind::MultipleChoice => input.read_multiple_choice()?,
        QuestionKind::MultipleAnswer => input.read_multiple_answer()?,
        QuestionKind::TrueFalse => input.read_true_false()?,
        QuestionKind::ShortReply => input.read_short_reply()?,
        QuestionKind::Ordering => input.read_ordering()?,
        QuestionKind::Matching => input.read_matching()?,
    };

    debug!(index, %kind, "Parsed question");
    Ok(Some(question))
}

#[derive(Debug)]
pub struct Parser<'i> {
    index: usize,
    source: &'i str,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            index: 0,
            source: "",
        }
    }

    pub fn initialize(&mut self, index: usize, content: &'i str) {
        self.index = index;
        self.source = content;
    }

    /// Offset just past the tag, any digits numbering the question, and an
    /// optional trailing period.
    fn skip_tag(&self, kind: QuestionKind) -> usize {
        let rest = self
            .source
            .strip_prefix(kind.tag())
            .unwrap_or(self.source);
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
        let rest = rest
            .strip_prefix('.')
            .unwrap_or(rest);

        self.source
            .len()
            - rest.len()
    }

    /// Every line beginning with the given marker, as the byte offset of the
    /// start of that line paired with the trimmed text following the marker.
    /// A marker alone on a line doesn't count.
    fn marker_lines(&self, marker: Marker) -> Vec<(usize, &'i str)> {
        let symbol = marker.symbol();
        let mut found = Vec::new();
        let mut offset = 0;

        for line in self
            .source
            .split_inclusive('\n')
        {
            let content = line.trim_end_matches(['\n', '\r']);
            if let Some(rest) = content.strip_prefix(symbol) {
                if !rest.is_empty() {
                    found.push((offset, rest.trim()));
                }
            }
            offset += line.len();
        }

        found
    }

    fn require_marker(
        &self,
        kind: QuestionKind,
        marker: Marker,
    ) -> Result<Vec<(usize, &'i str)>, ParsingError> {
        let lines = self.marker_lines(marker);
        if lines.is_empty() {
            return Err(ParsingError::MissingMarker(self.index, kind, marker));
        }
        Ok(lines)
    }

    /// The question text runs from after the tag up to the first marker line
    /// (or to the end of the block).
    fn question_text(&self, kind: QuestionKind, end: usize) -> String {
        let start = self.skip_tag(kind);
        let end = end.max(start);

        collapse(&self.source[start..end])
    }

    pub fn read_multiple_choice(&mut self) -> Result<Question<'i>, ParsingError> {
        let kind = QuestionKind::MultipleChoice;
        let options = self.require_marker(kind, Marker::Option)?;
        let answers = self.require_marker(kind, Marker::Answer)?;

        let text = self.question_text(kind, options[0].0);
        let answer = answers[0].1;

        let choices = options
            .into_iter()
            .map(|(_, option)| {
                let (label, text) = split_label(option);
                Choice {
                    label,
                    text,
                    correct: label == answer,
                }
            })
            .collect();

        Ok(Question::MultipleChoice { text, choices })
    }

    pub fn read_multiple_answer(&mut self) -> Result<Question<'i>, ParsingError> {
        let kind = QuestionKind::MultipleAnswer;
        let options = self.require_marker(kind, Marker::Option)?;
        let answers: Vec<&str> = self
            .require_marker(kind, Marker::Answer)?
            .into_iter()
            .map(|(_, answer)| answer)
            .collect();

        let text = self.question_text(kind, options[0].0);

        let choices = options
            .into_iter()
            .map(|(_, option)| {
                let (label, text) = split_label(option);
                Choice {
                    label,
                    text,
                    correct: answers.contains(&label),
                }
            })
            .collect();

        Ok(Question::MultipleAnswer { text, choices })
    }

    pub fn read_true_false(&mut self) -> Result<Question<'i>, ParsingError> {
        let kind = QuestionKind::TrueFalse;
        let answers = self.require_marker(kind, Marker::Answer)?;

        let text = self.question_text(kind, answers[0].0);
        let literal = answers[0].1;

        let answer = match literal
            .to_lowercase()
            .as_str()
        {
            "true" => true,
            "false" => false,
            _ => {
                return Err(ParsingError::InvalidAnswerLiteral(
                    self.index,
                    literal.to_string(),
                ))
            }
        };

        Ok(Question::TrueFalse { text, answer })
    }

    pub fn read_short_reply(&mut self) -> Result<Question<'i>, ParsingError> {
        let text = self.question_text(
            QuestionKind::ShortReply,
            self.source
                .len(),
        );

        Ok(Question::ShortReply { text })
    }

    pub fn read_ordering(&mut self) -> Result<Question<'i>, ParsingError> {
        let kind = QuestionKind::Ordering;
        let answers = self.require_marker(kind, Marker::Answer)?;

        let text = self.question_text(kind, answers[0].0);
        let answers = answers
            .into_iter()
            .map(|(_, answer)| answer)
            .collect();

        Ok(Question::Ordering { text, answers })
    }

    pub fn read_matching(&mut self) -> Result<Question<'i>, ParsingError> {
        let kind = QuestionKind::Matching;
        let items = self.require_marker(kind, Marker::Option)?;
        let answers = self.require_marker(kind, Marker::Answer)?;

        if items.len() != answers.len() {
            return Err(ParsingError::MismatchedCount(
                self.index,
                items.len(),
                answers.len(),
            ));
        }

        let text = self.question_text(kind, items[0].0);
        let pairings = items
            .into_iter()
            .zip(answers)
            .map(|((_, item), (_, answer))| Pairing { item, answer })
            .collect();

        Ok(Question::Matching { text, pairings })
    }
}

/// Split an option into its label (the token up to the first whitespace) and
/// the text of the choice.
fn split_label(option: &str) -> (&str, &str) {
    match option.find(char::is_whitespace) {
        Some(i) => (&option[..i], option[i..].trim()),
        None => (option, ""),
    }
}

/// Collapse line breaks into single spaces, dropping blank lines and
/// surrounding whitespace.
fn collapse(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
