//! Types representing questions read from a quiz file

use std::fmt;

/// The six question kinds that can be uploaded. The kind of a block is
/// decided by the tag it starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    MultipleChoice,
    MultipleAnswer,
    TrueFalse,
    ShortReply,
    Ordering,
    Matching,
}

impl QuestionKind {
    /// Every kind, in the order their tags are to be tested. A tag that is a
    /// prefix of another tag must come after it ("MAT" before "MA").
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::Matching,
        QuestionKind::Ordering,
        QuestionKind::MultipleChoice,
        QuestionKind::MultipleAnswer,
        QuestionKind::TrueFalse,
        QuestionKind::ShortReply,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MC",
            QuestionKind::MultipleAnswer => "MA",
            QuestionKind::TrueFalse => "TF",
            QuestionKind::ShortReply => "SR",
            QuestionKind::Ordering => "ORD",
            QuestionKind::Matching => "MAT",
        }
    }

    /// Classify a block by its leading tag. Matching is case sensitive and
    /// anchored at the very start of the block.
    pub fn detect(block: &str) -> Option<QuestionKind> {
        QuestionKind::ALL
            .iter()
            .copied()
            .find(|kind| block.starts_with(kind.tag()))
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::MultipleAnswer => "multiple answer",
            QuestionKind::TrueFalse => "true/false",
            QuestionKind::ShortReply => "short reply",
            QuestionKind::Ordering => "ordering",
            QuestionKind::Matching => "matching",
        };
        f.write_str(name)
    }
}

/// One option of a multiple choice or multiple answer question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<'i> {
    pub label: &'i str,
    pub text: &'i str,
    pub correct: bool,
}

impl<'i> Choice<'i> {
    pub fn verdict(&self) -> &'static str {
        if self.correct {
            "correct"
        } else {
            "incorrect"
        }
    }
}

/// An item of a matching question and the answer it is to be matched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing<'i> {
    pub item: &'i str,
    pub answer: &'i str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question<'i> {
    MultipleChoice {
        text: String,
        choices: Vec<Choice<'i>>,
    },
    MultipleAnswer {
        text: String,
        choices: Vec<Choice<'i>>,
    },
    TrueFalse {
        text: String,
        answer: bool,
    },
    ShortReply {
        text: String,
    },
    Ordering {
        text: String,
        answers: Vec<&'i str>, // in the correct order
    },
    Matching {
        text: String,
        pairings: Vec<Pairing<'i>>,
    },
}

impl<'i> Question<'i> {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::MultipleAnswer { .. } => QuestionKind::MultipleAnswer,
            Question::TrueFalse { .. } => QuestionKind::TrueFalse,
            Question::ShortReply { .. } => QuestionKind::ShortReply,
            Question::Ordering { .. } => QuestionKind::Ordering,
            Question::Matching { .. } => QuestionKind::Matching,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { text, .. } => text,
            Question::MultipleAnswer { text, .. } => text,
            Question::TrueFalse { text, .. } => text,
            Question::ShortReply { text } => text,
            Question::Ordering { text, .. } => text,
            Question::Matching { text, .. } => text,
        }
    }

    /// The positional fields of the upload row for this question: the kind
    /// tag, the question text, then whatever the kind carries.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.kind()
                .tag(),
            self.text(),
        ];

        match self {
            Question::MultipleChoice { choices, .. } | Question::MultipleAnswer { choices, .. } => {
                for choice in choices {
                    fields.push(choice.text);
                    fields.push(choice.verdict());
                }
            }
            Question::TrueFalse { answer, .. } => {
                fields.push(if *answer { "true" } else { "false" });
            }
            Question::ShortReply { .. } => {}
            Question::Ordering { answers, .. } => {
                fields.extend(answers.iter().copied());
            }
            Question::Matching { pairings, .. } => {
                for pairing in pairings {
                    fields.push(pairing.item);
                    fields.push(pairing.answer);
                }
            }
        }

        fields
    }
}
