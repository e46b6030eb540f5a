use quiztab::language::QuestionKind;
use quiztab::parsing::parser::{Marker, ParsingError, ANSWER_MARKER, OPTION_MARKER};

/// A well formed question of the given kind, for showing alongside errors.
fn example_of(kind: QuestionKind) -> &'static str {
    let example = match kind {
        QuestionKind::MultipleChoice => {
            r#"
MC1. What is the capital of France?
@@A Paris
@@B Lyon
>>A
            "#
        }
        QuestionKind::MultipleAnswer => {
            r#"
MA2. Which of these are prime?
@@A 2
@@B 4
@@C 5
>>A
>>C
            "#
        }
        QuestionKind::TrueFalse => {
            r#"
TF3. The sky is blue.
>>true
            "#
        }
        QuestionKind::ShortReply => {
            r#"
SR4. Describe the water cycle.
            "#
        }
        QuestionKind::Ordering => {
            r#"
ORD5. Put these in order, smallest first.
>>ant
>>cat
>>horse
            "#
        }
        QuestionKind::Matching => {
            r#"
MAT6. Match each country with its capital.
@@ France
@@ Japan
>> Paris
>> Tokyo
            "#
        }
    };

    example.trim_ascii()
}

/// Generate problem and detail messages for a question that failed to parse
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    let problem = error.message();

    let details = match error {
        ParsingError::MissingMarker(_, kind, Marker::Option) => format!(
            r#"
A {} question lists its options one per line, each line starting with
{}. For example:

{}
            "#,
            kind,
            OPTION_MARKER,
            example_of(*kind)
        ),
        ParsingError::MissingMarker(_, kind, Marker::Answer) => format!(
            r#"
A {} question gives its answers one per line, each line starting with
{}. For example:

{}
            "#,
            kind,
            ANSWER_MARKER,
            example_of(*kind)
        ),
        ParsingError::InvalidAnswerLiteral(_, literal) => format!(
            r#"
The answer to a true/false question was '{}'. Upper or lower case are both
fine but it must be one of the words true or false. For example:

{}
            "#,
            literal,
            example_of(QuestionKind::TrueFalse)
        ),
        ParsingError::MismatchedCount(_, options, answers) => format!(
            r#"
Found {} item{} to be matched but {} answer{}. The items and their answers
are paired up in the order they are written, so there must be the same number
of each. For example:

{}
            "#,
            options,
            if *options == 1 { "" } else { "s" },
            answers,
            if *answers == 1 { "" } else { "s" },
            example_of(QuestionKind::Matching)
        ),
    };

    (
        problem,
        details
            .trim_ascii()
            .to_string(),
    )
}
