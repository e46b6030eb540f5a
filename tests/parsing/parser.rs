#[cfg(test)]
mod verify {
    use quiztab::language::*;
    use quiztab::parsing::parser::parse_question;
    use quiztab::parsing::{self, Block};

    fn fields(block: &str) -> Vec<String> {
        parse_question(0, block)
            .expect("question should parse")
            .expect("question should be recognized")
            .fields()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn multiple_choice_capital() {
        assert_eq!(
            fields("MC. Capital of France?\n@@A Paris\n@@B Lyon\n>>A"),
            vec!["MC", "Capital of France?", "Paris", "correct", "Lyon", "incorrect"]
        );
    }

    #[test]
    fn multiple_choice_field_count() {
        let block = r#"
MC7. Which is largest?
@@A one
@@B ten
@@C hundred
@@D thousand
@@E million
>>E
        "#
        .trim_ascii();

        let row = fields(block);
        assert_eq!(row.len(), 2 + 2 * 5);
        assert_eq!(
            row.iter()
                .filter(|field| *field == "correct")
                .count(),
            1
        );
    }

    #[test]
    fn multiple_answer_subsets() {
        let block = "MA. Vowels?\n@@A a\n@@B b\n@@C e\n@@D d\n>>A\n>>C";
        let row = fields(block);
        assert_eq!(
            row[2..]
                .iter()
                .skip(1)
                .step_by(2)
                .collect::<Vec<_>>(),
            vec!["correct", "incorrect", "correct", "incorrect"]
        );

        let none = fields("MA. None apply\n@@A x\n@@B y\n>>Z");
        assert_eq!(none, vec!["MA", "None apply", "x", "incorrect", "y", "incorrect"]);

        let all = fields("MA. All apply\n@@A x\n@@B y\n>>B\n>>A");
        assert_eq!(all, vec!["MA", "All apply", "x", "correct", "y", "correct"]);
    }

    #[test]
    fn true_false_lower_cased() {
        assert_eq!(
            fields("TF. Sky is blue.\n>>TRUE"),
            vec!["TF", "Sky is blue.", "true"]
        );
        assert_eq!(
            fields("TF. Sky is green.\n>>FaLsE"),
            vec!["TF", "Sky is green.", "false"]
        );
    }

    #[test]
    fn short_reply_takes_whole_block() {
        assert_eq!(
            fields("SR. What is\nyour name?\n"),
            vec!["SR", "What is your name?"]
        );
    }

    #[test]
    fn ordering_is_not_sorted() {
        assert_eq!(
            fields("ORD. Sort.\n>>B\n>>A"),
            vec!["ORD", "Sort.", "B", "A"]
        );
    }

    #[test]
    fn matching_pairs_by_position() {
        let block = "MAT. Opposites.\n@@B hot\n@@A up\n>> cold\n>> down";
        assert_eq!(
            fields(block),
            vec!["MAT", "Opposites.", "B hot", "cold", "A up", "down"]
        );
    }

    #[test]
    fn matching_is_not_multiple_answer() {
        let question = parse_question(0, "MAT1. Pair.\n@@ a\n>> b")
            .unwrap()
            .unwrap();
        assert_eq!(question.kind(), QuestionKind::Matching);

        let question = parse_question(0, "MA1. Pick.\n@@A a\n>>A")
            .unwrap()
            .unwrap();
        assert_eq!(question.kind(), QuestionKind::MultipleAnswer);
    }

    #[test]
    fn question_text_collapsed() {
        let block = r#"
ORD3.

   Put these
   in order

>> first
>> second
        "#
        .trim_ascii();

        assert_eq!(
            fields(block),
            vec!["ORD", "Put these in order", "first", "second"]
        );
    }

    #[test]
    fn parsing_is_stable() {
        let block = "MA. Which?\n@@A one\n@@B two\n>>B";

        let first = parse_question(3, block);
        let second = parse_question(3, block);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_tag_produces_nothing() {
        assert_eq!(parse_question(0, "Q1. What?\n@@A x\n>>A"), Ok(None));
        assert_eq!(parse_question(0, "mc. lower case tag\n@@A x\n>>A"), Ok(None));
    }

    #[test]
    fn whole_file_with_comments_and_quotes() {
        let content = "##header##%%TF1. It\u{2019}s \u{201C}raining\u{201D}.\n>>true\n%%MC2. Broken\n%%SR3. Done";
        let blocks: Vec<Block> = parsing::prepare(content);
        let results = parsing::parse(&blocks);

        assert_eq!(results.len(), 3);

        let question = results[0]
            .as_ref()
            .unwrap();
        assert_eq!(question.text(), "It's \"raining\".");
        assert_eq!(
            results[1]
                .as_ref()
                .unwrap_err()
                .index(),
            2
        );
        assert_eq!(
            results[2]
                .as_ref()
                .unwrap()
                .kind(),
            QuestionKind::ShortReply
        );
    }
}
