#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use quiztab::{output, parsing};

    fn files_in(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = files_in(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let blocks = parsing::prepare(&content);
            let results = parsing::parse(&blocks);

            if results.is_empty() {
                println!("File {:?} contained no questions", file);
                failures.push(file.clone());
            }

            for result in &results {
                if let Err(e) = result {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} questions failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = files_in(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let blocks = parsing::prepare(&content);
            let results = parsing::parse(&blocks);

            if results
                .iter()
                .all(|result| result.is_ok())
            {
                println!("File {:?} unexpectedly parsed successfully", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn ensure_golden_output() {
        let files = files_in(Path::new("tests/golden/"));

        for expected in &files {
            let name = expected
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap()
                .replace(output::OUTPUT_SUFFIX, ".txt");
            let source = Path::new("tests/samples/").join(name);

            assert_eq!(
                output::target(&source)
                    .file_name(),
                expected.file_name()
            );

            let content = parsing::load(&source)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", source, e));
            let blocks = parsing::prepare(&content);
            let results = parsing::parse(&blocks);

            let rendered = output::render(&results);
            let golden = fs::read_to_string(expected).expect("Failed to read golden file");

            assert_eq!(rendered, golden, "Output of {:?} differs", source);
        }
    }

    #[test]
    fn missing_file_is_reported() {
        let filename = Path::new("tests/samples/does_not_exist.txt");
        let error = parsing::load(filename).unwrap_err();

        assert_eq!(error.problem, "File not found");
        assert_eq!(error.filename, filename);
    }
}
