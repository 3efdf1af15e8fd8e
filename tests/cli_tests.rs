//! Integration tests for the command-line front end

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::process::{Command, Output};

    use tempfile::TempDir;

    fn run(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_wordcount-dfa"))
            .args(args)
            .output()
            .expect("failed to run wordcount-dfa")
    }

    #[test]
    fn test_no_words_prints_usage() {
        let output = run(&[]);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    }

    #[test]
    fn test_every_invalid_word_is_reported() {
        let output = run(&["ok", "", "two words"]);
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("command line: word 1 was empty"));
        assert!(stderr.contains("command line: word \"two words\" contained a whitespace character"));
        assert!(stderr.contains("Usage:"));
    }

    #[test]
    fn test_program_goes_to_stdout() {
        let output = run(&["ab", "bc"]);
        assert!(output.status.success());
        let program = String::from_utf8(output.stdout).unwrap();
        assert!(program.starts_with("// Generated by wordcount-dfa."));
        assert!(program.contains("const int kStates = 5;"));
        assert!(program.contains("    \"bc\",\n"));
    }

    #[test]
    fn test_words_file_and_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let words = temp_dir.path().join("words.txt");
        let program = temp_dir.path().join("count.cpp");
        fs::write(&words, "# extra words\nbc\n\n").unwrap();

        let output = run(&[
            "ab",
            "--words-file",
            words.to_str().unwrap(),
            "--output",
            program.to_str().unwrap(),
            "--foreign",
            "stay",
        ]);
        assert!(output.status.success());
        assert!(output.stdout.is_empty());

        let source = fs::read_to_string(&program).unwrap();
        assert!(source.contains("const int kWords = 2;"));
        assert!(!source.contains("            state = kRoot;\n"));
        assert!(source.contains("        if (letter < 0) {\n            continue;\n"));
    }

    #[test]
    fn test_file_words_are_reported_against_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let words = temp_dir.path().join("words.txt");
        fs::write(&words, "fine\n  indented\n").unwrap();

        let output = run(&["ab", "bc", "--words-file", words.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(&format!(
            "{}: word \"  indented\" contained a whitespace character",
            words.display()
        )));
        assert!(!stderr.contains("command line:"));
    }

    #[test]
    fn test_missing_words_file_is_an_io_error() {
        let output = run(&["ab", "--words-file", "/nonexistent/words.txt"]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("reading words from /nonexistent/words.txt"));
    }

    #[test]
    fn test_dump_tree_goes_to_stderr() {
        let output = run(&["--dump-tree", "ab", "bc"]);
        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("[0] (a: a[1] (b: ab[2]), b: b[3] (c: bc[4]))"));
    }

    #[test]
    fn test_unknown_foreign_policy_is_rejected() {
        let output = run(&["--foreign", "skip", "ab"]);
        assert!(!output.status.success());
    }
}
