//! Integration tests for the failure policy flags

#[cfg(test)]
mod continue_on_error_tests {
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_csv2json(args: &[&str]) -> (String, String, bool) {
        let output = Command::new(env!("CARGO_BIN_EXE_csv2json"))
            .args(args)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run csv2json");

        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        )
    }

    fn fixture() -> (tempfile::TempDir, tempfile::TempDir, String) {
        let input_dir = tempdir().unwrap();
        fs::write(input_dir.path().join("a_bad.csv"), b"name\n\xc3\x28\n").unwrap();
        fs::write(input_dir.path().join("b_good.csv"), "name\nOK\n").unwrap();

        let output_dir = tempdir().unwrap();
        let pair = format!(
            "{}={}",
            input_dir.path().display(),
            output_dir.path().display()
        );
        (input_dir, output_dir, pair)
    }

    #[test]
    fn test_abort_on_error_default() {
        let (_input_dir, output_dir, pair) = fixture();

        let (stdout, stderr, success) = run_csv2json(&["--pair", pair.as_str()]);

        // Without --continue-on-error, abort on first error: b_good.csv is never reached
        assert!(!success);
        assert!(stderr.contains("CSV parse error"), "stderr: {}", stderr);
        assert_eq!(stdout, "Converting a_bad.csv\n");
        assert!(!output_dir.path().join("b_good.json").exists());
    }

    #[test]
    fn test_continue_on_error_flag() {
        let (_input_dir, output_dir, pair) = fixture();

        let (stdout, stderr, success) = run_csv2json(&["--pair", pair.as_str(), "--continue-on-error"]);

        // The good file is converted, but the run still reports failure
        assert!(!success);
        assert!(stderr.contains("a_bad.csv"), "stderr: {}", stderr);
        assert!(stderr.contains("1 of 2 file(s) failed"), "stderr: {}", stderr);
        assert!(stdout.contains("Converting b_good.csv\nDone!!"));
        assert!(output_dir.path().join("b_good.json").exists());
    }

    #[test]
    fn test_strict_names_flag() {
        let (input_dir, output_dir, pair) = fixture();
        fs::remove_file(input_dir.path().join("a_bad.csv")).unwrap();
        fs::write(input_dir.path().join("README"), "x\n1\n").unwrap();

        let (_, stderr, success) = run_csv2json(&["--pair", pair.as_str()]);
        assert!(success, "stderr: {}", stderr);
        assert!(stderr.contains("Skipped 1 entries"), "stderr: {}", stderr);

        let (_, stderr, success) = run_csv2json(&["--pair", pair.as_str(), "--strict-names"]);
        assert!(!success);
        assert!(stderr.contains("'README'"), "stderr: {}", stderr);
        assert!(output_dir.path().join("b_good.json").exists());
    }
}
