//! Integration tests for the default directory layout, driven through the binary

#[cfg(test)]
mod file_conversion_tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_csv2json(cwd: &Path, args: &[&str]) -> (String, String, bool) {
        let output = Command::new(env!("CARGO_BIN_EXE_csv2json"))
            .args(args)
            .current_dir(cwd)
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

    fn default_layout(root: &Path) {
        for dir in ["csv/payments", "csv/scenarios", "json/payments", "json/scenarios"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_default_pairs_payments_scenario() {
        let root = tempdir().unwrap();
        default_layout(root.path());
        fs::write(root.path().join("csv/payments/001.csv"), "id,amount\n1,100\n2,250\n").unwrap();

        let (stdout, stderr, success) = run_csv2json(root.path(), &[]);

        assert!(success, "conversion should succeed: {}", stderr);
        assert_eq!(stdout, "Converting 001.csv\nDone!!\n");
        assert_eq!(
            fs::read_to_string(root.path().join("json/payments/001.json")).unwrap(),
            r#"[
    {
        "id": "1",
        "amount": "100"
    },
    {
        "id": "2",
        "amount": "250"
    }
]"#
        );
    }

    #[test]
    fn test_missing_default_directories_fail() {
        let root = tempdir().unwrap();

        let (stdout, stderr, success) = run_csv2json(root.path(), &[]);

        assert!(!success);
        assert!(stdout.is_empty());
        assert!(stderr.contains("csv/payments"), "stderr: {}", stderr);
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        let root = tempdir().unwrap();
        default_layout(root.path());
        fs::write(root.path().join("csv/scenarios/s.csv"), "v\n1\n").unwrap();

        let (stdout, stderr, success) = run_csv2json(root.path(), &["--quiet"]);

        assert!(success, "stderr: {}", stderr);
        assert!(stdout.is_empty());
        assert!(root.path().join("json/scenarios/s.json").exists());
    }

    #[test]
    fn test_stats_json_output() {
        let root = tempdir().unwrap();
        default_layout(root.path());
        fs::write(root.path().join("csv/payments/001.csv"), "id\n1\n2\n3\n").unwrap();

        let (stdout, stderr, success) = run_csv2json(root.path(), &["--quiet", "--stats-json"]);

        assert!(success, "stderr: {}", stderr);
        let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(stats["files_converted"], 1);
        assert_eq!(stats["rows_written"], 3);
    }
}
