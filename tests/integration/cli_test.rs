use anyhow::Result;
use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_pagesim");

/// Test that the CLI writes a text report to the requested file
#[test]
fn test_cli_writes_report_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "6 3 12\n1 2 3 4 1 2 5 1 2 3 4 5\n")?;

    let result = Command::new(BIN)
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()?;
    assert!(result.status.success(), "CLI run failed");

    let stdout = String::from_utf8(result.stdout)?;
    assert!(stdout.contains("FIFO: 9 page faults"));
    assert!(stdout.contains("Optimal: 7 page faults"));
    assert!(stdout.contains("LRU: 10 page faults"));

    let report = fs::read_to_string(&output)?;
    let sections: Vec<&str> = report.split("\n\n").collect();
    assert_eq!(sections.len(), 3);
    assert!(sections[0].starts_with("FIFO\n"));
    assert!(sections[1].starts_with("Optimal\n"));
    assert!(sections[2].starts_with("LRU\n"));
    assert!(sections[2].trim_end().ends_with("10 page faults"));

    Ok(())
}

/// Test JSON output on stdout for a subset of policies
#[test]
fn test_cli_json_to_stdout() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let input = temp_dir.path().join("trace.txt");
    fs::write(&input, "4 2 4 1 2 1 3")?;

    let result = Command::new(BIN)
        .arg(&input)
        .args(["--output", "-", "--format", "json", "--policy", "lru"])
        .output()?;
    assert!(result.status.success(), "CLI run failed");

    let value: serde_json::Value = serde_json::from_slice(&result.stdout)?;
    let reports = value.as_array().expect("expected an array of reports");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["policy"], "LRU");
    assert_eq!(reports[0]["faults"], 3);

    Ok(())
}

/// Test that malformed input fails without writing a report
#[test]
fn test_cli_rejects_malformed_trace() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "5 0 3 1 2 3")?;

    let result = Command::new(BIN)
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()?;

    assert!(!result.status.success());
    assert!(!output.exists());
    let stderr = String::from_utf8(result.stderr)?;
    assert!(stderr.contains("Number of frames must be at least 1"));

    Ok(())
}
