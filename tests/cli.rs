/// Smoke tests to verify the binary selects strategies and reports usage errors
use std::process::Command;

fn life() -> Command {
    Command::new(env!("CARGO_BIN_EXE_life-strategies"))
}

#[test]
fn binary_shows_help() {
    let output = life().arg("--help").output().expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--method"), "Help output should mention --method");
}

#[test]
fn missing_method_is_usage_error() {
    let output = life().args(["--rows", "8", "--cols", "8"]).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: life-strategies -m <method_number>"));
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn missing_method_reported_before_invalid_config() {
    let output = life().args(["--rows", "0"]).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no update method selected"));
    assert!(stderr.contains("Usage: life-strategies -m <method_number>"));
    assert!(!stderr.contains("invalid configuration"));
}

#[test]
fn config_without_strategy_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("life.json");
    std::fs::write(&path, r#"{ "rows": 0 }"#).unwrap();

    let output = life().arg("--config").arg(&path).output().expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: life-strategies"));
}

#[test]
fn unknown_method_name_shows_usage() {
    let output = life().args(["-m", "diagonal", "--rows", "5", "--cols", "5"]).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown strategy name 'diagonal'"));
    assert!(stderr.contains("Usage: life-strategies -m <method_number>"));
}

#[test]
fn unknown_method_is_usage_error() {
    let output = life().args(["-m", "7", "--rows", "8", "--cols", "8"]).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown update method 7"));
    assert!(stderr.contains("Usage: life-strategies -m <method_number>"));
}

#[test]
fn every_method_prints_the_same_glider_step() {
    let outputs: Vec<String> = ["1", "2", "3", "worker-pool"]
        .iter()
        .map(|method| {
            let output = life()
                .args(["-m", method, "--rows", "6", "--cols", "6", "--print"])
                .output()
                .expect("Failed to run binary");
            assert!(output.status.success(), "method {method} failed");
            String::from_utf8_lossy(&output.stdout).into_owned()
        })
        .collect();

    let expected = concat!(
        " -  -  -  -  -  - \n",
        " -  -  -  -  -  - \n",
        " -  O  -  O  -  - \n",
        " -  -  O  O  -  - \n",
        " -  -  O  -  -  - \n",
        " -  -  -  -  -  - \n",
        "\n\n\n",
    );
    for output in outputs {
        assert_eq!(output, expected);
    }
}

#[test]
fn invalid_dimensions_fail_without_usage() {
    let output = life().args(["-m", "1", "--rows", "0"]).output().expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid configuration"));
}

#[test]
fn config_file_supplies_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("life.json");
    std::fs::write(&path, r#"{ "strategy": "row-parallel", "rows": 5, "cols": 5, "seed": "blinker", "print": true }"#)
        .unwrap();

    let output = life().arg("--config").arg(&path).output().expect("Failed to run binary");
    assert!(output.status.success());

    // Horizontal blinker at (1, 1..=3) turns vertical around (1, 2)
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], " -  -  O  -  - ");
    assert_eq!(lines[1], " -  -  O  -  - ");
    assert_eq!(lines[2], " -  -  O  -  - ");
    assert_eq!(lines[3], " -  -  -  -  - ");
}
