//! check / uncheck / status / next / reset through the binary

use super::helpers::*;

#[test]
fn test_check_status_next_flow() {
    let sandbox = Sandbox::new().unwrap();

    let output = sandbox.run(&["next"]).unwrap();
    assert!(stdout(&output).contains("Next:  0.1  Confirm the task cannot be solved"));

    let output = sandbox.run(&["check", "0.1", "0.2"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("✓ Checked 0.1  "));
    assert!(text.contains("✓ Checked 0.2  "));
    assert!(text.contains("2/54 steps done"));

    let output = sandbox.run(&["next"]).unwrap();
    let text = stdout(&output);
    assert!(text.contains("Next:  0.3  Identify the decision-maker and the stakeholders"));
    assert!(text.contains("in 0  Reality check and setup"));

    let output = sandbox.run(&["status"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Overall: 2/54 steps (3%)"));
    assert!(text.contains(&sandbox.state_path().display().to_string()));

    let output = sandbox.run(&["uncheck", "0.1"]).unwrap();
    assert!(stdout(&output).contains("○ Unchecked 0.1  "));
    assert!(stdout(&output).contains("1/54 steps done"));
}

#[test]
fn test_check_branch_covers_leaves() {
    let sandbox = Sandbox::new().unwrap();
    sandbox.run(&["check", "5"]).unwrap();

    let output = sandbox.run(&["show", "--step", "5", "--format", "json", "--progress"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["completed"], true);
    for child in value["children"].as_array().unwrap() {
        assert_eq!(child["completed"], true);
    }

    let output = sandbox.run(&["status"]).unwrap();
    assert!(stdout(&output).contains("Overall: 8/54 steps (14%)"));
}

#[test]
fn test_check_unknown_id_changes_nothing() {
    let sandbox = Sandbox::new().unwrap();
    sandbox.run(&["check", "1"]).unwrap();
    let before = sandbox.read_state().unwrap();

    let output = sandbox.run(&["check", "2", "99"]).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("99"));
    assert_eq!(sandbox.read_state().unwrap(), before);

    let output = sandbox.run(&["check", "1.x"]).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(sandbox.read_state().unwrap(), before);
}

#[test]
fn test_progress_file_is_readable_toml() {
    let sandbox = Sandbox::new().unwrap();
    sandbox.run(&["check", "10.1", "2.1", "3.2.1"]).unwrap();

    let content = sandbox.read_state().unwrap();
    let table: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table["3.2.1"].as_bool(), Some(true));

    // Entries are written in outline order
    let keys: Vec<&str> = content
        .lines()
        .filter(|l| !l.starts_with('#') && l.contains('='))
        .filter_map(|l| l.split('=').next())
        .map(|k| k.trim().trim_matches('"'))
        .collect();
    assert_eq!(keys, ["2.1", "3.2.1", "10.1"]);
}

#[test]
fn test_corrupt_progress_file_fails() {
    let sandbox = Sandbox::new().unwrap();
    std::fs::write(sandbox.state_path(), "this is = = not toml").unwrap();

    let output = sandbox.run(&["status"]).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("progress.toml"));
}

#[test]
fn test_reset() {
    let sandbox = Sandbox::new().unwrap();

    let output = sandbox.run(&["reset"]).unwrap();
    assert!(stdout(&output).contains("No progress recorded"));

    sandbox.run(&["check", "4"]).unwrap();
    assert!(sandbox.state_path().exists());

    let output = sandbox.run(&["reset"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Cleared progress"));
    assert!(!sandbox.state_path().exists());

    let output = sandbox.run(&["status"]).unwrap();
    assert!(stdout(&output).contains("Overall: 0/54 steps (0%)"));
}

#[test]
fn test_all_done() {
    let sandbox = Sandbox::new().unwrap();
    let ids: Vec<String> = (0..=12).map(|i| i.to_string()).collect();
    let mut args = vec!["check"];
    args.extend(ids.iter().map(String::as_str));
    sandbox.run(&args).unwrap();

    let output = sandbox.run(&["next"]).unwrap();
    assert!(stdout(&output).contains("All steps are complete."));
    let output = sandbox.run(&["status"]).unwrap();
    assert!(stdout(&output).contains("Overall: 54/54 steps (100%)"));
}
