//! `mlsteps show` through the binary

use super::helpers::*;

#[test]
fn test_show_plain_lists_every_top_level_step() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["show"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("The 12 Steps of Applied Machine Learning\n"));
    assert!(text.contains("── 0  Reality check and setup"));
    assert!(text.contains("── 12  Monitor and maintain"));
    assert!(text.contains("── 3.2.3  Respect time order for temporal data"));
}

#[test]
fn test_show_json_has_all_leaves() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["show", "--format", "json"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["id"], "");
    assert_eq!(value["children"].as_array().unwrap().len(), 13);
    assert_eq!(count_json_leaves(&value), 54);
    assert!(value.get("completed").is_none());
}

#[test]
fn test_show_markdown_subtree() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["show", "-f", "md", "--step", "3.2"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(lines[0], "# 3.2 Carve out training, validation and test sets");
    assert!(lines.iter().any(|l| l == "- 3.2.1 Pick split proportions that leave enough test data"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("- ")).count(), 3);
}

#[test]
fn test_show_unsupported_format_exits_2() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["show", "--format", "xml"]).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("xml"));
}

#[test]
fn test_show_unknown_step_exits_1() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["show", "--step", "13"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("13"));
}

#[test]
fn test_show_format_from_config() {
    let sandbox = Sandbox::new().unwrap();
    sandbox.write_config("format = \"markdown\"\n").unwrap();

    let output = sandbox.run(&["show", "--step", "9"]).unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("# 9 Test your model\n"));

    // CLI flag wins over config
    let output = sandbox.run(&["show", "--step", "9", "-f", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["id"], "9");
}

#[test]
fn test_show_custom_outline() {
    let sandbox = Sandbox::new().unwrap();
    let outline = sandbox
        .write_file("outline.md", "# Mini\n\n- 1 First\n  - 1.1 Inner\n- 2 Second\n")
        .unwrap();

    let output = sandbox
        .run(&["show", "-f", "json", "--outline", outline.to_str().unwrap()])
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["title"], "Mini");
    assert_eq!(count_json_leaves(&value), 2);
}

#[test]
fn test_show_malformed_outline_reports_line() {
    let sandbox = Sandbox::new().unwrap();
    let outline = sandbox
        .write_file("outline.md", "# Mini\n- 1 First\nnot a list item\n")
        .unwrap();

    let output = sandbox
        .run(&["show", "--outline", outline.to_str().unwrap()])
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("line 3"));
}

#[test]
fn test_completions_bash() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["completions", "bash"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("mlsteps"));
}

#[test]
fn test_completions_unknown_shell() {
    let sandbox = Sandbox::new().unwrap();
    let output = sandbox.run(&["completions", "tcsh"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported shell"));
}
