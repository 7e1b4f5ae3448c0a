use std::process::Command;

#[test]
fn generate_subcommand_is_available() {
    let output = Command::new(env!("CARGO_BIN_EXE_subgen"))
        .args(["generate", "--help"])
        .output()
        .expect("failed to execute subgen");

    assert!(
        output.status.success(),
        "generate --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn generate_on_missing_media_prints_structured_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_subgen"))
        .args(["generate", "/nonexistent/media.wav"])
        .output()
        .expect("failed to execute subgen");

    assert!(
        !output.status.success(),
        "generate should exit non-zero for a missing media file"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a JSON result object");

    assert_eq!(result["status"], "error");
    assert!(
        result["message"]
            .as_str()
            .is_some_and(|m| !m.is_empty()),
        "error result should carry a message, got:\n{}",
        stdout
    );
}

#[test]
fn config_path_prints_a_location() {
    let output = Command::new(env!("CARGO_BIN_EXE_subgen"))
        .args(["config", "path"])
        .output()
        .expect("failed to execute subgen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"));
}
