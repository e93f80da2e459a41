use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn casegen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_casegen"))
}

#[test]
fn test_cli_help() {
    let output = casegen()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("casegen"));
    assert!(stdout.contains("--output-file"));
    assert!(stdout.contains("--function"));
    assert!(stdout.contains("INPUT"));
}

#[test]
fn test_cli_missing_input_arg() {
    let output = casegen().output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required") || stderr.contains("INPUT"));
}

#[test]
fn test_cli_nonexistent_input() {
    let output = casegen()
        .arg("/nonexistent/path/sol.txt")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_invalid_function() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("sol.txt");
    fs::write(&file_path, "a 1\n").unwrap();

    let output = casegen()
        .arg(&file_path)
        .args(["--function", "not a name"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_writes_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("sol.txt");
    fs::write(&file_path, "case1 42\n\nCase.Name.1 7\n").unwrap();

    let output = casegen()
        .arg(&file_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        concat!(
            "\n#[test]\nfn case1() {\n    assert_eq!(42, solve(\"case1\"));\n}\n\n",
            "\n#[test]\nfn case_name_1() {\n    assert_eq!(7, solve(\"Case.Name.1\"));\n}\n\n",
        )
    );
}

#[test]
fn test_cli_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("sol.txt");
    let out_path = temp_dir.path().join("generated.rs");
    fs::write(&file_path, "a 1\nb 2\n").unwrap();

    let output = casegen()
        .arg(&file_path)
        .arg("-O")
        .arg(&out_path)
        .args(["-f", "run"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let generated = fs::read_to_string(&out_path).unwrap();
    assert!(generated.contains("assert_eq!(1, run(\"a\"));"));
    assert!(generated.contains("assert_eq!(2, run(\"b\"));"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("sol.txt");
    fs::write(&file_path, "a 1\n").unwrap();

    let output = casegen()
        .arg(&file_path)
        .arg("-v")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stdout.contains("Generation complete"));
    assert!(stderr.contains("Generation complete"));
}

#[test]
fn test_cli_refuses_output_over_input() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("sol.txt");
    fs::write(&file_path, "a 1\nb 2\n").unwrap();

    let output = casegen()
        .arg(&file_path)
        .arg("-O")
        .arg(&file_path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("same as the input"));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "a 1\nb 2\n");
}
