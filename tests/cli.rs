// CLI-level checks on the compiled binary. These run without a TTY on
// purpose: everything except --help/--version must refuse to start.

use assert_cmd::Command;

#[test]
fn version_flag_works_without_a_tty() {
    let output = Command::cargo_bin("gibbet")
        .unwrap()
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("gibbet"));
}

#[test]
fn help_mentions_the_modes() {
    let output = Command::cargo_bin("gibbet")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("--words-dir"));
}

#[test]
fn refuses_to_run_without_a_tty() {
    let output = Command::cargo_bin("gibbet").unwrap().output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stdin must be a tty"));
}
