use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tmux-host-stats"))
        .args(["--config", "/nonexistent/tmux-host-stats/config.toml"])
        .args(args)
        .output()
        .expect("failed to run tmux-host-stats")
}

#[test]
fn zero_interval_fails_without_output() {
    let output = run(&["--interval", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Status interval argument must be one or greater."));
}

#[test]
fn invalid_argument_error_is_a_single_line() {
    for args in [&["-i", "0"][..], &["--mem-mode", "-1"], &["-a", "4"], &["-t", "2"]] {
        let output = run(args);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(
            stderr.trim_end().lines().count(),
            1,
            "args {args:?} wrote: {stderr}"
        );
    }
}

#[test]
fn out_of_range_averages_count_fails() {
    let output = run(&["-a", "4"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn negative_memory_mode_fails() {
    let output = run(&["--mem-mode", "-1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Memory mode argument must be zero or greater."));
}

#[test]
fn version_flag_prints_version_only() {
    let output = run(&["-v"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn live_run_prints_one_line() {
    let output = run(&["-i", "1", "-m", "0", "-a", "3"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.lines().count(), 1);
    let line = stdout.trim_end();
    assert!(line.contains("MB "), "unexpected line: {line}");
    assert_eq!(line.split(' ').count(), 5, "unexpected line: {line}");
}
