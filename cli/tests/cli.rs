use std::process::{Command, Output};

use model::{Arch, Os, Platform, Report};

fn run_hello() -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hello")
}

#[test]
fn prints_one_report_line_and_succeeds() {
    let output = run_hello();
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "nothing should be logged by default");

    let stdout = String::from_utf8(output.stdout).expect("output should be utf-8");
    let line = stdout
        .strip_suffix('\n')
        .expect("output should end with a newline");
    assert!(!line.is_empty());
    assert!(!line.contains('\n'), "output should be a single line");

    let report: Report = line.parse().expect("output should be a report line");
    assert_eq!(report.tag, "Go Go C Container");
    assert!(Os::ALL.contains(&report.platform.os));
    assert!(Arch::ALL.contains(&report.platform.arch));
}

#[test]
fn output_is_identical_across_runs() {
    let first = run_hello();
    let second = run_hello();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
fn reports_linux_x86_64() {
    let output = run_hello();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Go Go C Container. Running on: Linux - x86_64\n"
    );
}

#[test]
fn report_matches_host_cfg() {
    let output = run_hello();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: Report = stdout.trim_end().parse().expect("output should be a report line");
    let Platform { os, arch } = report.platform;

    if cfg!(target_os = "windows") {
        assert_eq!(os, Os::Windows);
    } else if cfg!(any(target_os = "linux", target_os = "android")) {
        assert_eq!(os, Os::Linux);
    } else if cfg!(unix) {
        assert_eq!(os, Os::Unix);
    }

    if cfg!(target_arch = "x86_64") {
        assert_eq!(arch, Arch::X86_64);
    } else if cfg!(target_arch = "x86") {
        assert_eq!(arch, Arch::X86);
    } else if cfg!(target_arch = "aarch64") {
        assert_eq!(arch, Arch::Arm64);
    }
}

#[test]
fn rejects_unexpected_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello"))
        .arg("--bogus")
        .output()
        .expect("failed to run hello");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
