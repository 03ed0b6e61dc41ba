use std::process::Command;

fn main() {
    // Capture git commit and build date at compile time for `pollbox version`.
    println!(
        "cargo:rustc-env=POLLBOX_GIT_HASH={}",
        cmd_stdout("git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=POLLBOX_BUILD_DATE={}",
        cmd_stdout("date", &["+%Y-%m-%d"])
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
}

/// Run a command and return its trimmed stdout, or "unknown" on any failure.
fn cmd_stdout(cmd: &str, args: &[&str]) -> String {
    Command::new(cmd)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
