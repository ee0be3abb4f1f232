//! Build script for ugc-scripter
//!
//! Exposes `UGC_*` compile-time variables read by `src/version.rs`.
//! Any probe that fails (no git checkout, no rustc on PATH) reports
//! "unknown" instead of failing the build.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let git_hash = command_stdout("git", &["rev-parse", "--short=8", "HEAD"]);
    let git_branch = command_stdout("git", &["rev-parse", "--abbrev-ref", "HEAD"]);
    let git_dirty = git_dirty();

    let vars = [
        ("UGC_GIT_HASH", git_hash.clone()),
        ("UGC_GIT_BRANCH", git_branch),
        ("UGC_GIT_DIRTY", git_dirty.to_string()),
        (
            "UGC_BUILD_TIMESTAMP",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        ("UGC_TARGET", cargo_var("TARGET")),
        ("UGC_PROFILE", cargo_var("PROFILE")),
        ("UGC_RUSTC_VERSION", command_stdout("rustc", &["--version"])),
        ("UGC_HOST", cargo_var("HOST")),
    ];

    for (name, value) in &vars {
        println!("cargo:rustc-env={}={}", name, value);
    }

    let dirty = if git_dirty == "true" { " (dirty)" } else { "" };
    eprintln!("ugc-scripter build {}{} [{}]", git_hash, dirty, cargo_var("PROFILE"));
}

/// Trimmed stdout of a successful command, or "unknown"
fn command_stdout(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|stdout| stdout.trim().to_string())
        .filter(|stdout| !stdout.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// "true" when `git status --porcelain` lists changes, "false" when clean
fn git_dirty() -> &'static str {
    match Command::new("git").args(["status", "--porcelain"]).output() {
        Ok(output) if output.status.success() => {
            if output.stdout.is_empty() {
                "false"
            } else {
                "true"
            }
        }
        _ => UNKNOWN,
    }
}

fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| UNKNOWN.to_string())
}
