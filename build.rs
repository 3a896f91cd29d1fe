use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let mut version = pkg_version.clone();

    if let Ok(output) = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output()
        && output.status.success()
    {
        let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !sha.is_empty() {
            version = format!("{pkg_version} ({sha})");
        }
    }

    println!("cargo:rustc-env=GIT_TODO_VERSION={version}");
}
