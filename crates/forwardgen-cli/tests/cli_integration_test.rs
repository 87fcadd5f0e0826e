//! Integration tests for the forwardgen binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const REQUEST_CTX: &str = r"
    use std::net::SocketAddr;

    pub struct RequestCtx;

    impl RequestCtx {
        pub fn foo(&self, x: i32) -> String { x.to_string() }
        pub fn bar(&self) {}
        pub fn remote_addr(&self) -> SocketAddr { unimplemented!() }
        pub fn not_found(&mut self) {}
        pub fn not_modified(&mut self) {}
    }
";

fn forwardgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_forwardgen"))
}

/// Tests that running with no arguments uses the built-in defaults.
#[test]
fn test_no_arguments_uses_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("request_ctx.rs"), REQUEST_CTX).unwrap();

    let status = forwardgen().current_dir(temp.path()).status().unwrap();
    assert!(status.success());

    let output = fs::read_to_string(temp.path().join("generated_request_inherited.rs")).unwrap();
    assert!(output.contains("impl RequestContext {"));
    assert!(output.contains("pub fn foo(&self, in1: i32) -> String {"));
    assert!(output.contains("self.ctx.bar();"));
    assert!(!output.contains("fn not_found"));
    assert!(!output.contains("fn not_modified"));
}

/// Tests that repeated runs produce byte-identical output.
#[test]
fn test_repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("request_ctx.rs"), REQUEST_CTX).unwrap();
    let output_path = temp.path().join("generated_request_inherited.rs");

    assert!(forwardgen().current_dir(temp.path()).status().unwrap().success());
    let first = fs::read(&output_path).unwrap();

    assert!(forwardgen().current_dir(temp.path()).status().unwrap().success());
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
}

/// Tests that a missing source file fails with exit status 1.
#[test]
fn test_missing_source_exits_with_failure() {
    let temp = TempDir::new().unwrap();

    let output = forwardgen().current_dir(temp.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert!(!temp.path().join("generated_request_inherited.rs").exists());
}

/// Tests that a configuration file overrides the defaults.
#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ctx.rs"), REQUEST_CTX).unwrap();
    fs::write(
        temp.path().join("forwardgen.toml"),
        r#"
source_path = "ctx.rs"
wrapper_type = "Request"
field_name = "inner"
output_path = "forwarders.rs"
denylist = ["bar"]
"#,
    )
    .unwrap();

    let status = forwardgen()
        .current_dir(temp.path())
        .args(["--config", "forwardgen.toml", "--verbose"])
        .status()
        .unwrap();
    assert!(status.success());

    let output = fs::read_to_string(temp.path().join("forwarders.rs")).unwrap();
    assert!(output.contains("impl Request {"));
    assert!(output.contains("let out1 = self.inner.foo(in1);"));
    assert!(!output.contains("fn bar"));
    // A configured denylist replaces the defaults
    assert!(output.contains("fn not_found"));
}

/// Tests that an invalid configuration file fails without writing.
#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("request_ctx.rs"), REQUEST_CTX).unwrap();
    fs::write(temp.path().join("forwardgen.toml"), "field_name = \"not a field\"\n").unwrap();

    let output = forwardgen()
        .current_dir(temp.path())
        .args(["--config", "forwardgen.toml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("generated_request_inherited.rs").exists());
}
