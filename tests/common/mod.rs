use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BUILD_DIRS: &[&str] = &[".tox", "venv", "build", "out"];

pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&work).expect("create isolated workdir");
        fs::create_dir_all(&bin).expect("create stub bin dir");

        Self {
            _tmp: tmp,
            work,
            bin,
        }
    }

    pub fn cmd(&self) -> Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::cargo_bin("charmdev").expect("charmdev binary");
        cmd.current_dir(&self.work)
            .env("PATH", format!("{}:{}", self.bin.display(), path))
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn make_build_dirs(&self) {
        for d in BUILD_DIRS {
            fs::create_dir_all(self.work.join(d)).expect("create build dir");
        }
    }

    /// Drop a fake executable (e.g. `tox`) onto the front of PATH.
    pub fn stub_tool(&self, name: &str, body: &str) {
        write_script(&self.bin.join(name), body);
    }

    /// Drop a script at a path relative to the workdir, e.g.
    /// `scripts/build_charms.sh`.
    pub fn stub_script(&self, rel: &str, body: &str) {
        write_script(&self.work.join(rel), body);
    }
}

fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create script dir");
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perm = fs::metadata(path).expect("script metadata").permissions();
    perm.set_mode(0o755);
    fs::set_permissions(path, perm).expect("make script executable");
}

/// Serve one HTTP response on a loopback port and return the base URL.
pub fn serve_once(body: &'static [u8]) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    });
    format!("http://{addr}")
}
