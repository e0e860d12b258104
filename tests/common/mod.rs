#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::process::{Child, Stdio};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NOTE: &str = "Custom Dictionary.md";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub vault: PathBuf,
    pub downloads: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let vault = tmp.path().join("vault");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&vault).expect("create vault");
        let downloads = home.join("Downloads");

        Self {
            _tmp: tmp,
            home,
            vault,
            downloads,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cdsync");
        cmd.env("HOME", &self.home)
            .env("CDSYNC_VAULT", &self.vault)
            .env_remove("CDSYNC_LOG");
        cmd
    }

    /// Starts `cdsync sync` without `--file` and returns once it is waiting
    /// at the path prompt, i.e. while it holds the sync lock.
    pub fn spawn_prompting_sync(&self) -> Child {
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_cdsync"))
            .env("HOME", &self.home)
            .env("CDSYNC_VAULT", &self.vault)
            .env_remove("CDSYNC_LOG")
            .arg("sync")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn cdsync");
        let mut stderr = child.stderr.take().expect("child stderr");
        let mut seen = Vec::new();
        let mut buf = [0u8; 256];
        while !String::from_utf8_lossy(&seen).contains("empty to cancel") {
            let n = stderr.read(&mut buf).expect("read child stderr");
            assert!(n > 0, "sync exited before prompting: {}", String::from_utf8_lossy(&seen));
            seen.extend_from_slice(&buf[..n]);
        }
        child
    }

    pub fn write_note(&self, content: &str) {
        fs::write(self.vault.join(NOTE), content).expect("write note");
    }

    pub fn read_note(&self) -> String {
        fs::read_to_string(self.vault.join(NOTE)).expect("read note")
    }

    pub fn write_external(&self, name: &str, content: &str) -> PathBuf {
        let p = self.home.join(name);
        fs::write(&p, content).expect("write external list");
        p
    }

    pub fn exported(&self) -> PathBuf {
        self.downloads.join("Custom Dictionary.txt")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn sync_json(&self, external: &Path) -> Value {
        self.run_json(&["sync", "--file", path_str(external)])
    }
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf8 path")
}
