#![allow(dead_code)]
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NOERROR_HEADER: &str = ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1";

/// Shell script standing in for `dig`.
///
/// Answers are keyed on the query type, domain and `@nameserver` arguments.
/// Every invocation's arguments are appended to `calls.log`.
pub struct FakeDig {
    dir: TempDir,
    path: PathBuf,
}

pub struct FakeDigBuilder {
    cases: Vec<(String, String)>,
    fallback: String,
    stderr: String,
    exit_code: i32,
}

impl FakeDig {
    pub fn builder() -> FakeDigBuilder {
        FakeDigBuilder {
            cases: Vec::new(),
            fallback: NOERROR_HEADER.to_string(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl FakeDigBuilder {
    pub fn answer(mut self, qtype: &str, domain: &str, nameserver: &str, stdout: &str) -> Self {
        self.cases
            .push((format!("{} {} @{}", qtype, domain, nameserver), stdout.to_string()));
        self
    }

    pub fn status(self, qtype: &str, domain: &str, nameserver: &str, status: &str) -> Self {
        let header = format!(";; ->>HEADER<<- opcode: QUERY, status: {}, id: 7", status);
        self.answer(qtype, domain, nameserver, &header)
    }

    pub fn ns(self, domain: &str, nameserver: &str, targets: &[&str]) -> Self {
        let mut stdout = format!("{}\n;; AUTHORITY SECTION:\n", NOERROR_HEADER);
        for target in targets {
            stdout.push_str(&format!("{}.\t\t172800\tIN\tNS\t{}\n", domain, target));
        }
        self.answer("ns", domain, nameserver, &stdout)
    }

    pub fn fallback(mut self, stdout: &str) -> Self {
        self.fallback = stdout.to_string();
        self
    }

    pub fn stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn build(self) -> FakeDig {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dig");
        let log = dir.path().join("calls.log");

        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!("printf '%s\\n' \"$*\" >> '{}'\n", log.display()));
        script.push_str("key=\"$2 $9 ${10}\"\ncase \"$key\" in\n");
        for (key, stdout) in &self.cases {
            script.push_str(&format!("  \"{}\")\ncat <<'__OUT__'\n{}\n__OUT__\n  ;;\n", key, stdout));
        }
        script.push_str(&format!("  *)\ncat <<'__OUT__'\n{}\n__OUT__\n  ;;\nesac\n", self.fallback));
        if !self.stderr.is_empty() {
            script.push_str(&format!("cat >&2 <<'__ERR__'\n{}\n__ERR__\n", self.stderr));
        }
        script.push_str(&format!("exit {}\n", self.exit_code));

        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        FakeDig { dir, path }
    }
}
