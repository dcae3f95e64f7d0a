#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub repo: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        let repo = tmp.path().join("repo");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        fs::create_dir_all(&repo).expect("create repo dir");
        Self {
            _tmp: tmp,
            home,
            work,
            repo,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kmpmt");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env_remove("KMPMT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `check` against the fixture graph and repository.
    pub fn check(&self, targets: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("check")
            .arg("--graph")
            .arg(self.graph_path())
            .arg("--repository")
            .arg(&self.repo);
        for t in targets {
            cmd.arg("--target").arg(t);
        }
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

    pub fn graph_path(&self) -> PathBuf {
        self.work.join("graph.json")
    }

    pub fn report_path(&self) -> PathBuf {
        self.work
            .join("build/reports/kmp-missing-targets/commonMain.md")
    }

    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report_path()).expect("report written")
    }

    /// Publishes a `.module` file with one API variant per platform. Native
    /// platforms are given as konan names prefixed with `native:`, wasm ones
    /// as `wasm:<kind>`.
    pub fn publish(&self, coordinate: &str, platforms: &[&str]) {
        let variants: Vec<Value> = platforms.iter().map(|p| variant(p)).collect();
        self.publish_raw(
            coordinate,
            &json!({"formatVersion": "1.1", "variants": variants}).to_string(),
        );
    }

    pub fn publish_raw(&self, coordinate: &str, body: &str) {
        let parts: Vec<&str> = coordinate.split(':').collect();
        let (group, artifact, version) = (parts[0], parts[1], parts[2]);
        let dir = self
            .repo
            .join(group.replace('.', "/"))
            .join(artifact)
            .join(version);
        fs::create_dir_all(&dir).expect("create module dir");
        fs::write(dir.join(format!("{}-{}.module", artifact, version)), body)
            .expect("write module file");
    }

    /// Writes a graph where project `:app` depends directly on `deps`.
    pub fn write_app_graph(&self, deps: &[&str]) {
        let mut components = vec![json!({
            "id": "project :app",
            "kind": "project",
            "path": ":app",
            "dependencies": deps.iter().map(|d| json!({"selected": d})).collect::<Vec<_>>()
        })];
        for d in deps {
            components.push(module_component(d, &[]));
        }
        self.write_graph(json!({"root": "project :app", "components": components}));
    }

    pub fn write_graph(&self, graph: Value) {
        fs::write(
            self.graph_path(),
            serde_json::to_string_pretty(&graph).expect("serialize graph"),
        )
        .expect("write graph");
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.work.join("kmpmt.toml");
        fs::write(&path, body).expect("write config");
        path
    }
}

pub fn module_component(coordinate: &str, deps: &[&str]) -> Value {
    let parts: Vec<&str> = coordinate.split(':').collect();
    json!({
        "id": coordinate,
        "kind": "module",
        "group": parts[0],
        "module": parts[1],
        "version": parts[2],
        "dependencies": deps.iter().map(|d| json!({"selected": d})).collect::<Vec<_>>()
    })
}

fn variant(platform: &str) -> Value {
    if let Some(konan) = platform.strip_prefix("native:") {
        return json!({"name": format!("{}ApiElements", konan), "attributes": {
            "org.gradle.usage": "kotlin-api",
            "org.jetbrains.kotlin.platform.type": "native",
            "org.jetbrains.kotlin.native.target": konan
        }});
    }
    if let Some(kind) = platform.strip_prefix("wasm:") {
        return json!({"name": format!("wasm{}ApiElements", kind), "attributes": {
            "org.gradle.usage": "kotlin-api",
            "org.jetbrains.kotlin.platform.type": "wasm",
            "org.jetbrains.kotlin.wasm.target": kind
        }});
    }
    let usage = if platform == "jvm" || platform == "androidJvm" {
        "java-api"
    } else {
        "kotlin-api"
    };
    json!({"name": format!("{}ApiElements", platform), "attributes": {
        "org.gradle.usage": usage,
        "org.jetbrains.kotlin.platform.type": platform
    }})
}

pub fn contracts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("docs/contracts")
}
