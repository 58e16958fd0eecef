use assert_cmd::prelude::*;
use std::path::Path;
use std::process::Command;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn engine_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn assert_png(dir: &Path, name: &str) {
    let path = dir.join(name);
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|err| panic!("missing output {}: {err}", path.display()));
    assert!(bytes.starts_with(PNG_MAGIC), "{name} is not a PNG");
}

fn run_script(bin: impl AsRef<std::ffi::OsStr>, expected: &[&str]) {
    let tmp = tempfile::tempdir().expect("tempdir");
    Command::new(bin)
        .current_dir(tmp.path())
        .assert()
        .success();
    for name in expected {
        assert_png(tmp.path(), name);
    }
}

#[test]
fn deployment_architecture_writes_its_png() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    run_script(
        assert_cmd::cargo_bin!("deployment-architecture"),
        &["routeclouds_deployment_architecture.png"],
    );
}

#[test]
fn security_groups_writes_architecture_and_legend() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    run_script(
        assert_cmd::cargo_bin!("security-groups"),
        &[
            "routeclouds_security_group_architecture.png",
            "routeclouds_sg_architecture_legend.png",
        ],
    );
}

#[test]
fn terraform_workflow_writes_its_png() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    run_script(
        assert_cmd::cargo_bin!("terraform-workflow"),
        &["routeclouds_terraform_infra_code_workflow_(step-by-step).png"],
    );
}

#[test]
fn tech_stack_writes_its_png() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    run_script(
        assert_cmd::cargo_bin!("tech-stack"),
        &["routeclouds_tech_stack.png"],
    );
}

#[test]
fn three_tier_overview_writes_its_png() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    run_script(
        assert_cmd::cargo_bin!("three-tier-overview"),
        &["aws_3_tier_eks_architecture.png"],
    );
}
