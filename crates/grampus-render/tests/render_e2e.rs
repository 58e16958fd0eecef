use grampus_core::{Category, DiagramOptions, DiagramSession, Direction, EdgeStyle, OutputFormat};
use std::process::Command;

fn engine_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[test]
fn a_minimal_session_renders_a_non_empty_file() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    let tmp = tempfile::tempdir().expect("tempdir");

    let mut session = DiagramSession::open("T", DiagramOptions::default()).expect("open");
    let a = session.node("a", Category::KubeService, "A").expect("a");
    let b = session.node("b", Category::Rds, "B").expect("b");
    session
        .edge(&a, &b, EdgeStyle::labeled("query"))
        .expect("connect");

    let path = grampus_render::render_in(session, tmp.path()).expect("render");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("t.png"));
    let meta = std::fs::metadata(&path).expect("output metadata");
    assert!(meta.len() > 0, "rendered file is empty");
}

#[test]
fn clustered_sessions_render_with_every_output_format_name() {
    if !engine_available() {
        eprintln!("skipping: graphviz `dot` is not on PATH");
        return;
    }
    let tmp = tempfile::tempdir().expect("tempdir");

    let mut session = DiagramSession::open(
        "Cluster Smoke",
        DiagramOptions::default()
            .with_direction(Direction::TopBottom)
            .with_format(OutputFormat::Svg),
    )
    .expect("open");
    session.begin_cluster("VPC");
    session.begin_cluster("Private Subnets");
    let eks = session
        .node("eks", Category::Eks, "EKS Control Plane")
        .expect("eks");
    session.end_cluster().expect("pop");
    let alb = session
        .node("alb", Category::Alb, "Load Balancer")
        .expect("alb");
    session.end_cluster().expect("pop");
    session.edge(&alb, &eks, EdgeStyle::new()).expect("edge");

    let path = grampus_render::render_in(session, tmp.path()).expect("render");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("cluster_smoke.svg")
    );
    let svg = std::fs::read_to_string(&path).expect("read svg");
    assert!(svg.contains("<svg"), "engine did not produce SVG");
}
