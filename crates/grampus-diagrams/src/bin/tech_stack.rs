//! Technology-stack overview of the RouteClouds application, grouped by
//! layer: frontend, backend, database, infrastructure, and delivery tooling.

use grampus_core::{Category, DiagramOptions, DiagramSession, Direction, EdgeStyle, Theme};
use grampus_diagrams::{ScriptResult, finish};

fn main() {
    finish(run());
}

fn run() -> ScriptResult {
    let mut diag = DiagramSession::open(
        "RouteClouds Technology Stack",
        DiagramOptions::new()
            .with_direction(Direction::LeftRight)
            .with_filename("routeclouds_tech_stack")
            .with_theme(Theme {
                title_font_size: 16,
                ..Theme::default()
            }),
    )?;

    diag.begin_cluster("Frontend Technologies");
    let react = diag.node("react", Category::React, "React.js")?;
    let vite = diag.node("vite", Category::Blank, "Vite")?;
    let tailwind = diag.node("tailwind", Category::Blank, "TailwindCSS")?;
    let typescript_fe = diag.node("typescript-fe", Category::TypeScript, "TypeScript")?;
    diag.end_cluster()?;

    diag.begin_cluster("Backend Technologies");
    let nodejs = diag.node("nodejs", Category::NodeJs, "Node.js")?;
    let express = diag.node("express", Category::Blank, "Express.js")?;
    let typescript_be = diag.node("typescript-be", Category::TypeScript, "TypeScript")?;
    let jwt = diag.node("jwt", Category::Blank, "JWT Auth")?;
    diag.end_cluster()?;

    diag.begin_cluster("Database");
    let postgres = diag.node("postgres", Category::Sql, "PostgreSQL")?;
    let rds = diag.node("rds", Category::Rds, "AWS RDS")?;
    diag.end_cluster()?;

    diag.begin_cluster("Infrastructure");
    let eks = diag.node("eks", Category::Eks, "AWS EKS")?;
    let terraform = diag.node("terraform", Category::Terraform, "Terraform")?;
    let k8s = diag.node("k8s", Category::Blank, "Kubernetes")?;
    diag.end_cluster()?;

    diag.begin_cluster("DevOps");
    let github_actions = diag.node("github-actions", Category::GithubActions, "GitHub Actions")?;
    let docker = diag.node("docker", Category::Docker, "Docker")?;
    let docker_hub = diag.node("docker-hub", Category::Blank, "Docker Hub")?;
    diag.end_cluster()?;

    // One chain per layer.
    diag.edge(&react, &vite, EdgeStyle::new())?;
    diag.edge(&vite, &tailwind, EdgeStyle::new())?;
    diag.edge(&tailwind, &typescript_fe, EdgeStyle::new())?;
    diag.edge(&nodejs, &express, EdgeStyle::new())?;
    diag.edge(&express, &typescript_be, EdgeStyle::new())?;
    diag.edge(&typescript_be, &jwt, EdgeStyle::new())?;
    diag.edge(&postgres, &rds, EdgeStyle::new())?;
    diag.edge(&eks, &terraform, EdgeStyle::new())?;
    diag.edge(&terraform, &k8s, EdgeStyle::new())?;
    diag.edge(&github_actions, &docker, EdgeStyle::new())?;
    diag.edge(&docker, &docker_hub, EdgeStyle::new())?;

    let path = grampus_render::render(diag)?;
    Ok(vec![path])
}
